//! Common types shared by the parser, the policies and the step processor.
//!
//! This module provides:
//! 1. **Page identifiers:** The integer type used for every page reference.
//! 2. **Frame set:** Fixed-capacity resident-page storage with stable slot indices.
//! 3. **Error handling:** Parse and configuration errors raised at construction.

/// Error types for reference parsing and configuration validation.
pub mod error;

/// Fixed-capacity frame storage.
pub mod frames;

pub use error::{ConfigError, ParseError, Result, SimError};
pub use frames::FrameSet;

/// Identifier of a virtual memory page as it appears in a reference string.
pub type PageId = i64;
