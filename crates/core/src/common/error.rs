//! Error definitions for the simulation engine.
//!
//! Errors are only ever raised while building a simulator:
//! 1. **Parse errors:** A reference token that is not an integer.
//! 2. **Configuration errors:** A frame count below one or an unknown algorithm selector.
//!
//! Once a [`Simulator`](crate::sim::Simulator) exists, stepping through the
//! reference string is total and cannot fail.

use thiserror::Error;

/// A token in the reference input could not be read as a page number.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid page reference `{token}` at position {position}")]
pub struct ParseError {
    /// The trimmed token that failed to parse.
    pub token: String,
    /// Zero-based index of the token among the non-empty tokens of the input.
    pub position: usize,
}

/// The requested simulation parameters are unusable.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// The frame count must be at least one.
    #[error("frame count must be at least 1, got {0}")]
    InvalidFrameCount(usize),

    /// The algorithm selector is not one of `fifo`, `lru`, `optimal`, `clock`.
    #[error("unknown algorithm `{0}` (expected one of: fifo, lru, optimal, clock)")]
    UnknownAlgorithm(String),
}

/// Top-level error returned by simulator construction.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SimError {
    /// Malformed reference input.
    #[error(transparent)]
    Parse(#[from] ParseError),

    /// Invalid frame count or algorithm selector.
    #[error(transparent)]
    InvalidConfiguration(#[from] ConfigError),
}

/// Result alias used throughout the engine.
pub type Result<T> = std::result::Result<T, SimError>;
