//! Page-replacement simulation engine.
//!
//! This crate computes complete, replayable traces of classical page-replacement
//! algorithms over a finite reference string:
//! 1. **Input:** Parsing of textual or structured reference sequences.
//! 2. **Policies:** FIFO, LRU, Optimal (Belady's MIN) and Clock (second chance).
//! 3. **Simulation:** Step processor producing an append-only history of snapshots.
//! 4. **Reporting:** Aggregate statistics, a human-readable trace and cross-algorithm comparison.
//!
//! The engine performs no I/O and has no rendering dependency; renderers and
//! exporters consume [`sim::StepRecord`] values and [`stats::Statistics`].
//!
//! # Examples
//!
//! ```
//! use pagesim_core::{Algorithm, ReferenceSequence, Simulator};
//!
//! let refs: ReferenceSequence = "1,2,3,4,1,2,5,1,2,3,4,5".parse().unwrap();
//! let mut sim = Simulator::new(refs, 3, Algorithm::Fifo).unwrap();
//! let history = sim.simulate();
//! assert_eq!(history.len(), 12);
//! assert_eq!(sim.statistics().fault_count, 9);
//! ```

/// Shared types (page identifiers, frame set) and error definitions.
pub mod common;
/// Simulation configuration (algorithm selector, reference input, defaults).
pub mod config;
/// Replacement policies and the per-run policy state.
pub mod policies;
/// Reference sequence parsing and generation.
pub mod reference;
/// Step processor, history records, trace rendering and comparison.
pub mod sim;
/// Aggregate statistics derived from a run.
pub mod stats;

/// Algorithm selector; parse from `"fifo"`, `"lru"`, `"optimal"` or `"clock"`.
pub use crate::config::{Algorithm, SimConfig};
/// Crate-wide error type.
pub use crate::common::error::SimError;
/// Parsed, immutable reference string.
pub use crate::reference::ReferenceSequence;
/// The simulation engine; construct one per run.
pub use crate::sim::Simulator;
