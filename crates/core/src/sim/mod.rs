//! Simulation engine.
//!
//! This module owns every state transition of a run. It provides:
//! 1. **Step processor:** [`Simulator`], which classifies each reference and drives the policy.
//! 2. **History:** [`StepRecord`], the immutable per-step snapshot consumed by renderers.
//! 3. **Reporting:** The human-readable execution trace.
//! 4. **Comparison:** All four algorithms, or one algorithm across frame counts, on one input.

/// Cross-algorithm comparison and fault curves.
pub mod compare;

/// Per-step history records.
pub mod history;

/// Step processor.
pub mod simulator;

/// Execution trace rendering.
pub mod trace;

pub use compare::{Comparison, ComparisonRow, FaultCurve, FaultPoint, compare, fault_curve};
pub use history::StepRecord;
pub use simulator::Simulator;
pub use trace::ExecutionTrace;
