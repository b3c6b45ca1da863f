//! Shared fixtures for the engine tests.

use pagesim_core::{Algorithm, ReferenceSequence, Simulator};
use pagesim_core::sim::StepRecord;

/// Silberschatz et al. reference string; 3 frames gives FIFO 15, LRU 12, OPT 9.
pub const TEXTBOOK: &str = "7,0,1,2,0,3,0,4,2,3,0,3,2,1,2,0,1,7,0,1";

/// Reference string exhibiting Belady's anomaly under FIFO.
pub const BELADY: &str = "1,2,3,4,1,2,5,1,2,3,4,5";

/// Parses a fixture string.
pub fn refs(text: &str) -> ReferenceSequence {
    text.parse().unwrap()
}

/// Runs a complete simulation and returns the finished simulator.
pub fn run(text: &str, frames: usize, algorithm: Algorithm) -> Simulator {
    let mut sim = Simulator::new(refs(text), frames, algorithm).unwrap();
    let _ = sim.simulate();
    sim
}

/// Fault count of a complete run.
pub fn faults(text: &str, frames: usize, algorithm: Algorithm) -> usize {
    run(text, frames, algorithm).statistics().fault_count
}

/// Frame contents of every step, for compact history assertions.
pub fn frame_trace(history: &[StepRecord]) -> Vec<Vec<i64>> {
    history.iter().map(|r| r.frames.clone()).collect()
}

/// Evicted page of every step.
pub fn evictions(history: &[StepRecord]) -> Vec<Option<i64>> {
    history.iter().map(|r| r.evicted).collect()
}
