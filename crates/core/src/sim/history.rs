//! Simulation history.
//!
//! Every processed reference appends one [`StepRecord`]. Records are owned
//! value copies: later steps never alter an earlier record, so a playback
//! front end can seek to any index without re-running the engine.

use serde::Serialize;

use crate::common::PageId;
use crate::policies::PolicySnapshot;

/// Snapshot of the simulation immediately after one reference.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StepRecord {
    /// Zero-based position of the reference in the sequence.
    pub step: usize,
    /// The referenced page.
    pub page: PageId,
    /// Whether the page was already resident.
    pub hit: bool,
    /// Page evicted to make room, if the fault found every frame occupied.
    pub evicted: Option<PageId>,
    /// Resident pages in slot order after the step.
    pub frames: Vec<PageId>,
    /// Policy bookkeeping after the step.
    pub policy: PolicySnapshot,
}

impl StepRecord {
    /// Returns `true` if the reference missed.
    #[inline]
    pub const fn is_fault(&self) -> bool {
        !self.hit
    }

    /// Slot now holding the referenced page.
    pub fn slot(&self) -> Option<usize> {
        self.frames.iter().position(|&p| p == self.page)
    }
}
