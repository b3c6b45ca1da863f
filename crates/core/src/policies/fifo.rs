//! First-In, First-Out (FIFO) Replacement Policy.
//!
//! This policy evicts the page that was loaded earliest, regardless of how
//! often or how recently it was referenced since. Hits never reorder the queue.
//! FIFO is the textbook example of Belady's anomaly: adding frames can
//! increase the number of faults.
//!
//! # Performance
//!
//! - **Time Complexity:**
//!   - `record_access()`: O(1)
//!   - `select_victim()`: O(F) to locate the victim's slot
//! - **Space Complexity:** O(F) where F is the number of frames

use std::collections::VecDeque;

use super::{PolicySnapshot, ReplacementPolicy};
use crate::common::{FrameSet, PageId};

/// FIFO Policy state.
#[derive(Debug, Clone, Default)]
pub struct FifoPolicy {
    /// Resident pages in load order; the front is the next victim.
    queue: VecDeque<PageId>,
}

impl FifoPolicy {
    /// Creates a new FIFO policy instance with an empty queue.
    pub const fn new() -> Self {
        Self {
            queue: VecDeque::new(),
        }
    }

    /// Resident pages in load order.
    pub fn queue(&self) -> impl Iterator<Item = PageId> + '_ {
        self.queue.iter().copied()
    }
}

impl ReplacementPolicy for FifoPolicy {
    /// Pops the oldest page and returns its slot.
    fn select_victim(&mut self, frames: &FrameSet, _step: usize) -> usize {
        let victim = self.queue.pop_front();
        debug_assert!(victim.is_some(), "FIFO queue empty on a full frame set");
        victim.and_then(|page| frames.slot_of(page)).unwrap_or(0)
    }

    /// Appends newly loaded pages; hits leave the order untouched.
    fn record_access(&mut self, page: PageId, hit: bool) {
        if !hit {
            self.queue.push_back(page);
        }
    }

    fn snapshot(&self, _frames: &FrameSet, _step: usize) -> PolicySnapshot {
        PolicySnapshot::Fifo {
            queue: self.queue.iter().copied().collect(),
        }
    }

    fn reset(&mut self) {
        self.queue.clear();
    }
}
