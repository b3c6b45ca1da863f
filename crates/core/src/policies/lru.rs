//! Least Recently Used (LRU) Replacement Policy.
//!
//! This policy evicts the page that has gone unreferenced for the longest
//! time. It keeps a recency list: every access, hit or fault, moves the page
//! to the tail (most recently used end), so the head is always the victim.
//!
//! # Performance
//!
//! - **Time Complexity:**
//!   - `record_access()`: O(F) where F is the number of frames
//!   - `select_victim()`: O(F) to locate the victim's slot
//! - **Space Complexity:** O(F)
//! - **Best Case:** Reference strings with strong temporal locality
//! - **Worst Case:** Cyclic scans one page larger than the frame count (every reference faults)

use std::collections::VecDeque;

use super::{PolicySnapshot, ReplacementPolicy};
use crate::common::{FrameSet, PageId};

/// LRU Policy state.
#[derive(Debug, Clone, Default)]
pub struct LruPolicy {
    /// Resident pages; index 0 is least recently used, the back is most recent.
    recency: VecDeque<PageId>,
}

impl LruPolicy {
    /// Creates a new LRU policy instance with an empty recency list.
    pub const fn new() -> Self {
        Self {
            recency: VecDeque::new(),
        }
    }

    /// Resident pages from least to most recently used.
    pub fn recency(&self) -> impl Iterator<Item = PageId> + '_ {
        self.recency.iter().copied()
    }
}

impl ReplacementPolicy for LruPolicy {
    /// Pops the least recently used page and returns its slot.
    fn select_victim(&mut self, frames: &FrameSet, _step: usize) -> usize {
        let victim = self.recency.pop_front();
        debug_assert!(victim.is_some(), "LRU list empty on a full frame set");
        victim.and_then(|page| frames.slot_of(page)).unwrap_or(0)
    }

    /// Moves `page` to the most recently used end.
    fn record_access(&mut self, page: PageId, _hit: bool) {
        if let Some(pos) = self.recency.iter().position(|&p| p == page) {
            let _ = self.recency.remove(pos);
        }
        self.recency.push_back(page);
    }

    fn snapshot(&self, _frames: &FrameSet, _step: usize) -> PolicySnapshot {
        PolicySnapshot::Lru {
            recency: self.recency.iter().copied().collect(),
        }
    }

    fn reset(&mut self) {
        self.recency.clear();
    }
}
