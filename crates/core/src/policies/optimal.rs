//! Optimal (Belady's MIN) Replacement Policy.
//!
//! This policy evicts the resident page whose next reference lies furthest in
//! the future, or that is never referenced again. It needs the whole reference
//! string up front, which is why it is a benchmark rather than a practical
//! policy: no other policy can produce fewer faults.
//!
//! The future-occurrence index is built once, before the first step, and is
//! read-only afterwards. Lookups binary-search a page's occurrence list.
//!
//! Ties (including several pages that never recur) go to the first such page
//! in frame slot order.
//!
//! # Performance
//!
//! - **Time Complexity:**
//!   - index construction: O(N) where N is the reference count
//!   - `select_victim()`: O(F log N)
//!   - `record_access()`: O(1), no state changes
//! - **Space Complexity:** O(N) index entries

use std::collections::HashMap;
use std::sync::Arc;

use super::{PolicySnapshot, ReplacementPolicy};
use crate::common::{FrameSet, PageId};
use crate::reference::ReferenceSequence;

/// Map from page to the ascending positions at which it is referenced.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FutureIndex {
    occurrences: HashMap<PageId, Vec<usize>>,
}

impl FutureIndex {
    /// Scans `references` once, recording every position of every page.
    pub fn build(references: &ReferenceSequence) -> Self {
        let mut occurrences: HashMap<PageId, Vec<usize>> = HashMap::new();
        for (position, page) in references.iter().enumerate() {
            occurrences.entry(page).or_default().push(position);
        }
        Self { occurrences }
    }

    /// Ascending positions of `page`; empty if it never occurs.
    pub fn occurrences(&self, page: PageId) -> &[usize] {
        self.occurrences.get(&page).map_or(&[], Vec::as_slice)
    }

    /// First position of `page` strictly greater than `step`.
    pub fn next_use(&self, page: PageId, step: usize) -> Option<usize> {
        let positions = self.occurrences(page);
        let idx = positions.partition_point(|&p| p <= step);
        positions.get(idx).copied()
    }

    /// Total number of index entries (equals the reference count).
    pub fn entries(&self) -> usize {
        self.occurrences.values().map(Vec::len).sum()
    }
}

/// Optimal Policy state.
#[derive(Debug, Clone)]
pub struct OptimalPolicy {
    /// Shared read-only index; cloning the policy never copies it.
    index: Arc<FutureIndex>,
}

impl OptimalPolicy {
    /// Creates a new Optimal policy, building the index from `references`.
    pub fn new(references: &ReferenceSequence) -> Self {
        Self {
            index: Arc::new(FutureIndex::build(references)),
        }
    }

    /// The future-occurrence index.
    pub fn index(&self) -> &FutureIndex {
        &self.index
    }
}

impl ReplacementPolicy for OptimalPolicy {
    /// Returns the slot of the page used furthest in the future.
    fn select_victim(&mut self, frames: &FrameSet, step: usize) -> usize {
        let mut victim = 0;
        let mut furthest = None;
        for (slot, &page) in frames.pages().iter().enumerate() {
            let distance = self.index.next_use(page, step).unwrap_or(usize::MAX);
            if furthest.is_none_or(|best| distance > best) {
                victim = slot;
                furthest = Some(distance);
            }
        }
        victim
    }

    fn record_access(&mut self, _page: PageId, _hit: bool) {}

    fn snapshot(&self, frames: &FrameSet, step: usize) -> PolicySnapshot {
        PolicySnapshot::Optimal {
            next_use: frames
                .pages()
                .iter()
                .map(|&page| self.index.next_use(page, step))
                .collect(),
        }
    }

    fn reset(&mut self) {}
}
