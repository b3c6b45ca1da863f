//! Clock (Second Chance) Replacement Policy.
//!
//! Frames form a ring scanned by a rotating hand. Every access sets the
//! page's reference bit. To find a victim the hand inspects the page in its
//! slot: a set bit is cleared and the hand moves on (the page gets a second
//! chance); a clear bit selects that page and the hand stops one slot past it.
//!
//! Because each inspected bit is cleared on the first pass, the scan ends
//! within `F + 1` inspections. With no hits between faults every bit is set,
//! so the scan wraps once and the policy degenerates to FIFO.
//!
//! # Performance
//!
//! - **Time Complexity:**
//!   - `record_access()`: O(1)
//!   - `select_victim()`: O(F) worst case
//! - **Space Complexity:** O(F) where F is the number of frames

use std::collections::HashMap;

use tracing::trace;

use super::{PolicySnapshot, ReplacementPolicy};
use crate::common::{FrameSet, PageId};

/// Clock Policy state.
#[derive(Debug, Clone)]
pub struct ClockPolicy {
    /// Reference bit of every resident page.
    reference_bits: HashMap<PageId, bool>,
    /// Slot the next scan starts from.
    hand: usize,
    /// Number of frames; the hand moves modulo this value.
    frames: usize,
}

impl ClockPolicy {
    /// Creates a new Clock policy instance.
    ///
    /// # Arguments
    ///
    /// * `frames` - The number of frames in the ring.
    pub fn new(frames: usize) -> Self {
        Self {
            reference_bits: HashMap::new(),
            hand: 0,
            frames: frames.max(1),
        }
    }

    /// Current hand position.
    #[inline]
    pub const fn hand(&self) -> usize {
        self.hand
    }

    /// Reference bit of `page`, or `false` if it is not resident.
    pub fn reference_bit(&self, page: PageId) -> bool {
        self.reference_bits.get(&page).copied().unwrap_or(false)
    }
}

impl ReplacementPolicy for ClockPolicy {
    /// Sweeps from the hand, granting second chances, until a clear bit is found.
    fn select_victim(&mut self, frames: &FrameSet, _step: usize) -> usize {
        for _ in 0..=self.frames.saturating_mul(2) {
            let slot = self.hand;
            self.hand = (self.hand + 1) % self.frames;
            let Some(page) = frames.get(slot) else {
                continue;
            };
            match self.reference_bits.get_mut(&page) {
                Some(bit) if *bit => {
                    *bit = false;
                    trace!(slot, page, "clock: second chance");
                }
                _ => {
                    let _ = self.reference_bits.remove(&page);
                    trace!(slot, page, "clock: victim");
                    return slot;
                }
            }
        }
        self.hand
    }

    /// Sets the reference bit of `page`.
    fn record_access(&mut self, page: PageId, _hit: bool) {
        let _ = self.reference_bits.insert(page, true);
    }

    fn snapshot(&self, frames: &FrameSet, _step: usize) -> PolicySnapshot {
        PolicySnapshot::Clock {
            reference_bits: frames
                .pages()
                .iter()
                .map(|&page| self.reference_bit(page))
                .collect(),
            hand: self.hand,
        }
    }

    fn reset(&mut self) {
        self.reference_bits.clear();
        self.hand = 0;
    }
}
