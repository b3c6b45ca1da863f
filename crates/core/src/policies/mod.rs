//! Page Replacement Policies.
//!
//! Implements the algorithms that choose which resident page to evict when a
//! fault occurs with every frame occupied.
//!
//! # Policies
//!
//! - `Fifo`: First-In, First-Out.
//! - `Lru`: Least Recently Used.
//! - `Optimal`: Belady's MIN, driven by a precomputed future-occurrence index.
//! - `Clock`: Second chance, a FIFO ring with per-page reference bits.
//!
//! A run holds exactly one [`PolicyState`] variant. The step processor drives
//! it through the [`ReplacementPolicy`] capability pair and asks it for an
//! explicit [`PolicySnapshot`] after every reference.

/// Clock (second chance) replacement policy.
pub mod clock;

/// First-In, First-Out replacement policy.
pub mod fifo;

/// Least Recently Used replacement policy.
pub mod lru;

/// Optimal (Belady's MIN) replacement policy.
pub mod optimal;

pub use clock::ClockPolicy;
pub use fifo::FifoPolicy;
pub use lru::LruPolicy;
pub use optimal::{FutureIndex, OptimalPolicy};

use serde::Serialize;

use crate::common::{FrameSet, PageId};
use crate::config::Algorithm;
use crate::reference::ReferenceSequence;

/// Trait for page replacement policies.
///
/// Defines the interface for selecting victims and updating bookkeeping.
pub trait ReplacementPolicy {
    /// Selects the slot whose page is evicted.
    ///
    /// Only called on a fault while `frames` is full. The policy drops its own
    /// bookkeeping for the victim before returning.
    ///
    /// # Arguments
    ///
    /// * `frames` - The resident pages, in slot order.
    /// * `step` - Zero-based index of the faulting reference.
    ///
    /// # Returns
    ///
    /// The slot index to overwrite, always `< frames.len()`.
    fn select_victim(&mut self, frames: &FrameSet, step: usize) -> usize;

    /// Updates the policy after `page` has been accessed.
    ///
    /// On a fault this runs after `page` has been placed in its frame.
    ///
    /// # Arguments
    ///
    /// * `page` - The referenced page, now resident.
    /// * `hit` - Whether the reference was a hit.
    fn record_access(&mut self, page: PageId, hit: bool);

    /// Copies the policy's current bookkeeping into an owned snapshot.
    ///
    /// # Arguments
    ///
    /// * `frames` - The resident pages after the current step.
    /// * `step` - Zero-based index of the reference just processed.
    fn snapshot(&self, frames: &FrameSet, step: usize) -> PolicySnapshot;

    /// Discards all per-run bookkeeping so the policy can replay from step 0.
    fn reset(&mut self);
}

/// Per-run policy state; exactly one variant is active.
#[derive(Debug, Clone)]
pub enum PolicyState {
    /// FIFO insertion queue.
    Fifo(FifoPolicy),
    /// LRU recency list.
    Lru(LruPolicy),
    /// Optimal future-occurrence index.
    Optimal(OptimalPolicy),
    /// Clock reference bits and hand.
    Clock(ClockPolicy),
}

impl PolicyState {
    /// Allocates the state for `algorithm`.
    ///
    /// For [`Algorithm::Optimal`] this scans `references` once to build the
    /// future-occurrence index; the other policies ignore the sequence.
    pub fn new(algorithm: Algorithm, frames: usize, references: &ReferenceSequence) -> Self {
        match algorithm {
            Algorithm::Fifo => Self::Fifo(FifoPolicy::new()),
            Algorithm::Lru => Self::Lru(LruPolicy::new()),
            Algorithm::Optimal => Self::Optimal(OptimalPolicy::new(references)),
            Algorithm::Clock => Self::Clock(ClockPolicy::new(frames)),
        }
    }

    /// The algorithm this state belongs to.
    pub const fn algorithm(&self) -> Algorithm {
        match self {
            Self::Fifo(_) => Algorithm::Fifo,
            Self::Lru(_) => Algorithm::Lru,
            Self::Optimal(_) => Algorithm::Optimal,
            Self::Clock(_) => Algorithm::Clock,
        }
    }
}

impl ReplacementPolicy for PolicyState {
    fn select_victim(&mut self, frames: &FrameSet, step: usize) -> usize {
        match self {
            Self::Fifo(p) => p.select_victim(frames, step),
            Self::Lru(p) => p.select_victim(frames, step),
            Self::Optimal(p) => p.select_victim(frames, step),
            Self::Clock(p) => p.select_victim(frames, step),
        }
    }

    fn record_access(&mut self, page: PageId, hit: bool) {
        match self {
            Self::Fifo(p) => p.record_access(page, hit),
            Self::Lru(p) => p.record_access(page, hit),
            Self::Optimal(p) => p.record_access(page, hit),
            Self::Clock(p) => p.record_access(page, hit),
        }
    }

    fn snapshot(&self, frames: &FrameSet, step: usize) -> PolicySnapshot {
        match self {
            Self::Fifo(p) => p.snapshot(frames, step),
            Self::Lru(p) => p.snapshot(frames, step),
            Self::Optimal(p) => p.snapshot(frames, step),
            Self::Clock(p) => p.snapshot(frames, step),
        }
    }

    fn reset(&mut self) {
        match self {
            Self::Fifo(p) => p.reset(),
            Self::Lru(p) => p.reset(),
            Self::Optimal(p) => p.reset(),
            Self::Clock(p) => p.reset(),
        }
    }
}

/// Owned copy of a policy's bookkeeping at one step.
///
/// Serialized with an `algorithm` tag, e.g.
/// `{"algorithm":"clock","reference_bits":[true,false],"hand":1}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "algorithm", rename_all = "lowercase")]
pub enum PolicySnapshot {
    /// Pages in eviction order, oldest first.
    Fifo {
        /// Insertion queue; the head is the next victim.
        queue: Vec<PageId>,
    },
    /// Pages in recency order, least recently used first.
    Lru {
        /// Recency list; the head is the next victim.
        recency: Vec<PageId>,
    },
    /// Next use of each resident page.
    Optimal {
        /// Per frame slot: the next reference index after this step, `None` if never.
        next_use: Vec<Option<usize>>,
    },
    /// Reference bits and hand position.
    Clock {
        /// Per frame slot: the resident page's reference bit.
        reference_bits: Vec<bool>,
        /// Slot the next scan starts from.
        hand: usize,
    },
}
