//! Physical frame storage.
//!
//! A [`FrameSet`] holds the resident pages of one simulation run. Slots are
//! filled left to right while capacity remains; afterwards a page only enters
//! by overwriting a victim's slot, so every resident page keeps its slot index
//! for as long as it stays resident. Clock's hand and the renderers rely on
//! this stability.

use super::PageId;

/// Fixed-capacity set of resident pages with stable slot indices.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrameSet {
    slots: Vec<PageId>,
    capacity: usize,
}

impl FrameSet {
    /// Creates an empty frame set with room for `capacity` pages.
    ///
    /// Slots are allocated as pages arrive, so `capacity` may exceed any
    /// reference string length.
    pub const fn new(capacity: usize) -> Self {
        Self {
            slots: Vec::new(),
            capacity,
        }
    }

    /// Maximum number of resident pages.
    #[inline]
    pub const fn capacity(&self) -> usize {
        self.capacity
    }

    /// Number of occupied slots.
    #[inline]
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// Returns `true` if no page is resident.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Returns `true` once every slot is occupied.
    #[inline]
    pub fn is_full(&self) -> bool {
        self.slots.len() >= self.capacity
    }

    /// Returns `true` if `page` is resident.
    #[inline]
    pub fn contains(&self, page: PageId) -> bool {
        self.slots.contains(&page)
    }

    /// Slot index holding `page`, if resident.
    pub fn slot_of(&self, page: PageId) -> Option<usize> {
        self.slots.iter().position(|&p| p == page)
    }

    /// Page stored in `slot`, if that slot is occupied.
    pub fn get(&self, slot: usize) -> Option<PageId> {
        self.slots.get(slot).copied()
    }

    /// Resident pages in slot order.
    #[inline]
    pub fn pages(&self) -> &[PageId] {
        &self.slots
    }

    /// Places `page` in the next free slot and returns that slot.
    ///
    /// The step processor only calls this while the set is not full.
    pub fn push(&mut self, page: PageId) -> usize {
        debug_assert!(!self.is_full(), "push into a full frame set");
        self.slots.push(page);
        self.slots.len() - 1
    }

    /// Overwrites `slot` with `page`, returning the evicted page.
    ///
    /// # Panics
    ///
    /// Panics if `slot` is not occupied.
    pub fn replace(&mut self, slot: usize, page: PageId) -> PageId {
        std::mem::replace(&mut self.slots[slot], page)
    }

    /// Removes every resident page.
    pub fn clear(&mut self) {
        self.slots.clear();
    }
}
