//! Slot Store - the fixed-capacity contents of the cache.
//!
//! The [`SlotStore`] provides:
//! - Residency lookups by key (linear scan)
//! - Insertion into the first free position
//! - Queue-style eviction (drop the front, shift, append)
//! - Recency reordering (move a slot to the back)
//! - Positional access and in-place overwrite for the clock sweep

use crate::cache::Slot;
use crate::common::Key;

/// A fixed number of positions, each empty or holding one [`Slot`].
///
/// # Layout
/// ```text
///  position:   0        1        2              capacity-1
///            ┌────────┬────────┬────────┬─────┬────────┐
///            │ Slot A │ Slot B │ Slot C │ ... │ empty  │
///            └────────┴────────┴────────┴─────┴────────┘
///              front                             back
/// ```
///
/// Positions fill from the front and never become empty again, so the
/// occupied positions are always a prefix of the store. For FIFO the front
/// is the oldest insertion; for LRU it is the least recently used key.
///
/// A hit moves its slot to the back of the occupied positions, not to the
/// last position of the store. LRU runs can therefore report different
/// counts from the `cacher` reference tool when a hit lands before the
/// store is full. Once the store is full the two agree.
///
/// All lookups are O(capacity). Capacities are small and the scan keeps
/// the position order as the single source of truth.
///
/// # Panics
/// Using the full-store path on a store with free positions (or the
/// reverse) is a bug in the calling policy and panics.
#[derive(Debug, Clone)]
pub struct SlotStore {
    /// Exactly `capacity` positions.
    slots: Vec<Option<Slot>>,

    /// Number of occupied positions.
    occupied: usize,
}

impl SlotStore {
    /// Create a store with `capacity` empty positions.
    ///
    /// # Panics
    /// Panics if `capacity` is 0.
    pub fn new(capacity: usize) -> Self {
        assert!(capacity > 0, "slot store capacity must be > 0");

        Self {
            slots: vec![None; capacity],
            occupied: 0,
        }
    }

    // ========================================================================
    // Queries
    // ========================================================================

    /// Total number of positions.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// Number of occupied positions.
    #[inline]
    pub fn len(&self) -> usize {
        self.occupied
    }

    /// True if no position is occupied.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.occupied == 0
    }

    /// True iff every position is occupied.
    #[inline]
    pub fn is_full(&self) -> bool {
        self.occupied == self.slots.len()
    }

    /// True iff some occupied position holds `key`.
    pub fn contains(&self, key: &Key) -> bool {
        self.position(key).is_some()
    }

    /// Position of the slot holding `key`, if resident.
    pub fn position(&self, key: &Key) -> Option<usize> {
        self.slots
            .iter()
            .position(|slot| matches!(slot, Some(s) if s.key() == key))
    }

    /// The slot holding `key`, if resident.
    pub fn find(&self, key: &Key) -> Option<&Slot> {
        self.slots.iter().flatten().find(|s| s.key() == key)
    }

    /// Mutable access to the slot holding `key`, if resident.
    pub fn find_mut(&mut self, key: &Key) -> Option<&mut Slot> {
        self.slots.iter_mut().flatten().find(|s| s.key() == key)
    }

    /// The slot at `index`.
    ///
    /// # Panics
    /// Panics if the position is out of range or empty.
    pub fn slot_at(&self, index: usize) -> &Slot {
        match &self.slots[index] {
            Some(slot) => slot,
            None => panic!("slot position {} is empty", index),
        }
    }

    /// Mutable access to the slot at `index`.
    ///
    /// # Panics
    /// Panics if the position is out of range or empty.
    pub fn slot_at_mut(&mut self, index: usize) -> &mut Slot {
        match &mut self.slots[index] {
            Some(slot) => slot,
            None => panic!("slot position {} is empty", index),
        }
    }

    /// Occupied slots in position order (front first).
    pub fn iter(&self) -> impl Iterator<Item = &Slot> + '_ {
        self.slots.iter().flatten()
    }

    // ========================================================================
    // Mutations
    // ========================================================================

    /// Place `slot` in the lowest-index empty position and return that index.
    ///
    /// # Panics
    /// Panics if the store is full.
    pub fn insert_first_empty(&mut self, slot: Slot) -> usize {
        let index = match self.slots.iter().position(Option::is_none) {
            Some(index) => index,
            None => panic!("insert_first_empty on a full slot store"),
        };

        self.slots[index] = Some(slot);
        self.occupied += 1;
        index
    }

    /// Drop the slot at the front, shift every other slot one position
    /// toward the front, and place `slot` at the back.
    ///
    /// Returns the evicted slot.
    ///
    /// # Panics
    /// Panics if the store is not full.
    pub fn evict_front_and_shift(&mut self, slot: Slot) -> Slot {
        assert!(self.is_full(), "evict_front_and_shift on a slot store with free positions");

        // The old front ends up at the back, where the new slot replaces it.
        self.slots.rotate_left(1);
        let back = self.slots.len() - 1;
        match self.slots[back].replace(slot) {
            Some(evicted) => evicted,
            None => unreachable!("full slot store had an empty position"),
        }
    }

    /// Move the slot holding `key` behind every other occupied slot,
    /// shifting the slots after it one position toward the front.
    ///
    /// Returns false if `key` is not resident.
    pub fn move_to_end(&mut self, key: &Key) -> bool {
        let Some(index) = self.position(key) else {
            return false;
        };

        // Occupied positions are a prefix, so the back of the recency order
        // is the last occupied position, not the last position.
        self.slots[index..self.occupied].rotate_left(1);
        true
    }

    /// Replace the slot at `index` with `slot`, leaving every other
    /// position untouched. Returns the replaced slot.
    ///
    /// # Panics
    /// Panics if the position is out of range or empty.
    pub fn overwrite_at(&mut self, index: usize, slot: Slot) -> Slot {
        match self.slots[index].replace(slot) {
            Some(old) => old,
            None => panic!("overwrite_at on empty slot position {}", index),
        }
    }
}
