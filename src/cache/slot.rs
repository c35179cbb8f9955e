//! Slot - one resident entry in the cache.
//!
//! A [`Slot`] holds a [`Key`] plus the metadata replacement policies need:
//! - The key that is resident
//! - The reference flag used by CLOCK

use crate::common::Key;

/// A cache entry occupying one position of a [`SlotStore`].
///
/// Slots are owned exclusively by the store. Replacing a slot drops the
/// old one, releasing its key.
///
/// [`SlotStore`]: crate::cache::SlotStore
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Slot {
    /// The resident key.
    key: Key,

    /// Set on a hit, cleared by the CLOCK sweep. Ignored by FIFO and LRU.
    referenced: bool,
}

impl Slot {
    /// Create a slot for a freshly admitted key. The reference flag starts
    /// cleared.
    pub fn new(key: Key) -> Self {
        Self {
            key,
            referenced: false,
        }
    }

    /// The resident key.
    #[inline]
    pub fn key(&self) -> &Key {
        &self.key
    }

    /// Whether the reference flag is set.
    #[inline]
    pub fn is_referenced(&self) -> bool {
        self.referenced
    }

    /// Set the reference flag (the slot was hit).
    #[inline]
    pub fn mark_referenced(&mut self) {
        self.referenced = true;
    }

    /// Clear the reference flag (the clock hand passed over the slot).
    #[inline]
    pub fn clear_referenced(&mut self) {
        self.referenced = false;
    }
}
