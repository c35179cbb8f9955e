//! Eviction policy implementations.
//!
//! Implements:
//! - [`Fifo`] - evict in insertion order
//! - [`Lru`] - evict the least recently used key
//! - [`Clock`] - second chance via per-slot reference flags
//!
//! All three share the same miss classification: a miss on a key the
//! [`MembershipTracker`] has seen before is a capacity miss, anything else
//! is compulsory and records the key. The rule does not look at whether
//! the store has ever been full.

mod clock;
mod fifo;
mod lru;

use std::fmt;

use crate::cache::{MembershipTracker, Slot, SlotStore};
use crate::common::{Key, PolicyKind};

pub use clock::Clock;
pub use fifo::Fifo;
pub use lru::Lru;

/// Why an access missed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MissKind {
    /// First reference to the key in this run.
    Compulsory,
    /// The key was referenced before but is no longer resident.
    Capacity,
}

/// Outcome of one access.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Verdict {
    /// The key was resident.
    Hit,
    /// The key was not resident and has been admitted.
    Miss(MissKind),
}

impl Verdict {
    #[inline]
    pub fn is_hit(&self) -> bool {
        matches!(self, Verdict::Hit)
    }

    #[inline]
    pub fn is_miss(&self) -> bool {
        !self.is_hit()
    }

    /// The miss classification, or None for a hit.
    pub fn miss_kind(&self) -> Option<MissKind> {
        match self {
            Verdict::Hit => None,
            Verdict::Miss(kind) => Some(*kind),
        }
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Verdict::Hit => f.write_str("HIT"),
            Verdict::Miss(_) => f.write_str("MISS"),
        }
    }
}

/// A replacement strategy.
///
/// `access` decides hit or miss for `key`, updates the store's order and
/// metadata, picks a victim when the store is full, and classifies misses
/// through the tracker.
pub trait EvictionPolicy {
    /// Which policy this is.
    fn kind(&self) -> PolicyKind;

    /// Process one reference to `key`.
    fn access(
        &mut self,
        store: &mut SlotStore,
        tracker: &mut MembershipTracker,
        key: &Key,
    ) -> Verdict;
}

/// Classify a miss on `key`, recording the key on first sight.
pub(crate) fn classify_miss(tracker: &mut MembershipTracker, key: &Key) -> MissKind {
    if tracker.has_seen(key) {
        MissKind::Capacity
    } else {
        tracker.record(key);
        MissKind::Compulsory
    }
}

/// Admit a missed key in queue order: append when there is room,
/// otherwise drop the front and append. Shared by FIFO and LRU.
pub(crate) fn admit_queued(store: &mut SlotStore, key: &Key, policy: PolicyKind) {
    let slot = Slot::new(key.clone());
    if store.is_full() {
        let evicted = store.evict_front_and_shift(slot);
        tracing::debug!(
            policy = %policy,
            victim = %evicted.key(),
            key = %key,
            "evicted front slot"
        );
    } else {
        store.insert_first_empty(slot);
    }
}

/// The policy chosen for a run.
///
/// A closed set: the simulator holds one of these and calls `access`
/// without knowing which strategy is behind it.
#[derive(Debug, Clone)]
pub enum Policy {
    Fifo(Fifo),
    Lru(Lru),
    Clock(Clock),
}

impl Policy {
    /// Create a fresh policy of the given kind.
    pub fn new(kind: PolicyKind) -> Self {
        match kind {
            PolicyKind::Fifo => Policy::Fifo(Fifo::new()),
            PolicyKind::Lru => Policy::Lru(Lru::new()),
            PolicyKind::Clock => Policy::Clock(Clock::new()),
        }
    }
}

impl EvictionPolicy for Policy {
    fn kind(&self) -> PolicyKind {
        match self {
            Policy::Fifo(p) => p.kind(),
            Policy::Lru(p) => p.kind(),
            Policy::Clock(p) => p.kind(),
        }
    }

    fn access(
        &mut self,
        store: &mut SlotStore,
        tracker: &mut MembershipTracker,
        key: &Key,
    ) -> Verdict {
        match self {
            Policy::Fifo(p) => p.access(store, tracker, key),
            Policy::Lru(p) => p.access(store, tracker, key),
            Policy::Clock(p) => p.access(store, tracker, key),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_first_sight_is_compulsory() {
        let mut tracker = MembershipTracker::new();
        let key = Key::from("A");

        assert_eq!(classify_miss(&mut tracker, &key), MissKind::Compulsory);
        assert!(tracker.has_seen(&key));
        assert_eq!(classify_miss(&mut tracker, &key), MissKind::Capacity);
    }

    #[test]
    fn test_verdict_display() {
        assert_eq!(Verdict::Hit.to_string(), "HIT");
        assert_eq!(Verdict::Miss(MissKind::Capacity).to_string(), "MISS");
        assert_eq!(
            Verdict::Miss(MissKind::Compulsory).miss_kind(),
            Some(MissKind::Compulsory)
        );
        assert_eq!(Verdict::Hit.miss_kind(), None);
    }

    #[test]
    fn test_policy_new_matches_kind() {
        for kind in PolicyKind::ALL {
            assert_eq!(Policy::new(kind).kind(), kind);
        }
    }

    #[test]
    fn test_admit_queued_evicts_front_when_full() {
        let mut store = SlotStore::new(2);
        for key in ["A", "B", "C"] {
            admit_queued(&mut store, &Key::from(key), PolicyKind::Fifo);
        }
        let keys: Vec<_> = store.iter().map(|s| s.key().to_string_lossy()).collect();
        assert_eq!(keys, ["B", "C"]);
    }
}
