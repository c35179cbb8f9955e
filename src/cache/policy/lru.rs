//! LRU (Least Recently Used) replacement policy.

use crate::cache::policy::{admit_queued, classify_miss, EvictionPolicy, Verdict};
use crate::cache::{MembershipTracker, SlotStore};
use crate::common::{Key, PolicyKind};

/// Evicts the key that was used least recently.
///
/// The store's position order is the recency order: a hit moves the key
/// behind every other resident key, so the front is always the least
/// recently used one and queue-style eviction removes it.
#[derive(Debug, Clone, Default)]
pub struct Lru;

impl Lru {
    pub fn new() -> Self {
        Lru
    }
}

impl EvictionPolicy for Lru {
    fn kind(&self) -> PolicyKind {
        PolicyKind::Lru
    }

    fn access(
        &mut self,
        store: &mut SlotStore,
        tracker: &mut MembershipTracker,
        key: &Key,
    ) -> Verdict {
        if store.move_to_end(key) {
            return Verdict::Hit;
        }

        let kind = classify_miss(tracker, key);
        admit_queued(store, key, PolicyKind::Lru);
        Verdict::Miss(kind)
    }
}
