//! FIFO (First-In-First-Out) replacement policy.

use crate::cache::policy::{admit_queued, classify_miss, EvictionPolicy, Verdict};
use crate::cache::{MembershipTracker, SlotStore};
use crate::common::{Key, PolicyKind};

/// Evicts keys in the order they were admitted.
///
/// Hits do not reorder anything, so the front of the store is always the
/// oldest admission.
#[derive(Debug, Clone, Default)]
pub struct Fifo;

impl Fifo {
    pub fn new() -> Self {
        Fifo
    }
}

impl EvictionPolicy for Fifo {
    fn kind(&self) -> PolicyKind {
        PolicyKind::Fifo
    }

    fn access(
        &mut self,
        store: &mut SlotStore,
        tracker: &mut MembershipTracker,
        key: &Key,
    ) -> Verdict {
        if store.contains(key) {
            return Verdict::Hit;
        }

        let kind = classify_miss(tracker, key);
        admit_queued(store, key, PolicyKind::Fifo);
        Verdict::Miss(kind)
    }
}
