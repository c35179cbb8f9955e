//! Membership tracking for miss classification.

use std::collections::HashSet;

use crate::common::Key;

/// Every distinct key ever presented to a simulator.
///
/// The tracker only grows. It is independent of what is currently
/// resident and is consulted on each miss to decide whether the miss is
/// compulsory (never seen) or capacity (seen before).
#[derive(Debug, Default, Clone)]
pub struct MembershipTracker {
    seen: HashSet<Key>,
}

impl MembershipTracker {
    /// Create an empty tracker.
    pub fn new() -> Self {
        Self::default()
    }

    /// True iff `key` has been recorded.
    #[inline]
    pub fn has_seen(&self, key: &Key) -> bool {
        self.seen.contains(key)
    }

    /// Mark `key` as seen. Returns true if it had not been seen before.
    pub fn record(&mut self, key: &Key) -> bool {
        if self.seen.contains(key) {
            return false;
        }
        self.seen.insert(key.clone())
    }

    /// Number of distinct keys seen.
    pub fn len(&self) -> usize {
        self.seen.len()
    }

    /// True if nothing has been recorded yet.
    pub fn is_empty(&self) -> bool {
        self.seen.is_empty()
    }
}
