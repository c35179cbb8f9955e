//! CLOCK (Second Chance) replacement policy.

use crate::cache::policy::{classify_miss, EvictionPolicy, Verdict};
use crate::cache::{MembershipTracker, Slot, SlotStore};
use crate::common::{Key, PolicyKind};

/// Approximates LRU with one reference flag per slot and a rotating hand.
///
/// A hit sets the slot's flag without moving it. When the store is full,
/// the hand sweeps forward from where it last stopped, clearing set flags
/// as it passes, and replaces the first slot whose flag is already clear.
/// Positions never shift; only the victim's position changes.
///
/// The hand stays on the position it just filled, so the next sweep starts
/// there.
#[derive(Debug, Clone, Default)]
pub struct Clock {
    hand: usize,
}

impl Clock {
    pub fn new() -> Self {
        Self { hand: 0 }
    }

    /// Current position of the clock hand.
    pub fn hand(&self) -> usize {
        self.hand
    }

    /// Advance the hand to the next victim, clearing reference flags on
    /// the way.
    ///
    /// Ends within one full lap: every step clears the flag it passes, so
    /// the slot the sweep started on is clear when the hand gets back to it.
    fn sweep(&mut self, store: &mut SlotStore) -> usize {
        let capacity = store.capacity();
        loop {
            let slot = store.slot_at_mut(self.hand);
            if !slot.is_referenced() {
                return self.hand;
            }
            slot.clear_referenced();
            self.hand = (self.hand + 1) % capacity;
        }
    }
}

impl EvictionPolicy for Clock {
    fn kind(&self) -> PolicyKind {
        PolicyKind::Clock
    }

    fn access(
        &mut self,
        store: &mut SlotStore,
        tracker: &mut MembershipTracker,
        key: &Key,
    ) -> Verdict {
        if let Some(slot) = store.find_mut(key) {
            slot.mark_referenced();
            return Verdict::Hit;
        }

        let kind = classify_miss(tracker, key);
        let slot = Slot::new(key.clone());

        if store.is_full() {
            let victim = self.sweep(store);
            let evicted = store.overwrite_at(victim, slot);
            tracing::debug!(
                policy = %PolicyKind::Clock,
                victim = %evicted.key(),
                key = %key,
                hand = victim,
                "replaced slot under clock hand"
            );
        } else {
            store.insert_first_empty(slot);
        }

        Verdict::Miss(kind)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cache::policy::MissKind;

    struct Harness {
        clock: Clock,
        store: SlotStore,
        tracker: MembershipTracker,
    }

    impl Harness {
        fn new(capacity: usize) -> Self {
            Self {
                clock: Clock::new(),
                store: SlotStore::new(capacity),
                tracker: MembershipTracker::new(),
            }
        }

        fn access(&mut self, key: &str) -> Verdict {
            self.clock
                .access(&mut self.store, &mut self.tracker, &Key::from(key))
        }

        fn resident(&self) -> Vec<String> {
            self.store.iter().map(|s| s.key().to_string()).collect()
        }
    }

    #[test]
    fn test_clock_hit_sets_flag_without_moving() {
        let mut h = Harness::new(3);
        h.access("A");
        h.access("B");

        assert_eq!(h.access("A"), Verdict::Hit);
        assert!(h.store.slot_at(0).is_referenced());
        assert!(!h.store.slot_at(1).is_referenced());
        assert_eq!(h.resident(), ["A", "B"]);
    }

    #[test]
    fn test_clock_hand_untouched_while_filling() {
        let mut h = Harness::new(3);
        h.access("A");
        h.access("B");
        h.access("C");
        assert_eq!(h.clock.hand(), 0);
    }

    #[test]
    fn test_clock_second_chance() {
        let mut h = Harness::new(2);
        h.access("A");
        h.access("B");
        h.access("A");

        // Sweep passes over A (clearing its flag) and replaces B in place
        assert_eq!(h.access("C"), Verdict::Miss(MissKind::Compulsory));
        assert_eq!(h.resident(), ["A", "C"]);
        assert!(!h.store.slot_at(0).is_referenced());
        assert_eq!(h.clock.hand(), 1);
    }

    #[test]
    fn test_clock_hand_stays_on_replaced_position() {
        let mut h = Harness::new(2);
        for key in ["A", "B", "A", "C"] {
            h.access(key);
        }

        // Hand rests on C's position, whose flag is clear
        h.access("D");
        assert_eq!(h.resident(), ["A", "D"]);
        assert_eq!(h.clock.hand(), 1);
        assert_eq!(h.access("A"), Verdict::Hit);
    }

    #[test]
    fn test_clock_full_lap_when_all_referenced() {
        let mut h = Harness::new(3);
        for key in ["A", "B", "C", "A", "B", "C"] {
            h.access(key);
        }

        // Every flag is set: the sweep clears all three and wraps to 0
        h.access("D");
        assert_eq!(h.resident(), ["D", "B", "C"]);
        assert_eq!(h.clock.hand(), 0);
        assert!(!h.store.slot_at(1).is_referenced());
        assert!(!h.store.slot_at(2).is_referenced());
    }

    #[test]
    fn test_clock_capacity_one() {
        let mut h = Harness::new(1);
        h.access("A");
        h.access("A");
        assert_eq!(h.access("B"), Verdict::Miss(MissKind::Compulsory));
        assert_eq!(h.access("A"), Verdict::Miss(MissKind::Capacity));
        assert_eq!(h.resident(), ["A"]);
    }
}
