//! Property tests for counter invariants and classification rules.

use std::collections::HashSet;

use cachesim::{CacheSimulator, Key, MissKind, PolicyKind, Verdict};
use proptest::prelude::*;

fn policy_strategy() -> impl Strategy<Value = PolicyKind> {
    prop_oneof![
        Just(PolicyKind::Fifo),
        Just(PolicyKind::Lru),
        Just(PolicyKind::Clock),
    ]
}

/// Traces over a small alphabet so keys repeat often.
fn trace_strategy() -> impl Strategy<Value = Vec<Key>> {
    prop::collection::vec(0u8..12, 0..200)
        .prop_map(|ids| ids.into_iter().map(|i| Key::new(format!("k{}", i))).collect())
}

proptest! {
    #[test]
    fn counters_stay_consistent(
        policy in policy_strategy(),
        capacity in 1usize..8,
        trace in trace_strategy(),
    ) {
        let mut sim = CacheSimulator::new(policy, capacity).unwrap();

        for (processed, key) in trace.iter().enumerate() {
            sim.process(key);
            let stats = sim.snapshot();
            prop_assert_eq!(stats.hit_count + stats.miss_count, processed as u64 + 1);
            prop_assert_eq!(stats.compulsory_misses + stats.capacity_misses, stats.miss_count);
            prop_assert!(stats.evictions <= stats.miss_count);
        }
    }

    #[test]
    fn first_sight_is_compulsory_and_only_first_sight(
        policy in policy_strategy(),
        capacity in 1usize..8,
        trace in trace_strategy(),
    ) {
        let mut sim = CacheSimulator::new(policy, capacity).unwrap();
        let mut seen = HashSet::new();

        for key in &trace {
            let verdict = sim.process(key);
            if seen.insert(key.clone()) {
                prop_assert_eq!(verdict, Verdict::Miss(MissKind::Compulsory));
            } else {
                prop_assert_ne!(verdict, Verdict::Miss(MissKind::Compulsory));
            }
        }

        prop_assert_eq!(sim.snapshot().compulsory_misses, seen.len() as u64);
    }

    #[test]
    fn resident_keys_are_unique_and_bounded(
        policy in policy_strategy(),
        capacity in 1usize..8,
        trace in trace_strategy(),
    ) {
        let mut sim = CacheSimulator::new(policy, capacity).unwrap();

        for key in &trace {
            sim.process(key);
            prop_assert!(sim.contains(key));

            let resident: Vec<&Key> = sim.resident().collect();
            let unique: HashSet<&Key> = resident.iter().copied().collect();
            prop_assert_eq!(unique.len(), resident.len());
            prop_assert!(resident.len() <= capacity);
        }
    }

    #[test]
    fn repeated_access_to_resident_key_hits(
        policy in policy_strategy(),
        capacity in 1usize..8,
        trace in trace_strategy(),
    ) {
        let mut sim = CacheSimulator::new(policy, capacity).unwrap();

        for key in &trace {
            sim.process(key);
            prop_assert_eq!(sim.process(key), Verdict::Hit);
        }
    }

    #[test]
    fn lru_with_enough_room_only_misses_compulsorily(
        trace in trace_strategy(),
    ) {
        // 12 distinct keys fit without eviction
        let mut sim = CacheSimulator::new(PolicyKind::Lru, 12).unwrap();
        for key in &trace {
            sim.process(key);
        }
        let stats = sim.snapshot();
        prop_assert_eq!(stats.capacity_misses, 0);
        prop_assert_eq!(stats.evictions, 0);
    }
}
