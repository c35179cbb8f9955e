//! Cache Simulator - one pass of a trace through one policy.
//!
//! The [`CacheSimulator`] provides:
//! - Per-key hit/miss decisions through the configured policy
//! - Compulsory vs. capacity miss classification
//! - Running statistics, readable at any point

use std::io::BufRead;

use tracing::{debug, trace};

use crate::cache::policy::{EvictionPolicy, Policy, Verdict};
use crate::cache::{MembershipTracker, SimulatorStats, SlotStore, StatsSnapshot};
use crate::common::{Error, Key, PolicyKind, Result, SimulatorConfig};
use crate::trace::TraceReader;

/// Simulates a fixed-capacity cache over a stream of keys.
///
/// # Architecture
/// ```text
/// ┌─────────────────────────────────────────────────────────────┐
/// │                     CacheSimulator                          │
/// │  ┌──────────────┐  ┌───────────────────────────────────┐   │
/// │  │   policy     │  │        store: SlotStore           │   │
/// │  │ FIFO|LRU|CLK │─▶│  [Slot0] [Slot1] [Slot2] ...      │   │
/// │  └──────────────┘  └───────────────────────────────────┘   │
/// │         │          ┌──────────────┐  ┌──────────────┐      │
/// │         └─────────▶│   tracker    │  │    stats     │      │
/// │                    │ keys ever    │  │  counters    │      │
/// │                    │   seen       │  │              │      │
/// │                    └──────────────┘  └──────────────┘      │
/// └─────────────────────────────────────────────────────────────┘
/// ```
///
/// Each simulator owns its store and tracker, so independent runs never
/// share state.
///
/// # Usage
/// ```
/// use cachesim::{CacheSimulator, Key, PolicyKind};
///
/// let mut sim = CacheSimulator::new(PolicyKind::Fifo, 2).unwrap();
/// for key in ["A", "B", "C", "A"] {
///     sim.process(&Key::from(key));
/// }
///
/// let stats = sim.snapshot();
/// assert_eq!((stats.compulsory_misses, stats.capacity_misses), (3, 1));
/// ```
#[derive(Debug, Clone)]
pub struct CacheSimulator {
    /// Cache contents.
    store: SlotStore,

    /// Every key ever processed.
    tracker: MembershipTracker,

    /// Replacement strategy.
    policy: Policy,

    /// Running counters.
    stats: SimulatorStats,
}

impl CacheSimulator {
    /// Create a simulator with an empty cache of `capacity` slots.
    ///
    /// # Errors
    /// - `Error::InvalidCapacity` if `capacity` is 0
    pub fn new(policy: PolicyKind, capacity: usize) -> Result<Self> {
        if capacity == 0 {
            return Err(Error::InvalidCapacity(0));
        }

        debug!(policy = %policy, capacity, "creating cache simulator");

        Ok(Self {
            store: SlotStore::new(capacity),
            tracker: MembershipTracker::new(),
            policy: Policy::new(policy),
            stats: SimulatorStats::new(),
        })
    }

    /// Create a simulator from a validated config.
    ///
    /// # Errors
    /// - `Error::InvalidCapacity` if the config's capacity is 0
    pub fn from_config(config: &SimulatorConfig) -> Result<Self> {
        Self::new(config.policy, config.capacity)
    }

    // ========================================================================
    // Public API: Processing
    // ========================================================================

    /// Process one reference and return whether it hit or missed.
    pub fn process(&mut self, key: &Key) -> Verdict {
        let was_full = self.store.is_full();
        let verdict = self.policy.access(&mut self.store, &mut self.tracker, key);

        self.stats.record(verdict, was_full);
        trace!(key = %key, verdict = %verdict, "access");

        verdict
    }

    /// Process every key from `keys`, calling `on_access` after each one.
    ///
    /// Returns the statistics at the end of the sequence.
    pub fn run<I, F>(&mut self, keys: I, mut on_access: F) -> StatsSnapshot
    where
        I: IntoIterator<Item = Key>,
        F: FnMut(&Key, Verdict),
    {
        for key in keys {
            let verdict = self.process(&key);
            on_access(&key, verdict);
        }
        self.snapshot()
    }

    /// Process a whole trace, calling `on_access` after each key.
    ///
    /// `on_access` may fail (for example when streaming verdicts to a
    /// closed pipe); the first error stops the run.
    ///
    /// # Errors
    /// - `Error::Io` if reading the trace or `on_access` fails
    pub fn run_trace<R, F>(
        &mut self,
        trace: TraceReader<R>,
        mut on_access: F,
    ) -> Result<StatsSnapshot>
    where
        R: BufRead,
        F: FnMut(&Key, Verdict) -> Result<()>,
    {
        for key in trace {
            let key = key?;
            let verdict = self.process(&key);
            on_access(&key, verdict)?;
        }
        Ok(self.snapshot())
    }

    // ========================================================================
    // Public API: Stats and info
    // ========================================================================

    /// Current statistics. All zero before the first access.
    pub fn snapshot(&self) -> StatsSnapshot {
        self.stats.snapshot()
    }

    /// The active policy.
    pub fn policy(&self) -> PolicyKind {
        self.policy.kind()
    }

    /// Number of slots in the cache.
    pub fn capacity(&self) -> usize {
        self.store.capacity()
    }

    /// True if `key` is currently resident.
    pub fn contains(&self, key: &Key) -> bool {
        self.store.contains(key)
    }

    /// True if `key` has been processed at least once.
    pub fn has_seen(&self, key: &Key) -> bool {
        self.tracker.has_seen(key)
    }

    /// Resident keys in position order.
    pub fn resident(&self) -> impl Iterator<Item = &Key> + '_ {
        self.store.iter().map(|slot| slot.key())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cache::policy::MissKind;

    fn keys(trace: &[&str]) -> Vec<Key> {
        trace.iter().map(|k| Key::from(*k)).collect()
    }

    #[test]
    fn test_new_rejects_zero_capacity() {
        let result = CacheSimulator::new(PolicyKind::Lru, 0);
        assert!(matches!(result, Err(Error::InvalidCapacity(0))));
    }

    #[test]
    fn test_snapshot_before_any_access() {
        let sim = CacheSimulator::new(PolicyKind::Clock, 4).unwrap();
        assert_eq!(sim.snapshot(), StatsSnapshot::default());
        assert_eq!(sim.policy(), PolicyKind::Clock);
        assert_eq!(sim.capacity(), 4);
    }

    #[test]
    fn test_from_config() {
        let sim = CacheSimulator::from_config(&SimulatorConfig::default()).unwrap();
        assert_eq!(sim.capacity(), 100);
        assert_eq!(sim.policy(), PolicyKind::Fifo);
    }

    #[test]
    fn test_process_classifies_misses() {
        let mut sim = CacheSimulator::new(PolicyKind::Fifo, 1).unwrap();

        let compulsory = Verdict::Miss(MissKind::Compulsory);
        assert_eq!(sim.process(&Key::from("A")), compulsory);
        assert_eq!(sim.process(&Key::from("A")), Verdict::Hit);
        assert_eq!(sim.process(&Key::from("B")), compulsory);
        assert_eq!(sim.process(&Key::from("A")), Verdict::Miss(MissKind::Capacity));

        let stats = sim.snapshot();
        assert_eq!(stats.hit_count, 1);
        assert_eq!(stats.miss_count, 3);
        assert_eq!(stats.evictions, 2);
    }

    #[test]
    fn test_run_reports_every_access() {
        let mut sim = CacheSimulator::new(PolicyKind::Lru, 2).unwrap();
        let mut seen = Vec::new();

        let stats = sim.run(keys(&["A", "B", "A", "C"]), |key, verdict| {
            seen.push((key.to_string(), verdict.is_hit()));
        });

        assert_eq!(seen.len(), 4);
        assert_eq!(seen[2], ("A".to_owned(), true));
        assert_eq!(stats.accesses(), 4);
    }

    #[test]
    fn test_resident_and_seen() {
        let mut sim = CacheSimulator::new(PolicyKind::Fifo, 2).unwrap();
        sim.run(keys(&["A", "B", "C"]), |_, _| {});

        let resident: Vec<_> = sim.resident().map(Key::to_string_lossy).collect();
        assert_eq!(resident, ["B", "C"]);
        assert!(!sim.contains(&Key::from("A")));
        assert!(sim.has_seen(&Key::from("A")));
    }

    #[test]
    fn test_run_trace_propagates_sink_errors() {
        let mut sim = CacheSimulator::new(PolicyKind::Fifo, 2).unwrap();
        let trace = TraceReader::new("A\nB\nC\n".as_bytes());

        let mut calls = 0;
        let result = sim.run_trace(trace, |_, _| {
            calls += 1;
            Err(Error::Io(std::io::Error::other("sink closed")))
        });

        assert!(matches!(result, Err(Error::Io(_))));
        assert_eq!(calls, 1);
    }

    #[test]
    fn test_independent_runs_do_not_share_state() {
        let mut first = CacheSimulator::new(PolicyKind::Fifo, 2).unwrap();
        let mut second = CacheSimulator::new(PolicyKind::Fifo, 2).unwrap();

        first.process(&Key::from("A"));
        assert_eq!(
            second.process(&Key::from("A")),
            Verdict::Miss(MissKind::Compulsory)
        );
    }
}
