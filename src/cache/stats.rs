//! Simulation statistics tracking.

use std::fmt;

use crate::cache::policy::{MissKind, Verdict};

/// Counters maintained by a [`CacheSimulator`].
///
/// Every processed key updates exactly one of `hit_count`/`miss_count`,
/// and every miss updates exactly one of `compulsory_misses`/
/// `capacity_misses`. The counters never decrease.
///
/// Plain integers are enough: a simulator is driven by a single caller.
///
/// [`CacheSimulator`]: crate::cache::CacheSimulator
#[derive(Debug, Default, Clone)]
pub struct SimulatorStats {
    hit_count: u64,
    miss_count: u64,
    compulsory_misses: u64,
    capacity_misses: u64,

    /// Misses that replaced a resident slot.
    evictions: u64,
}

impl SimulatorStats {
    /// Create a stats tracker with all counters at zero.
    pub fn new() -> Self {
        Self::default()
    }

    /// Account for one access.
    pub fn record(&mut self, verdict: Verdict, evicted: bool) {
        match verdict {
            Verdict::Hit => self.hit_count += 1,
            Verdict::Miss(kind) => {
                self.miss_count += 1;
                match kind {
                    MissKind::Compulsory => self.compulsory_misses += 1,
                    MissKind::Capacity => self.capacity_misses += 1,
                }
                if evicted {
                    self.evictions += 1;
                }
            }
        }
    }

    /// Get a snapshot of current statistics.
    pub fn snapshot(&self) -> StatsSnapshot {
        StatsSnapshot {
            hit_count: self.hit_count,
            miss_count: self.miss_count,
            compulsory_misses: self.compulsory_misses,
            capacity_misses: self.capacity_misses,
            evictions: self.evictions,
        }
    }
}

/// A point-in-time copy of simulator statistics.
///
/// # Example
/// ```
/// use cachesim::{CacheSimulator, Key, PolicyKind};
///
/// let mut sim = CacheSimulator::new(PolicyKind::Fifo, 2).unwrap();
/// sim.process(&Key::from("A"));
/// sim.process(&Key::from("A"));
///
/// let snapshot = sim.snapshot();
/// assert_eq!(snapshot.hit_count, 1);
/// assert_eq!(snapshot.compulsory_misses, 1);
/// println!("{}", snapshot);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct StatsSnapshot {
    pub hit_count: u64,
    pub miss_count: u64,
    pub compulsory_misses: u64,
    pub capacity_misses: u64,
    pub evictions: u64,
}

impl StatsSnapshot {
    /// Total keys processed.
    pub fn accesses(&self) -> u64 {
        self.hit_count + self.miss_count
    }

    /// Calculate hit rate (0.0 to 1.0).
    pub fn hit_rate(&self) -> f64 {
        let total = self.accesses();
        if total == 0 {
            0.0
        } else {
            self.hit_count as f64 / total as f64
        }
    }
}

impl fmt::Display for StatsSnapshot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Stats {{ hits: {}, misses: {}, compulsory: {}, capacity: {}, evictions: {}, hit_rate: {:.2}% }}",
            self.hit_count,
            self.miss_count,
            self.compulsory_misses,
            self.capacity_misses,
            self.evictions,
            self.hit_rate() * 100.0
        )
    }
}
