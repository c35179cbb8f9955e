//! Result output.
//!
//! A [`Reporter`] writes what the simulator decided:
//! - Optionally one `HIT` / `MISS` line per access
//! - Finally `"<compulsory> <capacity>\n"`

use std::io::Write;

use crate::cache::policy::Verdict;
use crate::cache::StatsSnapshot;
use crate::common::Result;

/// Line-oriented sink for simulation results.
///
/// # Example
/// ```
/// use cachesim::{CacheSimulator, Key, PolicyKind, Reporter};
///
/// let mut sim = CacheSimulator::new(PolicyKind::Lru, 2).unwrap();
/// let mut reporter = Reporter::new(Vec::new(), false);
///
/// for key in ["A", "B", "A", "C"] {
///     reporter.access(sim.process(&Key::from(key))).unwrap();
/// }
/// reporter.summary(&sim.snapshot()).unwrap();
///
/// assert_eq!(reporter.into_inner(), b"3 0\n");
/// ```
pub struct Reporter<W: Write> {
    out: W,
    per_access: bool,
}

impl<W: Write> Reporter<W> {
    /// Create a reporter. With `per_access` set, every verdict passed to
    /// [`access`](Self::access) is written as its own line.
    pub fn new(out: W, per_access: bool) -> Self {
        Self { out, per_access }
    }

    /// Record one access.
    pub fn access(&mut self, verdict: Verdict) -> Result<()> {
        if self.per_access {
            writeln!(self.out, "{}", verdict)?;
        }
        Ok(())
    }

    /// Write the final miss breakdown.
    pub fn summary(&mut self, snapshot: &StatsSnapshot) -> Result<()> {
        writeln!(
            self.out,
            "{} {}",
            snapshot.compulsory_misses, snapshot.capacity_misses
        )?;
        Ok(())
    }

    /// Flush buffered output.
    pub fn finish(&mut self) -> Result<()> {
        self.out.flush()?;
        Ok(())
    }

    /// Recover the underlying writer.
    pub fn into_inner(self) -> W {
        self.out
    }
}
