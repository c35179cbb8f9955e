//! Simulation configuration.

use std::fmt;
use std::str::FromStr;

use crate::common::{Error, Result};

/// Number of slots used when no capacity is given.
pub const DEFAULT_CAPACITY: usize = 100;

/// Policy used when none is given.
pub const DEFAULT_POLICY: PolicyKind = PolicyKind::Fifo;

/// The replacement policies the simulator knows about.
///
/// Parsing accepts the single-letter tags the command line uses as well
/// as the full names, in any case:
/// ```
/// use cachesim::PolicyKind;
///
/// assert_eq!("L".parse::<PolicyKind>().unwrap(), PolicyKind::Lru);
/// assert_eq!("clock".parse::<PolicyKind>().unwrap(), PolicyKind::Clock);
/// assert!("mru".parse::<PolicyKind>().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum PolicyKind {
    /// First-in, first-out.
    #[default]
    Fifo,
    /// Least recently used.
    Lru,
    /// CLOCK (second chance).
    Clock,
}

impl PolicyKind {
    /// All policies, in a stable order.
    pub const ALL: [PolicyKind; 3] = [PolicyKind::Fifo, PolicyKind::Lru, PolicyKind::Clock];

    /// Canonical upper-case name.
    pub fn name(&self) -> &'static str {
        match self {
            PolicyKind::Fifo => "FIFO",
            PolicyKind::Lru => "LRU",
            PolicyKind::Clock => "CLOCK",
        }
    }
}

impl FromStr for PolicyKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_uppercase().as_str() {
            "F" | "FIFO" => Ok(PolicyKind::Fifo),
            "L" | "LRU" => Ok(PolicyKind::Lru),
            "C" | "CLOCK" => Ok(PolicyKind::Clock),
            _ => Err(Error::UnknownPolicy(s.to_owned())),
        }
    }
}

impl fmt::Display for PolicyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Validated settings for one simulation run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SimulatorConfig {
    pub policy: PolicyKind,
    pub capacity: usize,
}

impl SimulatorConfig {
    /// Build a config from user-supplied values.
    ///
    /// The capacity is taken as a signed value so that zero and negative
    /// sizes are reported as configuration errors rather than wrapping.
    ///
    /// # Errors
    /// - `Error::InvalidCapacity` if `capacity <= 0`
    pub fn new(policy: PolicyKind, capacity: i64) -> Result<Self> {
        if capacity <= 0 {
            return Err(Error::InvalidCapacity(capacity));
        }
        let capacity = usize::try_from(capacity).map_err(|_| Error::InvalidCapacity(capacity))?;
        Ok(Self { policy, capacity })
    }
}

impl Default for SimulatorConfig {
    fn default() -> Self {
        Self {
            policy: DEFAULT_POLICY,
            capacity: DEFAULT_CAPACITY,
        }
    }
}
