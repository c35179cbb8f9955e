//! Cache simulation core.
//!
//! The cache is a fixed number of slots filled from a trace of keys. A
//! replacement policy decides hits, misses and victims.
//!
//! # Components
//! - [`CacheSimulator`] - Drives one trace through one policy
//! - [`SlotStore`] - The fixed-capacity cache contents
//! - [`Slot`] - One resident key plus its reference flag
//! - [`MembershipTracker`] - Every key ever seen, for miss classification
//! - [`SimulatorStats`] - Hit/miss counters
//! - [`policy`] - Eviction policy implementations

mod membership;
pub mod policy;
mod simulator;
mod slot;
mod slot_store;
mod stats;

pub use membership::MembershipTracker;
pub use simulator::CacheSimulator;
pub use slot::Slot;
pub use slot_store::SlotStore;
pub use stats::{SimulatorStats, StatsSnapshot};
