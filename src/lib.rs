//! cachesim - a trace-driven cache replacement simulator.
//!
//! Feeds a sequence of keys through a fixed-capacity cache and counts hits
//! and misses under FIFO, LRU or CLOCK replacement. Misses are split into
//! compulsory (first reference to a key) and capacity (a key seen before
//! that is no longer resident).
//!
//! # Architecture
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                           cachesim                              │
//! ├─────────────────────────────────────────────────────────────────┤
//! │  ┌────────────────────┐                ┌────────────────────┐   │
//! │  │  trace/            │   Key, Key...  │  report/           │   │
//! │  │  TraceReader       │───────┐   ┌───▶│  Reporter          │   │
//! │  └────────────────────┘       ↓   │    └────────────────────┘   │
//! │  ┌─────────────────────────────────────────────────────────┐   │
//! │  │              Cache Simulation (cache/)                   │   │
//! │  │   ┌─────────────────────────────────────────────────┐   │   │
//! │  │   │        Eviction Policies: FIFO | LRU | CLOCK     │   │   │
//! │  │   └─────────────────────────────────────────────────┘   │   │
//! │  │  CacheSimulator + SlotStore + MembershipTracker + Stats  │   │
//! │  └─────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────┘
//! ```
//!
//! # Modules
//! - [`common`] - Shared primitives (Key, config)
//! - [`error`] - Crate error type
//! - [`cache`] - The simulator and eviction policies
//! - [`trace`] - Line-oriented trace input
//! - [`report`] - Result output
//!
//! # Quick Start
//! ```
//! use cachesim::{CacheSimulator, Key, PolicyKind, Verdict};
//!
//! let mut sim = CacheSimulator::new(PolicyKind::Lru, 2).unwrap();
//! let verdicts: Vec<Verdict> = ["A", "B", "A", "C"]
//!     .iter()
//!     .map(|k| sim.process(&Key::from(*k)))
//!     .collect();
//!
//! assert!(verdicts[2].is_hit());
//! assert_eq!(sim.snapshot().compulsory_misses, 3);
//! ```

pub mod cache;
pub mod common;
pub mod error;
pub mod report;
pub mod trace;

// Re-export commonly used items at crate root for convenience
pub use common::config::{DEFAULT_CAPACITY, DEFAULT_POLICY};
pub use common::{Key, PolicyKind, SimulatorConfig};
pub use error::{Error, Result};

pub use cache::policy::{EvictionPolicy, MissKind, Policy, Verdict};
pub use cache::{CacheSimulator, MembershipTracker, Slot, SlotStore, StatsSnapshot};
pub use report::Reporter;
pub use trace::TraceReader;
