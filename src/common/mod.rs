//! Common types shared across the simulator.
//!
//! - Configuration ([`config`])
//! - The trace [`Key`]
//!
//! The crate [`Error`] is re-exported here for convenience.

pub mod config;
mod key;

pub use config::{PolicyKind, SimulatorConfig, DEFAULT_CAPACITY};
pub use crate::error::{Error, Result};
pub use key::Key;
