//! Error types for the simulator.

use thiserror::Error;

/// Convenient Result type alias.
pub type Result<T> = std::result::Result<T, Error>;

/// All recoverable errors the simulator reports.
///
/// Misuse of the slot store by a policy (filling a full store, evicting
/// from a store that still has room) is not represented here: it is a bug
/// in policy logic and panics instead.
#[derive(Debug, Error)]
pub enum Error {
    /// Requested cache capacity is zero or negative.
    #[error("Invalid cache size {0}: must be a positive integer")]
    InvalidCapacity(i64),

    /// Policy identifier is not one of FIFO, LRU or CLOCK.
    #[error("Unknown cache policy '{0}': use F (FIFO), L (LRU) or C (CLOCK)")]
    UnknownPolicy(String),

    /// I/O error while reading a trace or writing a report.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// True for errors raised while validating configuration, before any
    /// key has been processed.
    pub fn is_config_error(&self) -> bool {
        matches!(self, Error::InvalidCapacity(_) | Error::UnknownPolicy(_))
    }
}
