//! Error types.

use thiserror::Error;

/// Result type for engine operations.
pub type Result<T> = core::result::Result<T, Error>;

/// Errors reported by configuration and by the request handshake.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// A configuration parameter is out of its supported range.
    #[error("invalid configuration: {parameter} = {value} ({reason})")]
    InvalidConfig {
        parameter: &'static str,
        value: i64,
        reason: &'static str,
    },

    /// A request was offered while the controller was not idle.
    #[error("engine busy, request rejected")]
    Busy,

    /// The engine did not complete within the expected number of ticks.
    #[error("no result after {ticks} ticks")]
    Timeout { ticks: usize },
}

impl Error {
    pub(crate) fn config(parameter: &'static str, value: i64, reason: &'static str) -> Self {
        Self::InvalidConfig {
            parameter,
            value,
            reason,
        }
    }
}
