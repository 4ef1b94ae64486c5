//! Error types for the simulation engine.

use tempora_core::{GridError, IntervalError};
use thiserror::Error;

/// A specialized Result type for simulation operations.
pub type SimResult<T> = Result<T, SimulationError>;

/// Errors that can fail a simulation request.
///
/// All checks run before any sampling begins (fail fast, no partial
/// computation); nothing is retried internally since the computation is
/// deterministic given its inputs.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SimulationError {
    /// A record's date bounds are malformed.
    #[error(transparent)]
    InvalidInterval(#[from] IntervalError),

    /// The time grid parameters are malformed.
    #[error(transparent)]
    InvalidGrid(#[from] GridError),

    /// The request parameters are malformed (`size == 0`, bad band
    /// percentiles).
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),

    /// `num_records * size * num_buckets` exceeds the configured ceiling;
    /// rejected before any allocation.
    #[error("resource limit exceeded: request needs {cells} cells, limit is {limit}")]
    ResourceLimitExceeded {
        /// Cells the request would require.
        cells: u128,
        /// The configured ceiling.
        limit: u128,
    },
}
