//! # Tempora Sim
//!
//! Monte Carlo simulation engine for temporally uncertain historical
//! datasets.
//!
//! Many historical records are dated only to an uncertain range of years.
//! This crate estimates the aggregate temporal distribution of a
//! collection of such records: for each of `size` independent simulation
//! runs it draws one plausible year per record, bins the draws on a fixed
//! [`TimeGrid`], and reduces the per-run counts into one
//! mean-with-uncertainty-band summary per bucket - ready to plot as a
//! line with a shaded region.
//!
//! ## Design Philosophy
//!
//! - **Pure functions**: stateless, no I/O, all inputs explicit
//! - **Explicit randomness**: a seed in, one ChaCha stream per record -
//!   identical results regardless of scheduling
//! - **Fail fast**: configuration and resource checks run before any
//!   sampling or allocation
//! - **Config-driven parallelism**: optional rayon support with
//!   threshold-based switching
//!
//! ## Quick Start
//!
//! ```rust
//! use tempora_core::{IntervalRecord, TimeGrid};
//! use tempora_sim::simulate;
//!
//! // Two inscriptions: one dated 50 BCE - 50 CE, one "no later than 0"
//! let records = vec![
//!     IntervalRecord::bounded(-50.0, 50.0)?,
//!     IntervalRecord::new(None, Some(0.0))?,
//! ];
//! let grid = TimeGrid::new(-100.0, 100.0, 50.0)?;
//!
//! let summaries = simulate(&records, &grid, 1000, Some(42))?;
//! assert_eq!(summaries.len(), 4);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! ## Module Overview
//!
//! - [`sampler`] - per-record year sampling with injectable randomness
//! - [`aggregate`] - the [runs × buckets] count matrix
//! - [`summary`] - reduction into per-bucket mean and band
//! - [`simulate`](fn@simulate) / [`simulate_with_config`] - the entry points
//!
//! ## Feature Flags
//!
//! - `parallel`: enable rayon-based parallel sampling and aggregation

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::cast_possible_truncation)]

pub mod aggregate;
pub mod config;
mod error;
pub mod parallel;
pub mod sampler;
pub mod simulate;
pub mod summary;

pub use aggregate::{aggregate_runs, RunCountMatrix};
pub use config::{SimConfig, DEFAULT_MAX_CELLS};
pub use error::{SimResult, SimulationError};
pub use parallel::maybe_parallel_map_indices;
pub use sampler::{record_rng, sample_record, sample_records, RecordSamples, SamplingStrategy};
pub use simulate::{simulate, simulate_with_config, SimulationOutput};
pub use summary::{summarize, BandMethod, BucketSummary};

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::{
        simulate, simulate_with_config, BandMethod, BucketSummary, RecordSamples, SimConfig,
        SimResult, SimulationError, SimulationOutput, SamplingStrategy,
    };
    pub use tempora_core::{GridError, IntervalError, IntervalRecord, TimeGrid};
}
