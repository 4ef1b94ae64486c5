//! The simulation entry points.
//!
//! `simulate` is the one operation the engine exposes to its caller:
//! validate, sample, bin, reduce. Stateless and in-process; everything is
//! deterministic given the seed.

use crate::aggregate::aggregate_runs;
use crate::config::SimConfig;
use crate::error::{SimResult, SimulationError};
use crate::sampler::{sample_records, RecordSamples};
use crate::summary::{summarize, BucketSummary};
use log::debug;
use rand::Rng;
use serde::{Deserialize, Serialize};
use tempora_core::{IntervalRecord, TimeGrid};

/// Everything one simulation request produced.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationOutput {
    /// Per-bucket mean and band, in bucket order.
    pub summaries: Vec<BucketSummary>,
    /// The raw per-record sampled years, for export/audit.
    pub samples: Vec<RecordSamples>,
    /// The seed actually used (resolved when the caller passed `None`),
    /// so any run can be reproduced.
    pub seed: u64,
}

/// Fail-fast request validation; nothing is allocated past this point
/// unless the request is acceptable.
fn validate_request(
    records: &[IntervalRecord],
    grid: &TimeGrid,
    size: usize,
    config: &SimConfig,
) -> SimResult<()> {
    if size == 0 {
        return Err(SimulationError::InvalidConfiguration(
            "size must be at least 1 simulation run".to_string(),
        ));
    }
    config.band.validate()?;

    let cells = records.len() as u128 * size as u128 * grid.num_buckets() as u128;
    if cells > config.max_cells {
        return Err(SimulationError::ResourceLimitExceeded {
            cells,
            limit: config.max_cells,
        });
    }
    Ok(())
}

/// Runs a full simulation request with explicit configuration.
///
/// # Errors
///
/// - [`SimulationError::InvalidConfiguration`] for `size == 0` or bad band
///   percentiles
/// - [`SimulationError::ResourceLimitExceeded`] when
///   `records * size * buckets` exceeds `config.max_cells`
pub fn simulate_with_config(
    records: &[IntervalRecord],
    grid: &TimeGrid,
    size: usize,
    seed: Option<u64>,
    config: &SimConfig,
) -> SimResult<SimulationOutput> {
    validate_request(records, grid, size, config)?;

    let seed = seed.unwrap_or_else(|| rand::thread_rng().gen());
    debug!(
        "simulate: {} records, {} runs, {} buckets, seed {}",
        records.len(),
        size,
        grid.num_buckets(),
        seed
    );

    let samples = sample_records(records, size, seed, config);
    let matrix = aggregate_runs(&samples, grid, size, config);
    let summaries = summarize(&matrix, grid, config.band);
    debug!("simulate: reduced {} runs into {} bucket summaries", size, summaries.len());

    Ok(SimulationOutput {
        summaries,
        samples,
        seed,
    })
}

/// Runs a simulation request with the default configuration and returns
/// just the bucket summaries.
///
/// See [`simulate_with_config`] for errors and for access to the raw
/// per-record samples.
pub fn simulate(
    records: &[IntervalRecord],
    grid: &TimeGrid,
    size: usize,
    seed: Option<u64>,
) -> SimResult<Vec<BucketSummary>> {
    simulate_with_config(records, grid, size, seed, &SimConfig::default())
        .map(|output| output.summaries)
}
