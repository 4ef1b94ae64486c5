//! Configuration for simulation requests.

use crate::sampler::SamplingStrategy;
use crate::summary::BandMethod;
use serde::{Deserialize, Serialize};

/// Default ceiling on `num_records * size * num_buckets`.
pub const DEFAULT_MAX_CELLS: u128 = 100_000_000;

/// Configuration for a simulation request.
///
/// Controls parallelism, the sampling distribution, the uncertainty band
/// statistic, and the resource ceiling.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimConfig {
    /// Enable parallel processing (requires the 'parallel' feature).
    pub parallel: bool,

    /// Minimum record/run count to trigger parallel processing.
    /// Below this threshold, sequential is faster due to thread overhead.
    pub parallel_threshold: usize,

    /// Distribution used to draw a year within a record's interval.
    pub strategy: SamplingStrategy,

    /// Spread statistic reported around the per-bucket mean.
    pub band: BandMethod,

    /// Ceiling on `num_records * size * num_buckets`; requests above it
    /// are rejected before any allocation.
    pub max_cells: u128,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            parallel: true,
            parallel_threshold: 64, // Use parallel if >=64 records or runs
            strategy: SamplingStrategy::default(),
            band: BandMethod::default(),
            max_cells: DEFAULT_MAX_CELLS,
        }
    }
}

impl SimConfig {
    /// Creates a new config with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a config that always uses sequential processing.
    #[must_use]
    pub fn sequential() -> Self {
        Self {
            parallel: false,
            ..Self::default()
        }
    }

    /// Sets whether to use parallel processing.
    #[must_use]
    pub fn with_parallel(mut self, enabled: bool) -> Self {
        self.parallel = enabled;
        self
    }

    /// Sets the threshold for parallel processing.
    #[must_use]
    pub fn with_threshold(mut self, threshold: usize) -> Self {
        self.parallel_threshold = threshold;
        self
    }

    /// Sets the sampling distribution.
    #[must_use]
    pub fn with_strategy(mut self, strategy: SamplingStrategy) -> Self {
        self.strategy = strategy;
        self
    }

    /// Sets the uncertainty band statistic.
    #[must_use]
    pub fn with_band(mut self, band: BandMethod) -> Self {
        self.band = band;
        self
    }

    /// Sets the resource ceiling.
    #[must_use]
    pub fn with_max_cells(mut self, max_cells: u128) -> Self {
        self.max_cells = max_cells;
        self
    }

    /// Returns true if parallel processing should be used for the given count.
    #[must_use]
    pub fn should_parallelize(&self, count: usize) -> bool {
        cfg!(feature = "parallel") && self.parallel && count >= self.parallel_threshold
    }
}
