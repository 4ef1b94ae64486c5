//! Reduction of the count matrix into per-bucket summaries.
//!
//! This is the only join point of the whole computation: every run's row
//! must be present before the per-bucket mean and band can be taken.

use crate::aggregate::RunCountMatrix;
use crate::error::{SimResult, SimulationError};
use serde::{Deserialize, Serialize};
use tempora_core::TimeGrid;

/// Spread statistic reported around the per-bucket mean.
///
/// The chosen method is fixed for the duration of one simulation request.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum BandMethod {
    /// Run-wise minimum and maximum count.
    MinMax,
    /// Empirical percentile pair across runs, in percent (nearest-rank on
    /// the sorted counts).
    Percentile {
        /// Lower percentile, e.g. 2.5.
        lower: f64,
        /// Upper percentile, e.g. 97.5.
        upper: f64,
    },
    /// Mean ± one standard deviation, with the lower edge floored at zero.
    StdDev,
}

impl Default for BandMethod {
    /// A 95% empirical envelope.
    fn default() -> Self {
        BandMethod::Percentile {
            lower: 2.5,
            upper: 97.5,
        }
    }
}

impl BandMethod {
    /// Checks percentile parameters.
    pub fn validate(&self) -> SimResult<()> {
        if let BandMethod::Percentile { lower, upper } = self {
            if !lower.is_finite() || !upper.is_finite() {
                return Err(SimulationError::InvalidConfiguration(
                    "band percentiles must be finite".to_string(),
                ));
            }
            if *lower < 0.0 || *upper > 100.0 || lower >= upper {
                return Err(SimulationError::InvalidConfiguration(format!(
                    "band percentiles must satisfy 0 <= lower < upper <= 100, got ({lower}, {upper})"
                )));
            }
        }
        Ok(())
    }
}

/// Central tendency and spread of counts for one bucket, across all runs.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BucketSummary {
    /// Inclusive lower edge of the bucket, for axis labeling.
    pub bucket_start: f64,
    /// Mean count over runs.
    pub mean_count: f64,
    /// Lower edge of the uncertainty band.
    pub lower_band: f64,
    /// Upper edge of the uncertainty band.
    pub upper_band: f64,
}

/// Nearest-rank percentile of already-sorted values.
fn percentile_sorted(sorted: &[f64], pct: f64) -> f64 {
    debug_assert!(!sorted.is_empty());
    let index = (pct / 100.0 * (sorted.len() - 1) as f64).round() as usize;
    sorted[index.min(sorted.len() - 1)]
}

/// Reduces the matrix along the run axis into one summary per bucket.
///
/// A bucket with zero counts in every run yields `mean_count = 0` with a
/// zero-width band. The matrix must have at least one run; `simulate`
/// guarantees this.
#[must_use]
pub fn summarize(matrix: &RunCountMatrix, grid: &TimeGrid, band: BandMethod) -> Vec<BucketSummary> {
    let mut summaries = Vec::with_capacity(matrix.num_buckets());

    for (bucket, bucket_start) in grid.bucket_starts().enumerate() {
        let column = matrix.bucket_column(bucket);
        let mean_count = column.mean().unwrap_or(0.0);

        let (lower_band, upper_band) = match band {
            BandMethod::MinMax => (
                column.fold(f64::INFINITY, |acc, &c| acc.min(c)),
                column.fold(f64::NEG_INFINITY, |acc, &c| acc.max(c)),
            ),
            BandMethod::Percentile { lower, upper } => {
                let mut sorted = column.to_vec();
                sorted.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));
                (
                    percentile_sorted(&sorted, lower),
                    percentile_sorted(&sorted, upper),
                )
            }
            BandMethod::StdDev => {
                let sd = column.std(0.0);
                ((mean_count - sd).max(0.0), mean_count + sd)
            }
        };

        summaries.push(BucketSummary {
            bucket_start,
            mean_count,
            lower_band,
            upper_band,
        });
    }

    summaries
}
