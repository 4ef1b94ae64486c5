//! Per-run bucket counting.
//!
//! Each simulation run owns one row of the count matrix: for every record,
//! the run's sampled year is resolved to a bucket (or dropped when out of
//! range) and the bucket's counter is incremented. Rows are independent
//! and built conditionally in parallel; the matrix is never mutated after
//! assembly.

use crate::config::SimConfig;
use crate::parallel::maybe_parallel_map_indices;
use crate::sampler::RecordSamples;
use ndarray::{Array2, ArrayView1, ArrayView2};
use tempora_core::TimeGrid;

/// Bucket counts per simulation run: `size` rows × `num_buckets` columns.
///
/// Counts are integral but stored as `f64` (exact well below 2^53) so the
/// mean/percentile reduction needs no conversion pass.
#[derive(Debug, Clone, PartialEq)]
pub struct RunCountMatrix {
    counts: Array2<f64>,
}

impl RunCountMatrix {
    /// Number of simulation runs (rows).
    #[must_use]
    pub fn num_runs(&self) -> usize {
        self.counts.nrows()
    }

    /// Number of buckets (columns).
    #[must_use]
    pub fn num_buckets(&self) -> usize {
        self.counts.ncols()
    }

    /// The full matrix.
    #[must_use]
    pub fn counts(&self) -> ArrayView2<'_, f64> {
        self.counts.view()
    }

    /// One run's bucket counts.
    #[must_use]
    pub fn run_row(&self, run: usize) -> ArrayView1<'_, f64> {
        self.counts.row(run)
    }

    /// One bucket's counts across all runs.
    #[must_use]
    pub fn bucket_column(&self, bucket: usize) -> ArrayView1<'_, f64> {
        self.counts.column(bucket)
    }
}

/// Builds the count matrix from the sampled table.
///
/// `samples` must hold one entry per record with `years.len() == size`
/// (as produced by [`crate::sampler::sample_records`]). Out-of-range
/// samples are skipped, not an error; a record contributes at most one
/// count per run.
#[must_use]
pub fn aggregate_runs(
    samples: &[RecordSamples],
    grid: &TimeGrid,
    size: usize,
    config: &SimConfig,
) -> RunCountMatrix {
    let num_buckets = grid.num_buckets();

    let rows = maybe_parallel_map_indices(size, config, |run| {
        let mut row = vec![0.0_f64; num_buckets];
        for record in samples {
            if let Some(bucket) = grid.index_of(record.years[run]) {
                row[bucket] += 1.0;
            }
        }
        row
    });

    let mut counts = Array2::zeros((size, num_buckets));
    for (run, row) in rows.into_iter().enumerate() {
        counts.row_mut(run).assign(&ArrayView1::from(&row[..]));
    }

    RunCountMatrix { counts }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sampler::{sample_records, RecordSamples};
    use tempora_core::IntervalRecord;

    fn samples_of(rows: Vec<Vec<f64>>) -> Vec<RecordSamples> {
        rows.into_iter()
            .enumerate()
            .map(|(record_index, years)| RecordSamples {
                record_index,
                years,
            })
            .collect()
    }

    #[test]
    fn test_degenerate_record_counts_every_run() {
        let grid = TimeGrid::new(300.0, 400.0, 25.0).unwrap();
        let samples = samples_of(vec![vec![300.0; 10]]);

        let matrix = aggregate_runs(&samples, &grid, 10, &SimConfig::sequential());

        assert_eq!(matrix.num_runs(), 10);
        assert_eq!(matrix.num_buckets(), 4);
        for run in 0..10 {
            assert_eq!(matrix.run_row(run).to_vec(), vec![1.0, 0.0, 0.0, 0.0]);
        }
    }

    #[test]
    fn test_out_of_range_samples_dropped() {
        let grid = TimeGrid::new(0.0, 100.0, 50.0).unwrap();
        // run 0: in range; run 1: below; run 2: exactly range_end (excluded)
        let samples = samples_of(vec![vec![10.0, -1.0, 100.0]]);

        let matrix = aggregate_runs(&samples, &grid, 3, &SimConfig::sequential());

        assert_eq!(matrix.run_row(0).sum(), 1.0);
        assert_eq!(matrix.run_row(1).sum(), 0.0);
        assert_eq!(matrix.run_row(2).sum(), 0.0);
    }

    #[test]
    fn test_multiple_records_share_buckets() {
        let grid = TimeGrid::new(0.0, 100.0, 50.0).unwrap();
        let samples = samples_of(vec![vec![10.0], vec![20.0], vec![60.0]]);

        let matrix = aggregate_runs(&samples, &grid, 1, &SimConfig::sequential());

        assert_eq!(matrix.run_row(0).to_vec(), vec![2.0, 1.0]);
    }

    #[test]
    fn test_counts_conserved_for_in_range_samples() {
        let records = vec![
            IntervalRecord::bounded(-50.0, 50.0).unwrap(),
            IntervalRecord::bounded(-200.0, 200.0).unwrap(),
            IntervalRecord::new(None, Some(0.0)).unwrap(),
        ];
        let grid = TimeGrid::new(-100.0, 100.0, 50.0).unwrap();
        let size = 500;
        let config = SimConfig::sequential();

        let samples = sample_records(&records, size, 11, &config);
        let matrix = aggregate_runs(&samples, &grid, size, &config);

        for run in 0..size {
            let in_range = samples
                .iter()
                .filter(|s| grid.index_of(s.years[run]).is_some())
                .count();
            assert_eq!(matrix.run_row(run).sum(), in_range as f64);
        }
    }

    #[test]
    fn test_parallel_and_sequential_agree() {
        let records = vec![
            IntervalRecord::bounded(0.0, 100.0).unwrap(),
            IntervalRecord::bounded(25.0, 75.0).unwrap(),
        ];
        let grid = TimeGrid::new(0.0, 100.0, 10.0).unwrap();
        let size = 200;

        let sequential = SimConfig::sequential();
        let eager = SimConfig::new().with_threshold(0);

        let samples = sample_records(&records, size, 3, &sequential);
        let a = aggregate_runs(&samples, &grid, size, &sequential);
        let b = aggregate_runs(&samples, &grid, size, &eager);

        assert_eq!(a, b);
    }

    #[test]
    fn test_empty_table() {
        let grid = TimeGrid::new(0.0, 100.0, 25.0).unwrap();
        let matrix = aggregate_runs(&[], &grid, 5, &SimConfig::sequential());
        assert_eq!(matrix.num_runs(), 5);
        assert_eq!(matrix.counts().sum(), 0.0);
    }
}
