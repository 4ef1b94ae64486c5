//! Date sampling.
//!
//! For every record and every simulation run, one plausible calendar year
//! is drawn from the record's uncertain interval. Sampling is purely
//! functional given an injected RNG; the engine gives each record its own
//! counter-based stream so results do not depend on scheduling.

use crate::config::SimConfig;
use crate::parallel::maybe_parallel_map_indices;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};
use tempora_core::IntervalRecord;

/// Distribution used to draw a year within a record's interval.
///
/// Uniform reflects "no additional prior knowledge" about where within the
/// range the true date lies, the standard assumption for this class of
/// problem.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[non_exhaustive]
pub enum SamplingStrategy {
    /// Independent uniform draws from `[lower, upper]`.
    #[default]
    Uniform,
}

/// All sampled years for one record: `years[r]` is the sample for run `r`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecordSamples {
    /// Position of the record in the input table.
    pub record_index: usize,
    /// One sampled year per simulation run.
    pub years: Vec<f64>,
}

/// Derives the dedicated RNG stream for one record.
///
/// Every record gets the same base seed on a distinct ChaCha stream, so a
/// record's samples are identical whether the table is processed
/// sequentially or in parallel, and in any order.
#[must_use]
pub fn record_rng(seed: u64, record_index: usize) -> ChaCha8Rng {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    rng.set_stream(record_index as u64);
    rng
}

/// Draws exactly `size` plausible years for one record.
///
/// - Both bounds present with `lower < upper`: `size` independent draws
///   from the configured distribution over `[lower, upper]`.
/// - Degenerate interval (`lower == upper`) or a single present bound:
///   every run returns the record's point estimate (no randomization is
///   possible from a single constraint).
pub fn sample_record<R: Rng + ?Sized>(
    record: &IntervalRecord,
    size: usize,
    strategy: SamplingStrategy,
    rng: &mut R,
) -> Vec<f64> {
    if let Some(year) = record.point_estimate() {
        return vec![year; size];
    }

    // point_estimate() is None only for a genuine range, so both bounds
    // are present and lower < upper here.
    let (lo, hi) = match (record.lower(), record.upper()) {
        (Some(lo), Some(hi)) => (lo, hi),
        _ => unreachable!("validated record without point estimate has both bounds"),
    };

    match strategy {
        SamplingStrategy::Uniform => (0..size).map(|_| rng.gen_range(lo..=hi)).collect(),
    }
}

/// Samples the whole table: an explicit (conditionally parallel) map over
/// records producing one [`RecordSamples`] per record.
#[must_use]
pub fn sample_records(
    records: &[IntervalRecord],
    size: usize,
    seed: u64,
    config: &SimConfig,
) -> Vec<RecordSamples> {
    maybe_parallel_map_indices(records.len(), config, |i| {
        let mut rng = record_rng(seed, i);
        RecordSamples {
            record_index: i,
            years: sample_record(&records[i], size, config.strategy, &mut rng),
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_degenerate_interval_is_constant() {
        let record = IntervalRecord::exact(300.0).unwrap();
        let mut rng = record_rng(7, 0);
        let years = sample_record(&record, 100, SamplingStrategy::Uniform, &mut rng);
        assert_eq!(years.len(), 100);
        assert!(years.iter().all(|&y| y == 300.0));
    }

    #[test]
    fn test_single_bound_is_constant() {
        let record = IntervalRecord::new(None, Some(0.0)).unwrap();
        let mut rng = record_rng(7, 0);
        let years = sample_record(&record, 50, SamplingStrategy::Uniform, &mut rng);
        assert!(years.iter().all(|&y| y == 0.0));

        let record = IntervalRecord::new(Some(-27.0), None).unwrap();
        let mut rng = record_rng(7, 1);
        let years = sample_record(&record, 50, SamplingStrategy::Uniform, &mut rng);
        assert!(years.iter().all(|&y| y == -27.0));
    }

    #[test]
    fn test_samples_stay_within_bounds() {
        let record = IntervalRecord::bounded(-50.0, 50.0).unwrap();
        let mut rng = record_rng(42, 0);
        let years = sample_record(&record, 10_000, SamplingStrategy::Uniform, &mut rng);
        assert!(years.iter().all(|&y| (-50.0..=50.0).contains(&y)));
    }

    #[test]
    fn test_uniformity_of_mean() {
        // Over many draws the empirical mean approaches the midpoint.
        let record = IntervalRecord::bounded(100.0, 200.0).unwrap();
        let mut rng = record_rng(42, 0);
        let years = sample_record(&record, 100_000, SamplingStrategy::Uniform, &mut rng);
        let mean = years.iter().sum::<f64>() / years.len() as f64;
        assert_relative_eq!(mean, 150.0, epsilon = 1.0);
    }

    #[test]
    fn test_record_streams_are_independent_of_order() {
        let records = vec![
            IntervalRecord::bounded(0.0, 100.0).unwrap(),
            IntervalRecord::bounded(200.0, 300.0).unwrap(),
        ];

        let sequential = SimConfig::sequential();
        let eager = SimConfig::new().with_threshold(0);

        let a = sample_records(&records, 32, 99, &sequential);
        let b = sample_records(&records, 32, 99, &eager);
        assert_eq!(a, b);
    }

    #[test]
    fn test_same_seed_same_samples() {
        let record = IntervalRecord::bounded(0.0, 1000.0).unwrap();
        let a = sample_record(&record, 64, SamplingStrategy::Uniform, &mut record_rng(5, 3));
        let b = sample_record(&record, 64, SamplingStrategy::Uniform, &mut record_rng(5, 3));
        assert_eq!(a, b);

        let c = sample_record(&record, 64, SamplingStrategy::Uniform, &mut record_rng(6, 3));
        assert_ne!(a, c);
    }

    #[test]
    fn test_sample_records_shape() {
        let records = vec![
            IntervalRecord::exact(10.0).unwrap(),
            IntervalRecord::bounded(0.0, 5.0).unwrap(),
            IntervalRecord::new(Some(7.0), None).unwrap(),
        ];
        let samples = sample_records(&records, 25, 1, &SimConfig::default());
        assert_eq!(samples.len(), 3);
        for (i, s) in samples.iter().enumerate() {
            assert_eq!(s.record_index, i);
            assert_eq!(s.years.len(), 25);
        }
    }

    #[test]
    fn test_zero_size_yields_empty_samples() {
        let record = IntervalRecord::bounded(0.0, 10.0).unwrap();
        let mut rng = record_rng(0, 0);
        let years = sample_record(&record, 0, SamplingStrategy::Uniform, &mut rng);
        assert!(years.is_empty());
    }
}
