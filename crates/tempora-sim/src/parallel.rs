//! Conditional parallel iteration.
//!
//! Simulation runs and per-record sampling are independent of each other,
//! so both maps may execute in parallel. Uses rayon when the `parallel`
//! feature is enabled and the collection size exceeds the configured
//! threshold.

use crate::config::SimConfig;

/// Maps a function over the index range `0..count`, conditionally in
/// parallel. Results come back in index order either way.
///
/// Uses parallel iteration when:
/// - The `parallel` feature is enabled
/// - `config.parallel` is true
/// - `count` exceeds `config.parallel_threshold`
#[allow(unused_variables)]
pub fn maybe_parallel_map_indices<U, F>(count: usize, config: &SimConfig, f: F) -> Vec<U>
where
    U: Send,
    F: Fn(usize) -> U + Sync + Send,
{
    #[cfg(feature = "parallel")]
    {
        use rayon::prelude::*;
        if config.should_parallelize(count) {
            return (0..count).into_par_iter().map(f).collect();
        }
    }

    (0..count).map(f).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_maybe_parallel_map_indices_preserves_order() {
        let config = SimConfig::new().with_threshold(0);
        let results: Vec<usize> = maybe_parallel_map_indices(100, &config, |i| i * i);
        for (i, r) in results.iter().enumerate() {
            assert_eq!(*r, i * i);
        }
    }

    #[test]
    fn test_sequential_config_matches() {
        let config = SimConfig::sequential();
        let results: Vec<usize> = maybe_parallel_map_indices(5, &config, |i| i + 1);
        assert_eq!(results, vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn test_empty_range() {
        let config = SimConfig::default();
        let results: Vec<u8> = maybe_parallel_map_indices(0, &config, |_| 0);
        assert!(results.is_empty());
    }
}
