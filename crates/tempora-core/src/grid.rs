//! The bucketed time axis.
//!
//! Sampled years are aggregated on a grid of fixed-width, half-open
//! buckets covering `[range_start, range_end)`. Years outside the range
//! are simply dropped from aggregation - the user scoped the window.

use crate::error::GridError;
use serde::{Deserialize, Serialize};

/// A fixed-width bucketing of the time axis over `[start, end)`.
///
/// Bucket `i` covers `[start + i * width, start + (i + 1) * width)`,
/// except that the final bucket is clipped to `end` when the range does
/// not divide evenly by the width (a *partial* final bucket).
///
/// # Example
///
/// ```rust
/// use tempora_core::TimeGrid;
///
/// let grid = TimeGrid::new(300.0, 800.0, 25.0)?;
/// assert_eq!(grid.num_buckets(), 20);
/// assert_eq!(grid.index_of(300.0), Some(0));
/// assert_eq!(grid.index_of(325.0), Some(1));
/// assert_eq!(grid.index_of(800.0), None); // half-open upper edge
/// # Ok::<(), tempora_core::GridError>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TimeGrid {
    start: f64,
    end: f64,
    width: f64,
}

impl TimeGrid {
    /// Creates a grid over `[start, end)` with the given bucket width.
    ///
    /// # Errors
    ///
    /// - [`GridError::NonFinite`] if any parameter is NaN or infinite
    /// - [`GridError::InvalidWidth`] if `width <= 0`
    /// - [`GridError::InvalidRange`] if `start >= end`
    pub fn new(start: f64, end: f64, width: f64) -> Result<Self, GridError> {
        for value in [start, end, width] {
            if !value.is_finite() {
                return Err(GridError::NonFinite { value });
            }
        }
        if width <= 0.0 {
            return Err(GridError::InvalidWidth { width });
        }
        if start >= end {
            return Err(GridError::InvalidRange { start, end });
        }
        Ok(Self { start, end, width })
    }

    /// Start of the covered range (inclusive).
    #[must_use]
    pub fn range_start(&self) -> f64 {
        self.start
    }

    /// End of the covered range (exclusive).
    #[must_use]
    pub fn range_end(&self) -> f64 {
        self.end
    }

    /// Width of each bucket in years.
    #[must_use]
    pub fn bucket_width(&self) -> f64 {
        self.width
    }

    /// Number of buckets covering the range.
    ///
    /// `ceil((end - start) / width)`; the final bucket may be partial.
    #[must_use]
    pub fn num_buckets(&self) -> usize {
        ((self.end - self.start) / self.width).ceil() as usize
    }

    /// Maps a year to its bucket index, or `None` when out of range.
    ///
    /// The range is half-open: `year == range_start` lands in bucket 0,
    /// `year == range_end` is out of range. A year exactly on an interior
    /// boundary belongs to the bucket starting at that boundary.
    #[must_use]
    pub fn index_of(&self, year: f64) -> Option<usize> {
        if !year.is_finite() || year < self.start || year >= self.end {
            return None;
        }
        let index = ((year - self.start) / self.width).floor() as usize;
        // An in-range year can quotient to num_buckets under floating-point
        // rounding at the clipped final bucket; clamp so it is not lost.
        Some(index.min(self.num_buckets() - 1))
    }

    /// Inclusive lower edge of bucket `index`.
    ///
    /// Returns `None` when `index >= num_buckets()`.
    #[must_use]
    pub fn bucket_start(&self, index: usize) -> Option<f64> {
        (index < self.num_buckets()).then(|| self.start + index as f64 * self.width)
    }

    /// Half-open `[start, end)` edges of bucket `index`, the final bucket
    /// clipped to `range_end`.
    #[must_use]
    pub fn bucket_bounds(&self, index: usize) -> Option<(f64, f64)> {
        let lo = self.bucket_start(index)?;
        let hi = (lo + self.width).min(self.end);
        Some((lo, hi))
    }

    /// Iterates over the inclusive lower edges of all buckets, in order.
    pub fn bucket_starts(&self) -> impl Iterator<Item = f64> + '_ {
        (0..self.num_buckets()).map(|i| self.start + i as f64 * self.width)
    }
}
