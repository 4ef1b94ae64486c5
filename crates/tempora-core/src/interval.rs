//! Uncertain date intervals.
//!
//! A historical record rarely has an exact date. Instead it carries an
//! earliest-possible and latest-possible year (either of which may be
//! missing), and every year in between is consistent with the evidence.

use crate::error::IntervalError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// One record's uncertain date bounds, in calendar years.
///
/// Negative years are BCE, positive years are CE. At least one bound is
/// always present, and when both are present `lower <= upper` holds; the
/// constructor rejects anything else, so an invalid record is
/// unrepresentable.
///
/// # Example
///
/// ```rust
/// use tempora_core::IntervalRecord;
///
/// // An inscription dated between 50 BCE and 50 CE
/// let record = IntervalRecord::new(Some(-50.0), Some(50.0))?;
/// assert_eq!(record.span(), Some(100.0));
///
/// // A coin with only a terminus ante quem
/// let coin = IntervalRecord::new(None, Some(14.0))?;
/// assert_eq!(coin.point_estimate(), Some(14.0));
/// # Ok::<(), tempora_core::IntervalError>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct IntervalRecord {
    /// Earliest possible year (not_before).
    lower: Option<f64>,
    /// Latest possible year (not_after).
    upper: Option<f64>,
}

impl IntervalRecord {
    /// Creates a record from optional bounds, validating the interval.
    ///
    /// # Errors
    ///
    /// - [`IntervalError::Unbounded`] if both bounds are absent
    /// - [`IntervalError::Invalid`] if `lower > upper`
    /// - [`IntervalError::NonFinite`] if a present bound is NaN or infinite
    pub fn new(lower: Option<f64>, upper: Option<f64>) -> Result<Self, IntervalError> {
        for bound in [lower, upper].into_iter().flatten() {
            if !bound.is_finite() {
                return Err(IntervalError::NonFinite { value: bound });
            }
        }

        match (lower, upper) {
            (None, None) => Err(IntervalError::Unbounded),
            (Some(lo), Some(hi)) if lo > hi => Err(IntervalError::Invalid {
                lower: lo,
                upper: hi,
            }),
            _ => Ok(Self { lower, upper }),
        }
    }

    /// Creates a record with both bounds present.
    pub fn bounded(lower: f64, upper: f64) -> Result<Self, IntervalError> {
        Self::new(Some(lower), Some(upper))
    }

    /// Creates a record known to a single exact year.
    pub fn exact(year: f64) -> Result<Self, IntervalError> {
        Self::new(Some(year), Some(year))
    }

    /// The earliest possible year, if known.
    #[must_use]
    pub fn lower(&self) -> Option<f64> {
        self.lower
    }

    /// The latest possible year, if known.
    #[must_use]
    pub fn upper(&self) -> Option<f64> {
        self.upper
    }

    /// Returns true when both bounds are present and equal.
    #[must_use]
    pub fn is_degenerate(&self) -> bool {
        matches!((self.lower, self.upper), (Some(lo), Some(hi)) if lo == hi)
    }

    /// Width of the interval in years, when both bounds are present.
    #[must_use]
    pub fn span(&self) -> Option<f64> {
        match (self.lower, self.upper) {
            (Some(lo), Some(hi)) => Some(hi - lo),
            _ => None,
        }
    }

    /// The single year this record pins down, if it pins one down at all.
    ///
    /// Returns the shared value for a degenerate interval, or the present
    /// bound when only one bound is known. A genuine range returns `None`.
    #[must_use]
    pub fn point_estimate(&self) -> Option<f64> {
        match (self.lower, self.upper) {
            (Some(lo), Some(hi)) if lo == hi => Some(lo),
            (Some(lo), None) => Some(lo),
            (None, Some(hi)) => Some(hi),
            _ => None,
        }
    }
}

impl fmt::Display for IntervalRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (self.lower, self.upper) {
            (Some(lo), Some(hi)) if lo == hi => write!(f, "[{lo}]"),
            (Some(lo), Some(hi)) => write!(f, "[{lo}, {hi}]"),
            (Some(lo), None) => write!(f, "[{lo}, ?]"),
            (None, Some(hi)) => write!(f, "[?, {hi}]"),
            (None, None) => write!(f, "[?, ?]"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bounded_interval() {
        let record = IntervalRecord::bounded(-50.0, 50.0).unwrap();
        assert_eq!(record.lower(), Some(-50.0));
        assert_eq!(record.upper(), Some(50.0));
        assert_eq!(record.span(), Some(100.0));
        assert!(!record.is_degenerate());
        assert_eq!(record.point_estimate(), None);
    }

    #[test]
    fn test_degenerate_interval() {
        let record = IntervalRecord::exact(300.0).unwrap();
        assert!(record.is_degenerate());
        assert_eq!(record.span(), Some(0.0));
        assert_eq!(record.point_estimate(), Some(300.0));
    }

    #[test]
    fn test_single_bound() {
        let lower_only = IntervalRecord::new(Some(100.0), None).unwrap();
        assert_eq!(lower_only.point_estimate(), Some(100.0));
        assert_eq!(lower_only.span(), None);

        let upper_only = IntervalRecord::new(None, Some(0.0)).unwrap();
        assert_eq!(upper_only.point_estimate(), Some(0.0));
    }

    #[test]
    fn test_inverted_bounds_rejected() {
        let err = IntervalRecord::bounded(50.0, -50.0).unwrap_err();
        assert_eq!(
            err,
            IntervalError::Invalid {
                lower: 50.0,
                upper: -50.0
            }
        );
    }

    #[test]
    fn test_unbounded_rejected() {
        assert_eq!(
            IntervalRecord::new(None, None).unwrap_err(),
            IntervalError::Unbounded
        );
    }

    #[test]
    fn test_non_finite_rejected() {
        assert!(IntervalRecord::new(Some(f64::NAN), Some(10.0)).is_err());
        assert!(IntervalRecord::new(Some(0.0), Some(f64::INFINITY)).is_err());
    }

    #[test]
    fn test_display() {
        assert_eq!(
            IntervalRecord::bounded(-50.0, 50.0).unwrap().to_string(),
            "[-50, 50]"
        );
        assert_eq!(IntervalRecord::exact(300.0).unwrap().to_string(), "[300]");
        assert_eq!(
            IntervalRecord::new(None, Some(14.0)).unwrap().to_string(),
            "[?, 14]"
        );
    }
}
