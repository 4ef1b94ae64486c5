//! Error types for the Tempora data model.

use thiserror::Error;

/// Errors raised when constructing an interval record.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum IntervalError {
    /// The earliest-possible year is later than the latest-possible year.
    #[error("invalid interval: lower bound {lower} exceeds upper bound {upper}")]
    Invalid {
        /// The offending lower bound.
        lower: f64,
        /// The offending upper bound.
        upper: f64,
    },

    /// Neither bound is present; the record carries no temporal information.
    #[error("invalid interval: both bounds absent")]
    Unbounded,

    /// A bound is NaN or infinite.
    #[error("invalid interval: bound {value} is not a finite year")]
    NonFinite {
        /// The offending bound value.
        value: f64,
    },
}

/// Errors raised when constructing a time grid.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GridError {
    /// Bucket width must be strictly positive.
    #[error("invalid grid: bucket width {width} must be positive")]
    InvalidWidth {
        /// The offending width.
        width: f64,
    },

    /// The range must be non-empty (`start < end`).
    #[error("invalid grid: range start {start} must be less than range end {end}")]
    InvalidRange {
        /// The offending range start.
        start: f64,
        /// The offending range end.
        end: f64,
    },

    /// A grid parameter is NaN or infinite.
    #[error("invalid grid: parameter {value} is not finite")]
    NonFinite {
        /// The offending parameter value.
        value: f64,
    },
}
