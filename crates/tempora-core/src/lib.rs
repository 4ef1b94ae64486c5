//! # Tempora Core
//!
//! Core data model for the Tempora temporal-uncertainty analytics library.
//!
//! Historical records are rarely dated to an exact year; the evidence
//! usually supports a *range* of plausible years. This crate provides the
//! value types the simulation engine is built on:
//!
//! - **[`IntervalRecord`]**: one record's uncertain date bounds
//!   (earliest-possible / latest-possible year, either possibly absent)
//! - **[`TimeGrid`]**: a fixed-width, half-open bucketing of the time axis
//!
//! ## Design Philosophy
//!
//! - **Invalid states are unrepresentable**: constructors validate, fields
//!   stay private
//! - **Pure values**: no I/O, no randomness, no global state
//!
//! ## Example
//!
//! ```rust
//! use tempora_core::{IntervalRecord, TimeGrid};
//!
//! let record = IntervalRecord::bounded(-50.0, 50.0)?;
//! let grid = TimeGrid::new(-100.0, 100.0, 50.0)?;
//!
//! assert_eq!(grid.num_buckets(), 4);
//! assert_eq!(grid.index_of(record.lower().unwrap()), Some(1));
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::cast_possible_truncation)]

mod error;
mod grid;
mod interval;

pub use error::{GridError, IntervalError};
pub use grid::TimeGrid;
pub use interval::IntervalRecord;

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::{GridError, IntervalError, IntervalRecord, TimeGrid};
}
