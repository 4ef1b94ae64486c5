//! CLI error types.

use thiserror::Error;

/// CLI error type.
#[derive(Debug, Error)]
#[allow(dead_code)]
pub enum CliError {
    /// A requested column does not exist in the input file.
    #[error("Column '{0}' not found in input. Use 'tempora columns' to list available columns.")]
    ColumnNotFound(String),

    /// The input file has no header row.
    #[error("Input file has no header row: {0}")]
    MissingHeader(String),

    /// No row carries a usable date in either chosen column.
    #[error("No records with dates in columns '{start}' or '{end}' found")]
    NoDatedRecords {
        /// The chosen start-date column.
        start: String,
        /// The chosen end-date column.
        end: String,
    },

    /// A row's bounds are inverted.
    #[error("Row {row}: {source}")]
    BadRow {
        /// 1-based data row number (excluding the header).
        row: usize,
        /// The underlying interval error.
        source: tempora_core::IntervalError,
    },

    /// CSV parsing failed.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// CLI result type.
pub type CliResult<T> = Result<T, CliError>;
