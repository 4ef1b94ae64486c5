//! CSV ingestion.
//!
//! Reads a headered CSV, extracts the two user-chosen date columns into
//! interval records, and drops rows that carry no date at all. Dates are
//! years (YYYY), BCE as negative values - the same convention the rest of
//! the pipeline uses.

use crate::error::{CliError, CliResult};
use std::path::Path;
use tempora_core::IntervalRecord;

/// One ingested row: its 1-based position in the file and its bounds.
#[derive(Debug, Clone)]
pub struct DatedRow {
    /// 1-based data row number (excluding the header).
    pub row: usize,
    /// The row's validated interval.
    pub record: IntervalRecord,
}

/// Returns the header names of a CSV file, in order.
pub fn read_columns(path: &Path) -> CliResult<Vec<String>> {
    let mut reader = csv::Reader::from_path(path)?;
    let headers = reader.headers()?;
    if headers.is_empty() {
        return Err(CliError::MissingHeader(path.display().to_string()));
    }
    Ok(headers.iter().map(str::to_string).collect())
}

/// Parses a cell as a year; non-numeric or empty cells become absent.
fn parse_year(cell: Option<&str>) -> Option<f64> {
    cell.and_then(|c| c.trim().parse::<f64>().ok())
        .filter(|y| y.is_finite())
}

/// Reads the dated rows of a CSV file.
///
/// Rows where both chosen columns are empty or non-numeric are filtered
/// out (they carry no temporal information); a row with inverted bounds
/// aborts ingestion with its row number.
pub fn read_records(path: &Path, start_col: &str, end_col: &str) -> CliResult<Vec<DatedRow>> {
    let columns = read_columns(path)?;
    let start_idx = columns
        .iter()
        .position(|c| c == start_col)
        .ok_or_else(|| CliError::ColumnNotFound(start_col.to_string()))?;
    let end_idx = columns
        .iter()
        .position(|c| c == end_col)
        .ok_or_else(|| CliError::ColumnNotFound(end_col.to_string()))?;

    let mut reader = csv::Reader::from_path(path)?;
    let mut rows = Vec::new();

    for (i, result) in reader.records().enumerate() {
        let row = i + 1;
        let record = result?;
        let lower = parse_year(record.get(start_idx));
        let upper = parse_year(record.get(end_idx));

        match IntervalRecord::new(lower, upper) {
            Ok(interval) => rows.push(DatedRow {
                row,
                record: interval,
            }),
            // An undated row is filtered, matching the upstream behavior
            // the engine expects; inverted bounds are a data error.
            Err(tempora_core::IntervalError::Unbounded) => {}
            Err(source) => return Err(CliError::BadRow { row, source }),
        }
    }

    if rows.is_empty() {
        return Err(CliError::NoDatedRecords {
            start: start_col.to_string(),
            end: end_col.to_string(),
        });
    }

    Ok(rows)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn csv_file(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_read_columns() {
        let file = csv_file("id,not_before,not_after\n1,100,200\n");
        let columns = read_columns(file.path()).unwrap();
        assert_eq!(columns, vec!["id", "not_before", "not_after"]);
    }

    #[test]
    fn test_read_records_filters_undated() {
        let file = csv_file(
            "id,not_before,not_after\n\
             1,100,200\n\
             2,,\n\
             3,unknown,n/a\n\
             4,,50\n",
        );
        let rows = read_records(file.path(), "not_before", "not_after").unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].row, 1);
        assert_eq!(rows[0].record.lower(), Some(100.0));
        assert_eq!(rows[1].row, 4);
        assert_eq!(rows[1].record.upper(), Some(50.0));
        assert_eq!(rows[1].record.lower(), None);
    }

    #[test]
    fn test_negative_years_parse() {
        let file = csv_file("a,b\n-50,50\n");
        let rows = read_records(file.path(), "a", "b").unwrap();
        assert_eq!(rows[0].record.lower(), Some(-50.0));
    }

    #[test]
    fn test_missing_column() {
        let file = csv_file("a,b\n1,2\n");
        let err = read_records(file.path(), "a", "nope").unwrap_err();
        assert!(matches!(err, CliError::ColumnNotFound(c) if c == "nope"));
    }

    #[test]
    fn test_inverted_bounds_abort_with_row_number() {
        let file = csv_file("a,b\n1,2\n300,200\n");
        let err = read_records(file.path(), "a", "b").unwrap_err();
        assert!(matches!(err, CliError::BadRow { row: 2, .. }));
    }

    #[test]
    fn test_no_dated_records() {
        let file = csv_file("a,b\nx,y\n,\n");
        let err = read_records(file.path(), "a", "b").unwrap_err();
        assert!(matches!(err, CliError::NoDatedRecords { .. }));
    }
}
