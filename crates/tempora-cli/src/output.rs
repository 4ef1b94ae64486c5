//! Output formatting utilities.

use colored::Colorize;
use serde::Serialize;
use tabled::{
    settings::{object::Columns, Alignment, Modify, Style},
    Table, Tabled,
};

use crate::cli::OutputFormat;
use tempora_sim::BucketSummary;

/// One bucket summary as a display/export row.
#[derive(Debug, Clone, Serialize, Tabled)]
pub struct SummaryRow {
    /// Inclusive lower edge of the bucket.
    #[tabled(rename = "bucket_start")]
    pub bucket_start: f64,
    /// Mean count over runs.
    #[tabled(rename = "mean")]
    pub mean_count: f64,
    /// Lower edge of the uncertainty band.
    #[tabled(rename = "lower")]
    pub lower_band: f64,
    /// Upper edge of the uncertainty band.
    #[tabled(rename = "upper")]
    pub upper_band: f64,
}

impl From<&BucketSummary> for SummaryRow {
    fn from(s: &BucketSummary) -> Self {
        Self {
            bucket_start: s.bucket_start,
            mean_count: s.mean_count,
            lower_band: s.lower_band,
            upper_band: s.upper_band,
        }
    }
}

/// Formats and prints output based on the specified format.
pub fn print_output<T: Serialize + Tabled>(data: &[T], format: OutputFormat) -> anyhow::Result<()> {
    match format {
        OutputFormat::Table => print_table(data),
        OutputFormat::Json => print_json(data),
        OutputFormat::Csv => print_csv(data),
    }
}

/// Prints data as a formatted table.
fn print_table<T: Tabled>(data: &[T]) -> anyhow::Result<()> {
    if data.is_empty() {
        println!("No results.");
        return Ok(());
    }

    let table = Table::new(data)
        .with(Style::rounded())
        .with(Modify::new(Columns::first()).with(Alignment::left()))
        .to_string();

    println!("{table}");
    Ok(())
}

/// Prints data as JSON.
fn print_json<T: Serialize>(data: &[T]) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(data)?);
    Ok(())
}

/// Prints data as CSV.
fn print_csv<T: Serialize>(data: &[T]) -> anyhow::Result<()> {
    let mut wtr = csv::Writer::from_writer(std::io::stdout());
    for item in data {
        wtr.serialize(item)?;
    }
    wtr.flush()?;
    Ok(())
}

/// Prints a success message.
pub fn print_success(message: &str) {
    println!("{} {}", "✓".green(), message);
}

/// Prints an info message.
pub fn print_info(message: &str) {
    eprintln!("{} {}", "ℹ".blue(), message);
}
