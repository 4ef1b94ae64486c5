//! Columns command implementation.
//!
//! Lists the header names of a CSV so users can pick the two date
//! columns for `tempora simulate`.

use anyhow::Result;
use clap::Args;
use std::path::PathBuf;

use crate::cli::OutputFormat;
use crate::ingest::read_columns;

/// Arguments for the columns command.
#[derive(Args, Debug)]
pub struct ColumnsArgs {
    /// Input CSV file
    pub input: PathBuf,
}

/// Execute the columns command.
pub fn execute(args: &ColumnsArgs, format: OutputFormat) -> Result<()> {
    let columns = read_columns(&args.input)?;

    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&columns)?),
        OutputFormat::Csv => {
            let mut wtr = csv::Writer::from_writer(std::io::stdout());
            wtr.write_record(["column"])?;
            for column in &columns {
                wtr.write_record([column.as_str()])?;
            }
            wtr.flush()?;
        }
        OutputFormat::Table => {
            for column in columns {
                println!("{column}");
            }
        }
    }

    Ok(())
}
