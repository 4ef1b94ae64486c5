//! Tempora CLI - Monte Carlo analytics for uncertain historical dates.
//!
//! # Usage
//!
//! ```bash
//! # Inspect the columns of a dataset
//! tempora columns inscriptions.csv
//!
//! # Simulate the temporal distribution of 300-800 CE in 25-year buckets
//! tempora simulate --input inscriptions.csv \
//!     --start-col not_before --end-col not_after \
//!     --range-start 300 --range-end 800 --bucket-width 25 \
//!     --size 1000 --seed 42
//!
//! # Export summaries and the augmented sample table
//! tempora simulate ... --output summary.csv --samples-output samples.csv
//! ```

use anyhow::Result;
use clap::Parser;

mod cli;
mod commands;
mod error;
mod ingest;
mod output;

use cli::{Cli, Commands};

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    let format = cli.format;

    match cli.command {
        Commands::Columns(args) => commands::columns::execute(&args, format)?,
        Commands::Simulate(args) => commands::simulate::execute(&args, format, cli.quiet)?,
    }

    Ok(())
}
