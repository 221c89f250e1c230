//! Traversal Summary CLI
//!
//! Reshapes raw tree-traversal benchmark results into a wide summary
//! table for charting.

use anyhow::Result;
use clap::Parser;
use env_logger::Env;
use std::path::PathBuf;

use traversal_summary::commands::{execute_reshape, validate_args, ReshapeArgs};

/// Creates summary tables for the results of traversal experiments.
/// Developed for the data collected from the native experiments.
#[derive(Parser, Debug)]
#[command(name = "traversal-summary")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Input file with experimental data
    #[arg(short = 'i', long = "input_file")]
    input_file: PathBuf,

    /// Output file to save reformatted data (default: cleaned-<input name>)
    #[arg(short = 'o', long = "output_file")]
    output_file: Option<PathBuf>,

    /// Write a JSON run report to this path
    #[arg(long)]
    report: Option<PathBuf>,

    /// Print text summary to stdout
    #[arg(long)]
    summary: bool,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Setup logging
    let log_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(Env::default().default_filter_or(log_level)).init();

    let args = ReshapeArgs {
        input_file: cli.input_file,
        output_file: cli.output_file,
        report_file: cli.report,
        print_summary: cli.summary,
    };

    // Validate args first
    validate_args(&args)?;

    execute_reshape(args)?;

    Ok(())
}
