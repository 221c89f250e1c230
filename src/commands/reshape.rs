//! Reshape command implementation.
//!
//! The reshape command:
//! 1. Loads the raw results CSV
//! 2. Extracts typed trial records
//! 3. Groups trials and computes statistics
//! 4. Writes the summary CSV (and optional JSON report)

use super::models::ReshapeArgs;
use crate::aggregator::{extract_trials, Reshaper};
use crate::output::{
    render_text_summary, report_to_string, validate_path, write_report_string, write_summary,
    RunReport,
};
use crate::parser::load_table;
use crate::utils::config::OUTPUT_PREFIX;
use anyhow::{Context, Result};
use log::{debug, info, warn};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Instant;

/// Execute the reshape command
///
/// **Public** - main entry point called from main.rs
///
/// Nothing is written unless loading and reshaping both succeed.
///
/// # Returns
/// Path of the summary CSV that was written
///
/// # Errors
/// * Unreadable or malformed input
/// * Missing required columns or unparseable values
/// * File write errors
pub fn execute_reshape(args: ReshapeArgs) -> Result<PathBuf> {
    let start_time = Instant::now();

    let output_file = resolve_output_path(&args)?;

    info!("Input: {}", args.input_file.display());
    info!("Output: {}", output_file.display());

    // Step 1: Load raw table
    info!("Step 1/3: Loading raw results...");
    let source = load_table(&args.input_file).context("Failed to load input table")?;

    // Step 2: Reshape
    info!("Step 2/3: Grouping trials and computing statistics...");
    let trials = extract_trials(&source).context("Failed to extract trial records")?;
    let reshaper = Reshaper::from_trials(&trials);
    let table = reshaper.to_table().context("Failed to build summary table")?;

    debug!(
        "Summary table: {} rows x {} columns, {} configurations",
        table.row_count(),
        table.column_count(),
        reshaper.configuration_count()
    );

    // Step 3: Write outputs
    info!("Step 3/3: Writing output files...");

    // Check every destination and serialize the report before the first write
    validate_path(&output_file).context("Invalid summary output path")?;
    let report_json = match &args.report_file {
        Some(report_path) => {
            validate_path(report_path).context("Invalid report output path")?;
            let report = RunReport::new(
                &args.input_file,
                &output_file,
                trials.len(),
                &reshaper,
                &table,
            );
            let json = report_to_string(&report).context("Failed to serialize run report")?;
            Some((report_path, json))
        }
        None => None,
    };

    write_summary(&table, &output_file).context("Failed to write summary CSV")?;

    info!("✓ Summary written to: {}", output_file.display());

    if let Some((report_path, json)) = report_json {
        if let Err(e) = write_report_string(&json, report_path) {
            // Roll back so a failed run leaves no output
            if let Err(rm) = fs::remove_file(&output_file) {
                warn!("Could not remove {}: {}", output_file.display(), rm);
            }
            return Err(e).context("Failed to write run report");
        }

        info!("✓ Report written to: {}", report_path.display());
    }

    if args.print_summary {
        println!("\n{}", "=".repeat(80));
        println!("TRAVERSAL SUMMARY");
        println!("{}", "=".repeat(80));
        println!("Input:  {}", args.input_file.display());
        println!("Trials: {}", trials.len());
        println!(
            "\n{}",
            render_text_summary(&table, &reshaper.configuration_summaries())
        );
        println!("{}", "=".repeat(80));
    }

    let elapsed = start_time.elapsed();
    info!("Reshape completed in {:.2}s", elapsed.as_secs_f64());

    Ok(output_file)
}

/// Output path from args, or derived from the input path
fn resolve_output_path(args: &ReshapeArgs) -> Result<PathBuf> {
    match &args.output_file {
        Some(path) => Ok(path.clone()),
        None => derive_output_path(&args.input_file),
    }
}

/// Derive the default output path: `cleaned-<name>` next to the input
///
/// **Public** - also used by validate_args
///
/// # Example
/// ```ignore
/// let out = derive_output_path(Path::new("results/raw.csv"))?;
/// assert_eq!(out, PathBuf::from("results/cleaned-raw.csv"));
/// ```
pub fn derive_output_path(input_file: &Path) -> Result<PathBuf> {
    let file_name = input_file
        .file_name()
        .ok_or_else(|| anyhow::anyhow!("Input path has no file name: {}", input_file.display()))?;

    let mut name = std::ffi::OsString::from(OUTPUT_PREFIX);
    name.push(file_name);

    Ok(input_file.with_file_name(name))
}

/// Validate reshape arguments
///
/// **Public** - can be called before execute_reshape for early validation
pub fn validate_args(args: &ReshapeArgs) -> Result<()> {
    if args.input_file.as_os_str().is_empty() {
        anyhow::bail!("Input file cannot be empty");
    }

    let output_file = resolve_output_path(args)?;

    if output_file.as_os_str().is_empty() {
        anyhow::bail!("Output file cannot be empty");
    }

    if output_file == args.input_file {
        anyhow::bail!("Output file would overwrite the input file");
    }

    if let Some(report) = &args.report_file {
        if *report == output_file || *report == args.input_file {
            anyhow::bail!("Report file must differ from the input and output files");
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_derive_output_path() {
        assert_eq!(
            derive_output_path(Path::new("results/raw.csv")).unwrap(),
            PathBuf::from("results/cleaned-raw.csv")
        );
        assert_eq!(
            derive_output_path(Path::new("raw.csv")).unwrap(),
            PathBuf::from("cleaned-raw.csv")
        );
    }

    #[test]
    fn test_derive_output_path_without_file_name() {
        assert!(derive_output_path(Path::new("/")).is_err());
        assert!(derive_output_path(Path::new("results/..")).is_err());
    }

    #[test]
    fn test_validate_args_valid() {
        let args = ReshapeArgs {
            input_file: PathBuf::from("raw.csv"),
            ..Default::default()
        };

        assert!(validate_args(&args).is_ok());
    }

    #[test]
    fn test_validate_args_empty_input() {
        let args = ReshapeArgs::default();
        assert!(validate_args(&args).is_err());
    }

    #[test]
    fn test_validate_args_output_overwrites_input() {
        let args = ReshapeArgs {
            input_file: PathBuf::from("raw.csv"),
            output_file: Some(PathBuf::from("raw.csv")),
            ..Default::default()
        };

        assert!(validate_args(&args).is_err());
    }

    #[test]
    fn test_validate_args_report_collides_with_output() {
        let args = ReshapeArgs {
            input_file: PathBuf::from("raw.csv"),
            report_file: Some(PathBuf::from("cleaned-raw.csv")),
            ..Default::default()
        };

        assert!(validate_args(&args).is_err());
    }
}
