//! JSON run report writer.
//!
//! The report records what a run consumed and produced, for bookkeeping
//! next to the summary CSV.

use super::table::{create_parent_dirs, validate_path};
use crate::aggregator::{ConfigurationSummary, Reshaper, SummaryTable};
use crate::utils::config::SCHEMA_VERSION;
use crate::utils::error::OutputError;
use log::{debug, info};
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// Top-level report structure written to JSON
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RunReport {
    /// Schema version for compatibility checking
    pub version: String,

    /// Raw results file that was read
    pub input_file: String,

    /// Summary CSV that was written
    pub output_file: String,

    /// Number of trial records folded
    pub trial_count: usize,

    /// Rows in the summary table (distinct tree sizes)
    pub row_count: usize,

    /// Columns in the summary table
    pub column_count: usize,

    /// Global tree-size axis
    pub tree_sizes: Vec<u64>,

    /// Per-configuration totals, in column order
    pub configurations: Vec<ConfigurationSummary>,

    /// Timestamp when the report was generated
    pub generated_at: String,
}

impl RunReport {
    /// Build a report for a finished reshape
    pub fn new(
        input_file: &Path,
        output_file: &Path,
        trial_count: usize,
        reshaper: &Reshaper,
        table: &SummaryTable,
    ) -> Self {
        Self {
            version: SCHEMA_VERSION.to_string(),
            input_file: input_file.display().to_string(),
            output_file: output_file.display().to_string(),
            trial_count,
            row_count: table.row_count(),
            column_count: table.column_count(),
            tree_sizes: table.tree_sizes().to_vec(),
            configurations: reshaper.configuration_summaries(),
            generated_at: chrono::Utc::now().to_rfc3339(),
        }
    }
}

/// Write a run report to a JSON file
///
/// **Public** - optional output of the reshape command
///
/// # Errors
/// * `OutputError::InvalidPath` - Path cannot be created or is invalid
/// * `OutputError::WriteFailed` - I/O error during write
/// * `OutputError::SerializationFailed` - JSON serialization error
pub fn write_report(report: &RunReport, output_path: impl AsRef<Path>) -> Result<(), OutputError> {
    let json = report_to_string(report)?;
    write_report_string(&json, output_path)
}

/// Serialize a run report to pretty JSON
///
/// **Public** - lets callers serialize before touching the filesystem
pub fn report_to_string(report: &RunReport) -> Result<String, OutputError> {
    serde_json::to_string_pretty(report).map_err(OutputError::SerializationFailed)
}

/// Write an already serialized report
///
/// **Public** - second half of `write_report`
pub fn write_report_string(json: &str, output_path: impl AsRef<Path>) -> Result<(), OutputError> {
    let output_path = output_path.as_ref();

    info!("Writing run report to: {}", output_path.display());

    validate_path(output_path)?;
    create_parent_dirs(output_path)?;

    let file = File::create(output_path).map_err(OutputError::WriteFailed)?;
    let mut writer = BufWriter::new(file);

    writer.write_all(json.as_bytes())?;
    writer.flush()?;

    Ok(())
}

/// Read a run report from a JSON file
///
/// **Public** - useful for validation and testing
pub fn read_report(input_path: impl AsRef<Path>) -> Result<RunReport, OutputError> {
    let input_path = input_path.as_ref();

    debug!("Reading run report from: {}", input_path.display());

    let file = File::open(input_path).map_err(OutputError::WriteFailed)?;
    let report: RunReport =
        serde_json::from_reader(file).map_err(OutputError::SerializationFailed)?;

    debug!("Report loaded: version {}, {} configurations", report.version, report.configurations.len());

    Ok(report)
}
