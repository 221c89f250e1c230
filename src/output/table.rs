//! CSV writer and reader for the wide summary table.
//!
//! The header row is always written and there is no row index column.

use crate::aggregator::{Column, SummaryTable};
use crate::utils::error::OutputError;
use log::{debug, info};
use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

/// Number of leading integer columns (`Tree Size`, `lg(Tree Size)`)
const INTEGER_COLUMNS: usize = 2;

/// Write a summary table to a CSV file
///
/// **Public** - main entry point for the writer stage
///
/// # Arguments
/// * `table` - Summary table from the aggregator
/// * `output_path` - Destination CSV path
///
/// # Errors
/// * `OutputError::InvalidPath` - Empty path, directory, or parent cannot be created
/// * `OutputError::WriteFailed` - I/O error during write
/// * `OutputError::Csv` - CSV encoding error
pub fn write_summary(table: &SummaryTable, output_path: impl AsRef<Path>) -> Result<(), OutputError> {
    let output_path = output_path.as_ref();

    info!("Writing summary to: {}", output_path.display());

    validate_path(output_path)?;
    create_parent_dirs(output_path)?;

    let file = File::create(output_path).map_err(OutputError::WriteFailed)?;
    let mut writer = csv::Writer::from_writer(BufWriter::new(file));

    writer.write_record(table.headers())?;

    for row in 0..table.row_count() {
        writer.write_record(table.columns().iter().map(|c| c.data.format_cell(row)))?;
    }

    writer.flush()?;

    info!(
        "Summary written successfully ({} rows, {} columns, {} bytes)",
        table.row_count(),
        table.column_count(),
        calculate_file_size(output_path)
    );

    Ok(())
}

/// Read a summary table back from CSV
///
/// **Public** - used for verification and round-trip tests
///
/// The first two columns are parsed as integers and the rest as floats.
/// Configuration labels are not recoverable from headers alone, so the
/// returned table has an empty configuration list.
pub fn read_summary(input_path: impl AsRef<Path>) -> Result<SummaryTable, OutputError> {
    let input_path = input_path.as_ref();

    debug!("Reading summary from: {}", input_path.display());

    let file = File::open(input_path).map_err(OutputError::WriteFailed)?;
    let mut reader = csv::Reader::from_reader(file);

    let headers: Vec<String> = reader.headers()?.iter().map(|h| h.to_string()).collect();

    if headers.len() < INTEGER_COLUMNS {
        return Err(OutputError::Malformed(format!(
            "expected at least {} columns, found {}",
            INTEGER_COLUMNS,
            headers.len()
        )));
    }

    let mut integers: Vec<Vec<u64>> = vec![Vec::new(); INTEGER_COLUMNS];
    let mut floats: Vec<Vec<f64>> = vec![Vec::new(); headers.len() - INTEGER_COLUMNS];

    for (row, record) in reader.records().enumerate() {
        let record = record?;

        for (col, cell) in record.iter().enumerate() {
            let cell = cell.trim();
            if col < INTEGER_COLUMNS {
                let value = cell.parse::<u64>().map_err(|_| malformed(&headers[col], row, cell))?;
                integers[col].push(value);
            } else {
                let value = cell.parse::<f64>().map_err(|_| malformed(&headers[col], row, cell))?;
                floats[col - INTEGER_COLUMNS].push(value);
            }
        }
    }

    let mut columns = Vec::with_capacity(headers.len());
    let mut names = headers.into_iter();

    for values in integers {
        columns.push(Column::integer(names.next().unwrap_or_default(), values));
    }
    for values in floats {
        columns.push(Column::float(names.next().unwrap_or_default(), values));
    }

    Ok(SummaryTable::new(columns, Vec::new()))
}

fn malformed(column: &str, row: usize, cell: &str) -> OutputError {
    OutputError::Malformed(format!(
        "cannot parse {:?} in column '{}' at row {}",
        cell,
        column,
        row + 1
    ))
}

/// Validate that output path is writable
///
/// **Public** - shared by every writer in this module
pub fn validate_path(path: &Path) -> Result<(), OutputError> {
    if path.as_os_str().is_empty() {
        return Err(OutputError::InvalidPath("Path is empty".to_string()));
    }

    // Check if we're trying to overwrite a directory
    if path.is_dir() {
        return Err(OutputError::InvalidPath(format!(
            "Path is a directory: {}",
            path.display()
        )));
    }

    Ok(())
}

/// Create parent directories if needed
///
/// **Public** - shared by every writer in this module
pub fn create_parent_dirs(path: &Path) -> Result<(), OutputError> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            debug!("Creating parent directories: {}", parent.display());
            std::fs::create_dir_all(parent).map_err(|e| {
                OutputError::InvalidPath(format!(
                    "Cannot create directory {}: {}",
                    parent.display(),
                    e
                ))
            })?;
        }
    }

    Ok(())
}

/// Calculate file size in bytes
///
/// **Private** - internal utility
fn calculate_file_size(path: &Path) -> u64 {
    std::fs::metadata(path).map(|m| m.len()).unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::NamedTempFile;

    fn create_test_table() -> SummaryTable {
        SummaryTable::new(
            vec![
                Column::integer("Tree Size", vec![3, 7]),
                Column::integer("lg(Tree Size)", vec![2, 3]),
                Column::float("A B C D mean_cycles", vec![150.0, 0.0]),
                Column::float("A B C D mean_log(cycles)", vec![f64::NEG_INFINITY, 0.0]),
            ],
            vec!["A B C D".to_string()],
        )
    }

    #[test]
    fn test_write_summary_layout() {
        let temp_file = NamedTempFile::new().unwrap();
        write_summary(&create_test_table(), temp_file.path()).unwrap();

        let contents = std::fs::read_to_string(temp_file.path()).unwrap();
        let lines: Vec<&str> = contents.lines().collect();

        assert_eq!(
            lines,
            vec![
                "Tree Size,lg(Tree Size),A B C D mean_cycles,A B C D mean_log(cycles)",
                "3,2,150,-inf",
                "7,3,0,0",
            ]
        );
    }

    #[test]
    fn test_read_summary_rejects_bad_cell() {
        let temp_file = NamedTempFile::new().unwrap();
        std::fs::write(temp_file.path(), "Tree Size,lg(Tree Size),x\n3,2,abc\n").unwrap();

        let result = read_summary(temp_file.path());
        assert!(matches!(result, Err(OutputError::Malformed(_))));
    }

    #[test]
    fn test_validate_path_empty() {
        assert!(validate_path(Path::new("")).is_err());
    }

    #[test]
    fn test_validate_path_directory() {
        let temp_dir = tempfile::tempdir().unwrap();
        assert!(validate_path(temp_dir.path()).is_err());
    }
}
