//! CSV loader for raw benchmark results.
//!
//! Reads the header row and every record as strings. Column lookup and
//! numeric parsing happen later, in the aggregator.

use super::schema::SourceTable;
use crate::utils::config::{INPUT_COLUMN_HEADERS, REQUIRED_COLUMNS};
use crate::utils::error::LoadError;
use log::{debug, info};
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

/// Load a CSV file into a `SourceTable`
///
/// **Public** - main entry point for the loader stage
///
/// # Arguments
/// * `input_path` - Path to the raw results CSV
///
/// # Errors
/// * `LoadError::ReadFailed` - File cannot be opened
/// * `LoadError::Csv` - Malformed CSV (e.g. rows with the wrong field count)
/// * `LoadError::MissingHeader` - File is empty
pub fn load_table(input_path: impl AsRef<Path>) -> Result<SourceTable, LoadError> {
    let input_path = input_path.as_ref();

    info!("Loading trials from: {}", input_path.display());

    let file = File::open(input_path)?;
    let table = SourceTable::from_reader(BufReader::new(file))?;

    info!(
        "Loaded {} rows with {} columns",
        table.row_count(),
        table.headers.len()
    );

    Ok(table)
}

impl SourceTable {
    /// Read a table from any CSV source
    ///
    /// **Public** - used by `load_table` and by tests with in-memory data
    pub fn from_reader<R: Read>(reader: R) -> Result<Self, LoadError> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .from_reader(reader);

        let headers: Vec<String> = csv_reader
            .headers()?
            .iter()
            .map(|h| h.to_string())
            .collect();

        if headers.is_empty() || headers.iter().all(|h| h.is_empty()) {
            return Err(LoadError::MissingHeader);
        }

        let rows = csv_reader
            .into_records()
            .collect::<Result<Vec<_>, _>>()?;

        let table = SourceTable::new(headers, rows);
        log_schema_coverage(&table);

        Ok(table)
    }
}

/// Log which known columns the input carries
///
/// **Private** - diagnostics only, never fails
fn log_schema_coverage(table: &SourceTable) {
    let missing_info: Vec<&str> = INPUT_COLUMN_HEADERS
        .iter()
        .filter(|c| !REQUIRED_COLUMNS.contains(c))
        .filter(|c| table.column_index(c).is_none())
        .copied()
        .collect();

    if !missing_info.is_empty() {
        debug!("Informational columns not present: {}", missing_info.join(", "));
    }

    let extra = table
        .headers
        .iter()
        .filter(|h| !INPUT_COLUMN_HEADERS.contains(&h.as_str()))
        .count();

    if extra > 0 {
        debug!("Ignoring {} unrecognized columns", extra);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_from_reader_reads_headers_and_rows() {
        let csv = "Tree Size,Avg. Cycles\n3,100\n7,200\n";
        let table = SourceTable::from_reader(csv.as_bytes()).unwrap();

        assert_eq!(table.headers, vec!["Tree Size", "Avg. Cycles"]);
        assert_eq!(table.row_count(), 2);
        assert_eq!(&table.rows[1][0], "7");
    }

    #[test]
    fn test_from_reader_empty_input() {
        let result = SourceTable::from_reader("".as_bytes());
        assert!(matches!(result, Err(LoadError::MissingHeader)));
    }

    #[test]
    fn test_from_reader_ragged_rows() {
        let csv = "a,b,c\n1,2,3\n4,5\n";
        let result = SourceTable::from_reader(csv.as_bytes());
        assert!(matches!(result, Err(LoadError::Csv(_))));
    }

    #[test]
    fn test_load_table_missing_file() {
        let temp_dir = tempfile::tempdir().unwrap();
        let result = load_table(temp_dir.path().join("missing.csv"));
        assert!(matches!(result, Err(LoadError::ReadFailed(_))));
    }

    #[test]
    fn test_load_table_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "Tree Structure,Tree Size").unwrap();
        writeln!(file, "splay,15").unwrap();

        let table = load_table(file.path()).unwrap();
        assert_eq!(table.row_count(), 1);
        assert_eq!(table.column_index("Tree Size"), Some(1));
    }
}
