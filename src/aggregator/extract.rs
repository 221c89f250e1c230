//! Typed extraction of trial records from the raw source table.
//!
//! Required columns are resolved by name here, so a missing column
//! surfaces as a reshape failure rather than a load failure.

use crate::parser::{ConfigKey, SourceTable, TrialRecord};
use crate::utils::config::{
    COL_AVG_CYCLES, COL_AVG_SECONDS, COL_STORAGE, COL_STRUCTURE, COL_TRAVERSAL_CALLBACK,
    COL_TRAVERSAL_TYPE, COL_TREE_SIZE,
};
use crate::utils::error::ReshapeError;
use csv::StringRecord;
use log::{debug, warn};

/// Resolved positions of the required columns
#[derive(Debug, Clone, Copy)]
struct ColumnMap {
    structure: usize,
    storage: usize,
    traversal_type: usize,
    traversal_callback: usize,
    tree_size: usize,
    avg_cycles: usize,
    avg_seconds: usize,
}

impl ColumnMap {
    fn resolve(table: &SourceTable) -> Result<Self, ReshapeError> {
        let find = |name: &str| {
            table
                .column_index(name)
                .ok_or_else(|| ReshapeError::MissingColumn(name.to_string()))
        };

        Ok(Self {
            structure: find(COL_STRUCTURE)?,
            storage: find(COL_STORAGE)?,
            traversal_type: find(COL_TRAVERSAL_TYPE)?,
            traversal_callback: find(COL_TRAVERSAL_CALLBACK)?,
            tree_size: find(COL_TREE_SIZE)?,
            avg_cycles: find(COL_AVG_CYCLES)?,
            avg_seconds: find(COL_AVG_SECONDS)?,
        })
    }
}

/// Convert every row of the source table into a `TrialRecord`
///
/// **Public** - first step of `reshape_data`
///
/// Row numbers in errors are 1-based and count data rows only.
///
/// # Errors
/// * `ReshapeError::MissingColumn` - A required column is absent
/// * `ReshapeError::InvalidValue` - A numeric cell does not parse
/// * `ReshapeError::NegativeTreeSize` - `Tree Size` is below zero
pub fn extract_trials(table: &SourceTable) -> Result<Vec<TrialRecord>, ReshapeError> {
    let columns = ColumnMap::resolve(table)?;

    let trials = table
        .rows
        .iter()
        .enumerate()
        .map(|(i, record)| parse_row(record, i + 1, &columns))
        .collect::<Result<Vec<_>, _>>()?;

    let non_positive = trials
        .iter()
        .filter(|t| t.avg_cycles <= 0.0 || t.avg_seconds <= 0.0)
        .count();

    if non_positive > 0 {
        warn!(
            "{} trials have non-positive cycles or seconds; their logarithm is -inf",
            non_positive
        );
    }

    debug!("Extracted {} trial records", trials.len());

    Ok(trials)
}

/// Parse one record
///
/// **Private** - internal helper for extract_trials
fn parse_row(
    record: &StringRecord,
    row: usize,
    columns: &ColumnMap,
) -> Result<TrialRecord, ReshapeError> {
    let field = |idx: usize| record.get(idx).unwrap_or("");

    let key = ConfigKey::new(
        field(columns.structure),
        field(columns.storage),
        field(columns.traversal_type),
        field(columns.traversal_callback),
    );

    Ok(TrialRecord {
        key,
        tree_size: parse_tree_size(field(columns.tree_size), row)?,
        avg_cycles: parse_float(field(columns.avg_cycles), COL_AVG_CYCLES, row)?,
        avg_seconds: parse_float(field(columns.avg_seconds), COL_AVG_SECONDS, row)?,
    })
}

/// Parse a tree size, accepting integral floats such as `"15.0"`
///
/// Floats outside the integer range are rejected rather than saturated.
fn parse_tree_size(raw: &str, row: usize) -> Result<u64, ReshapeError> {
    let text = raw.trim();

    if let Ok(size) = text.parse::<u64>() {
        return Ok(size);
    }

    // "-0" parses here as 0 and falls through to the float path
    if let Ok(size) = text.parse::<i64>() {
        if size < 0 {
            return Err(ReshapeError::NegativeTreeSize { row, value: size });
        }
    }

    // 2^64 and -2^63 are exact in f64
    const U64_LIMIT: f64 = 18_446_744_073_709_551_616.0;
    const I64_FLOOR: f64 = -9_223_372_036_854_775_808.0;

    match text.parse::<f64>() {
        Ok(size) if size.is_finite() && size.fract() == 0.0 => {
            if size < 0.0 {
                if size < I64_FLOOR {
                    return Err(invalid(COL_TREE_SIZE, row, raw));
                }
                Err(ReshapeError::NegativeTreeSize {
                    row,
                    value: size as i64,
                })
            } else if size < U64_LIMIT {
                Ok(size as u64)
            } else {
                Err(invalid(COL_TREE_SIZE, row, raw))
            }
        }
        _ => Err(invalid(COL_TREE_SIZE, row, raw)),
    }
}

fn parse_float(raw: &str, column: &str, row: usize) -> Result<f64, ReshapeError> {
    raw.trim()
        .parse::<f64>()
        .map_err(|_| invalid(column, row, raw))
}

fn invalid(column: &str, row: usize, raw: &str) -> ReshapeError {
    ReshapeError::InvalidValue {
        column: column.to_string(),
        row,
        value: raw.to_string(),
    }
}
