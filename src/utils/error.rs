//! Error types for the entire application.
//!
//! We use `thiserror` for library-style errors with custom types,
//! and `anyhow` for application-level error propagation in main.rs and commands.

use thiserror::Error;

/// Errors that can occur while loading the input table
#[derive(Error, Debug)]
pub enum LoadError {
    #[error("Failed to read input file: {0}")]
    ReadFailed(#[from] std::io::Error),

    #[error("Malformed CSV: {0}")]
    Csv(#[from] csv::Error),

    #[error("Input has no header row")]
    MissingHeader,
}

/// Errors that can occur while reshaping trial records
#[derive(Error, Debug, PartialEq)]
pub enum ReshapeError {
    #[error("Missing required column: {0}")]
    MissingColumn(String),

    #[error("Invalid value {value:?} in column '{column}' at row {row}")]
    InvalidValue {
        column: String,
        row: usize,
        value: String,
    },

    #[error("Negative tree size {value} at row {row}")]
    NegativeTreeSize { row: usize, value: i64 },

    #[error("Distinct configurations share the column label '{0}'")]
    DuplicateColumn(String),
}

/// Errors that can occur during file output
#[derive(Error, Debug)]
pub enum OutputError {
    #[error("Failed to write file: {0}")]
    WriteFailed(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Failed to serialize JSON: {0}")]
    SerializationFailed(#[from] serde_json::Error),

    #[error("Invalid output path: {0}")]
    InvalidPath(String),

    #[error("Malformed summary table: {0}")]
    Malformed(String),
}
