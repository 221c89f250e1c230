//! Input loading and schema definitions.
//!
//! This module handles:
//! - Reading raw benchmark CSV files
//! - Defining trial records and configuration keys

pub mod schema;
pub mod table;

// Re-export main types
pub use schema::{ConfigKey, SourceTable, TrialRecord};
pub use table::load_table;
