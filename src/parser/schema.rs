//! Input data definitions.
//!
//! `SourceTable` is the raw tabular form as read from disk. `TrialRecord`
//! is one typed row, and `ConfigKey` groups rows that belong to the same
//! experiment variant.

use csv::StringRecord;
use std::fmt;

/// Raw input table: a header row plus untyped records
#[derive(Debug, Clone, Default)]
pub struct SourceTable {
    /// Column names, in file order
    pub headers: Vec<String>,

    /// Data rows (header excluded)
    pub rows: Vec<StringRecord>,
}

impl SourceTable {
    /// Create a table from headers and rows
    pub fn new(headers: Vec<String>, rows: Vec<StringRecord>) -> Self {
        Self { headers, rows }
    }

    /// Position of a column by exact name
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.headers.iter().position(|h| h == name)
    }

    /// Number of data rows
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// Identifies one logical experiment variant
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ConfigKey {
    pub structure: String,
    pub storage: String,
    pub traversal_type: String,
    pub traversal_callback: String,
}

impl ConfigKey {
    pub fn new(
        structure: impl Into<String>,
        storage: impl Into<String>,
        traversal_type: impl Into<String>,
        traversal_callback: impl Into<String>,
    ) -> Self {
        Self {
            structure: structure.into(),
            storage: storage.into(),
            traversal_type: traversal_type.into(),
            traversal_callback: traversal_callback.into(),
        }
    }

    /// Column name prefix: the four fields joined by single spaces
    pub fn label(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for ConfigKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {} {}",
            self.structure, self.storage, self.traversal_type, self.traversal_callback
        )
    }
}

/// One benchmark trial (a single input row)
#[derive(Debug, Clone, PartialEq)]
pub struct TrialRecord {
    pub key: ConfigKey,
    pub tree_size: u64,
    pub avg_cycles: f64,
    pub avg_seconds: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_key_label() {
        let key = ConfigKey::new("splay", "array", "dfs", "sum");
        assert_eq!(key.label(), "splay array dfs sum");
    }

    #[test]
    fn test_column_index() {
        let table = SourceTable::new(
            vec!["Tree Size".to_string(), "Avg. Cycles".to_string()],
            Vec::new(),
        );

        assert_eq!(table.column_index("Avg. Cycles"), Some(1));
        assert_eq!(table.column_index("Avg. Seconds"), None);
        assert!(table.is_empty());
    }
}
