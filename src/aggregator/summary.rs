//! Wide-format summary table produced by the reshaper.

/// Values of one output column
#[derive(Debug, Clone, PartialEq)]
pub enum ColumnData {
    /// `Tree Size` and `lg(Tree Size)`
    Integer(Vec<u64>),

    /// Metric columns
    Float(Vec<f64>),
}

impl ColumnData {
    pub fn len(&self) -> usize {
        match self {
            ColumnData::Integer(v) => v.len(),
            ColumnData::Float(v) => v.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Cell rendered for CSV output
    pub fn format_cell(&self, row: usize) -> String {
        match self {
            ColumnData::Integer(v) => v[row].to_string(),
            ColumnData::Float(v) => format_float(v[row]),
        }
    }

    pub fn as_integers(&self) -> Option<&[u64]> {
        match self {
            ColumnData::Integer(v) => Some(v),
            ColumnData::Float(_) => None,
        }
    }

    pub fn as_floats(&self) -> Option<&[f64]> {
        match self {
            ColumnData::Float(v) => Some(v),
            ColumnData::Integer(_) => None,
        }
    }
}

/// A named output column
#[derive(Debug, Clone, PartialEq)]
pub struct Column {
    pub name: String,
    pub data: ColumnData,
}

impl Column {
    pub fn integer(name: impl Into<String>, values: Vec<u64>) -> Self {
        Self {
            name: name.into(),
            data: ColumnData::Integer(values),
        }
    }

    pub fn float(name: impl Into<String>, values: Vec<f64>) -> Self {
        Self {
            name: name.into(),
            data: ColumnData::Float(values),
        }
    }
}

/// One row per tree size, one column per (configuration, metric)
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SummaryTable {
    columns: Vec<Column>,
    configurations: Vec<String>,
}

impl SummaryTable {
    /// Build a table from columns in output order
    ///
    /// `configurations` lists the configuration labels in first-seen order.
    pub fn new(columns: Vec<Column>, configurations: Vec<String>) -> Self {
        Self {
            columns,
            configurations,
        }
    }

    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    pub fn headers(&self) -> Vec<&str> {
        self.columns.iter().map(|c| c.name.as_str()).collect()
    }

    pub fn column(&self, name: &str) -> Option<&Column> {
        self.columns.iter().find(|c| c.name == name)
    }

    pub fn column_count(&self) -> usize {
        self.columns.len()
    }

    pub fn row_count(&self) -> usize {
        self.columns.first().map(|c| c.data.len()).unwrap_or(0)
    }

    pub fn configurations(&self) -> &[String] {
        &self.configurations
    }

    /// The `Tree Size` column (always first)
    pub fn tree_sizes(&self) -> &[u64] {
        self.columns
            .first()
            .and_then(|c| c.data.as_integers())
            .unwrap_or(&[])
    }

    /// Float value of a metric column at a row
    pub fn value(&self, column: &str, row: usize) -> Option<f64> {
        self.column(column)?.data.as_floats()?.get(row).copied()
    }
}

/// Shortest round-trip formatting, with `inf`/`-inf`/`NaN` spelled out
///
/// Magnitudes below `1e-4` or from `1e16` up use exponent notation.
pub fn format_float(value: f64) -> String {
    if value.is_nan() {
        "NaN".to_string()
    } else if value == f64::INFINITY {
        "inf".to_string()
    } else if value == f64::NEG_INFINITY {
        "-inf".to_string()
    } else if value != 0.0 && !(1e-4..1e16).contains(&value.abs()) {
        format!("{:e}", value)
    } else {
        value.to_string()
    }
}
