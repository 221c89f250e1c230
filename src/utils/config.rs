//! Configuration and constants for the CLI.

/// Current run report schema version
pub const SCHEMA_VERSION: &str = "1.0.0";

/// Prefix added to the input file name when no output path is given
pub const OUTPUT_PREFIX: &str = "cleaned-";

// Identifier columns (together they form a configuration key)
pub const COL_STRUCTURE: &str = "Tree Structure";
pub const COL_STORAGE: &str = "Tree Storage";
pub const COL_TRAVERSAL_TYPE: &str = "Traversal Type";
pub const COL_TRAVERSAL_CALLBACK: &str = "Traversal Callback";

// Measured columns
pub const COL_TREE_SIZE: &str = "Tree Size";
pub const COL_AVG_CYCLES: &str = "Avg. Cycles";
pub const COL_AVG_SECONDS: &str = "Avg. Seconds";

/// Second output column, derived from `Tree Size`
pub const COL_LG_TREE_SIZE: &str = "lg(Tree Size)";

/// Columns the aggregator reads. Anything else in the input is ignored.
pub const REQUIRED_COLUMNS: &[&str] = &[
    COL_STRUCTURE,
    COL_STORAGE,
    COL_TRAVERSAL_TYPE,
    COL_TRAVERSAL_CALLBACK,
    COL_TREE_SIZE,
    COL_AVG_CYCLES,
    COL_AVG_SECONDS,
];

/// Full header written by the benchmark harness
pub const INPUT_COLUMN_HEADERS: &[&str] = &[
    COL_STRUCTURE,
    COL_STORAGE,
    COL_TRAVERSAL_TYPE,
    COL_TRAVERSAL_CALLBACK,
    COL_TREE_SIZE,
    "Tree Depth",
    "Leaf Nodes",
    "Leaf Density",
    "# of Samples",
    "Total Cycles",
    "Total Seconds",
    COL_AVG_CYCLES,
    COL_AVG_SECONDS,
];

/// Output metric suffixes, in column order
pub const METRIC_NAMES: &[&str] = &[
    "mean_cycles",
    "mean_seconds",
    "mean_log(cycles)",
    "mean_log(seconds)",
    "std_cycles",
    "std_seconds",
    "std_log(cycles)",
    "std_log(seconds)",
];
