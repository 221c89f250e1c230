//! Aggregation of trial records into the wide summary table.
//!
//! This module transforms raw benchmark rows into:
//! - Typed trial records
//! - Per (configuration, tree size) sample buckets
//! - Mean and standard deviation metrics, linear and logarithmic
//! - A wide table with one column per (configuration, metric)

pub mod bucket;
pub mod extract;
pub mod reshape;
pub mod size_axis;
pub mod stats;
pub mod summary;

// Re-export main types and functions
pub use bucket::{BucketMetrics, Metric, SampleBucket};
pub use extract::extract_trials;
pub use reshape::{reshape_data, reshape_trials, ConfigurationSummary, Reshaper};
pub use size_axis::{lg_tree_size, SizeAxis};
pub use summary::{Column, ColumnData, SummaryTable};
