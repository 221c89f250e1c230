//! Traversal Summary
//!
//! Post-processing for tree-traversal benchmark results. Repeated trials
//! are grouped by configuration (structure, storage, traversal type and
//! callback) and tree size, then reduced to means and standard deviations
//! of cycles and seconds, linear and logarithmic.
//!
//! This crate provides the core implementation for the
//! `traversal-summary` CLI tool.
//!
//! ## Getting Started
//!
//! ```bash
//! traversal-summary --input_file results/raw.csv
//! # writes results/cleaned-raw.csv
//! ```
//!
//! ## Library use
//!
//! ```ignore
//! use traversal_summary::aggregator::reshape_data;
//! use traversal_summary::output::write_summary;
//! use traversal_summary::parser::load_table;
//!
//! let source = load_table("raw.csv")?;
//! let table = reshape_data(&source)?;
//! write_summary(&table, "cleaned-raw.csv")?;
//! ```

pub mod aggregator;
pub mod commands;
pub mod output;
pub mod parser;
pub mod utils;
