//! Output writers for summary data.
//!
//! This module handles writing data to disk in various formats:
//! - Wide summary tables (CSV)
//! - Run reports (JSON)
//! - Text summaries

pub mod json;
pub mod table;
pub mod text;

// Re-export main functions
pub use json::{read_report, report_to_string, write_report, write_report_string, RunReport};
pub use table::{read_summary, validate_path, write_summary};
pub use text::render_text_summary;
