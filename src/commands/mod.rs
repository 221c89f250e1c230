//! CLI command implementations.
//!
//! Commands orchestrate the various library components to perform user tasks.

pub mod models;
pub mod reshape;

// Re-export main command functions
pub use models::ReshapeArgs;
pub use reshape::{derive_output_path, execute_reshape, validate_args};
