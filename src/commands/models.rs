use std::path::PathBuf;

/// Arguments for the reshape command
///
/// **Public** - used by main.rs to construct from CLI args
#[derive(Debug, Clone, Default)]
pub struct ReshapeArgs {
    /// Raw results CSV
    pub input_file: PathBuf,

    /// Summary CSV destination (None = derived from the input name)
    pub output_file: Option<PathBuf>,

    /// Optional JSON run report destination
    pub report_file: Option<PathBuf>,

    /// Print text summary to stdout
    pub print_summary: bool,
}
