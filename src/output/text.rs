//! Plain-text preview of a summary table for the terminal.

use crate::aggregator::{ConfigurationSummary, Metric, SummaryTable};
use crate::utils::config::{COL_LG_TREE_SIZE, COL_TREE_SIZE};

/// Render a short text summary
///
/// **Public** - printed by the `--summary` flag
///
/// Lists every configuration with its sample counts, then a
/// `mean_cycles` grid with one row per tree size.
pub fn render_text_summary(table: &SummaryTable, configurations: &[ConfigurationSummary]) -> String {
    let mut out = String::new();

    out.push_str(&format!(
        "Summary: {} tree sizes x {} configurations ({} columns)\n",
        table.row_count(),
        configurations.len(),
        table.column_count()
    ));

    if configurations.is_empty() {
        out.push_str("No trials found.\n");
        return out;
    }

    out.push_str("\nConfigurations:\n");
    for (i, config) in configurations.iter().enumerate() {
        out.push_str(&format!(
            "  {:>2}. {} ({} samples across {} sizes)\n",
            i + 1,
            config.name,
            config.total_samples,
            config.populated_sizes
        ));
    }

    let metric = Metric::MeanCycles.name();
    out.push_str(&format!("\n{:>12} {:>14}", COL_TREE_SIZE, COL_LG_TREE_SIZE));
    for i in 0..configurations.len() {
        out.push_str(&format!(" {:>14}", format!("#{} {}", i + 1, metric)));
    }
    out.push('\n');

    let lg_sizes = table
        .column(COL_LG_TREE_SIZE)
        .and_then(|c| c.data.as_integers())
        .unwrap_or(&[]);

    for (row, size) in table.tree_sizes().iter().enumerate() {
        let lg = lg_sizes.get(row).copied().unwrap_or_default();
        out.push_str(&format!("{:>12} {:>14}", size, lg));

        for config in configurations {
            let column = format!("{} {}", config.name, metric);
            match table.value(&column, row) {
                Some(v) => out.push_str(&format!(" {:>14.2}", v)),
                None => out.push_str(&format!(" {:>14}", "-")),
            }
        }
        out.push('\n');
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::aggregator::Reshaper;
    use crate::parser::{ConfigKey, TrialRecord};

    #[test]
    fn test_render_text_summary() {
        let trials = vec![
            TrialRecord {
                key: ConfigKey::new("A", "B", "C", "D"),
                tree_size: 3,
                avg_cycles: 100.0,
                avg_seconds: 0.001,
            },
            TrialRecord {
                key: ConfigKey::new("A", "B", "C", "D"),
                tree_size: 3,
                avg_cycles: 200.0,
                avg_seconds: 0.002,
            },
        ];
        let reshaper = Reshaper::from_trials(&trials);
        let text = render_text_summary(&reshaper.to_table().unwrap(), &reshaper.configuration_summaries());

        assert!(text.contains("1 tree sizes x 1 configurations (10 columns)"));
        assert!(text.contains("A B C D (2 samples across 1 sizes)"));
        assert!(text.contains("150.00"));
    }

    #[test]
    fn test_render_text_summary_empty() {
        let text = render_text_summary(&SummaryTable::default(), &[]);
        assert!(text.contains("No trials found."));
    }
}
