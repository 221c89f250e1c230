//! Group trials by configuration and tree size, then pivot to a wide table.
//!
//! Every configuration gets one bucket per entry of the global size axis,
//! so all configuration columns line up on the same rows even when a
//! configuration was never run at some size.

use super::bucket::{Metric, SampleBucket};
use super::extract::extract_trials;
use super::size_axis::SizeAxis;
use super::summary::{Column, SummaryTable};
use crate::parser::{ConfigKey, SourceTable, TrialRecord};
use crate::utils::config::{COL_LG_TREE_SIZE, COL_TREE_SIZE};
use crate::utils::error::ReshapeError;
use log::debug;
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};

/// Buckets for one configuration, indexed like the size axis
#[derive(Debug, Clone)]
struct ConfigGroup {
    key: ConfigKey,
    buckets: Vec<SampleBucket>,
}

/// Per-configuration totals for reporting
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConfigurationSummary {
    /// Configuration label (column name prefix)
    pub name: String,

    /// Trials folded in across all sizes
    pub total_samples: usize,

    /// Sizes with at least one trial
    pub populated_sizes: usize,
}

/// Owned grouping state for one pipeline run
#[derive(Debug, Clone, Default)]
pub struct Reshaper {
    axis: SizeAxis,
    index: HashMap<ConfigKey, usize>,
    groups: Vec<ConfigGroup>,
}

impl Reshaper {
    /// Fold all trials and compute every bucket's metrics
    pub fn from_trials(trials: &[TrialRecord]) -> Self {
        let axis = SizeAxis::from_trials(trials);
        debug!("Size axis has {} entries: {:?}", axis.len(), axis.sizes());

        let mut reshaper = Self {
            axis,
            index: HashMap::new(),
            groups: Vec::new(),
        };

        for trial in trials {
            reshaper.fold(trial);
        }

        for group in &mut reshaper.groups {
            group.buckets.iter_mut().for_each(SampleBucket::finalize);
        }

        debug!(
            "Grouped {} trials into {} configurations",
            trials.len(),
            reshaper.groups.len()
        );

        reshaper
    }

    /// Fold one trial into its (configuration, size) bucket
    ///
    /// **Private** - the axis is derived from the same trials, so the
    /// size lookup cannot miss.
    fn fold(&mut self, trial: &TrialRecord) {
        let Some(slot) = self.axis.index_of(trial.tree_size) else {
            return;
        };

        let group_idx = match self.index.get(&trial.key) {
            Some(&idx) => idx,
            None => {
                let idx = self.groups.len();
                self.groups.push(ConfigGroup {
                    key: trial.key.clone(),
                    buckets: vec![SampleBucket::new(); self.axis.len()],
                });
                self.index.insert(trial.key.clone(), idx);
                idx
            }
        };

        self.groups[group_idx].buckets[slot].push(trial.avg_cycles, trial.avg_seconds);
    }

    pub fn axis(&self) -> &SizeAxis {
        &self.axis
    }

    /// Configuration keys in first-seen order
    pub fn keys(&self) -> impl Iterator<Item = &ConfigKey> {
        self.groups.iter().map(|g| &g.key)
    }

    pub fn configuration_count(&self) -> usize {
        self.groups.len()
    }

    /// Bucket for a configuration at a tree size
    pub fn bucket(&self, key: &ConfigKey, tree_size: u64) -> Option<&SampleBucket> {
        let group = &self.groups[*self.index.get(key)?];
        group.buckets.get(self.axis.index_of(tree_size)?)
    }

    pub fn configuration_summaries(&self) -> Vec<ConfigurationSummary> {
        self.groups
            .iter()
            .map(|g| ConfigurationSummary {
                name: g.key.label(),
                total_samples: g.buckets.iter().map(|b| b.samples).sum(),
                populated_sizes: g.buckets.iter().filter(|b| b.samples > 0).count(),
            })
            .collect()
    }

    /// Emit the wide table
    ///
    /// Columns: `Tree Size`, `lg(Tree Size)`, then metric-major,
    /// configuration-minor.
    ///
    /// # Errors
    /// * `ReshapeError::DuplicateColumn` - Two distinct keys join to the
    ///   same label, e.g. `("a b", "c", ..)` and `("a", "b c", ..)`
    pub fn to_table(&self) -> Result<SummaryTable, ReshapeError> {
        let mut columns = Vec::with_capacity(2 + Metric::ALL.len() * self.groups.len());

        columns.push(Column::integer(COL_TREE_SIZE, self.axis.sizes().to_vec()));
        columns.push(Column::integer(
            COL_LG_TREE_SIZE,
            self.axis.lg_sizes().iter().map(|&lg| u64::from(lg)).collect(),
        ));

        let labels: Vec<String> = self.groups.iter().map(|g| g.key.label()).collect();

        let mut seen = HashSet::with_capacity(labels.len());
        if let Some(dup) = labels.iter().find(|&l| !seen.insert(l)) {
            return Err(ReshapeError::DuplicateColumn(dup.clone()));
        }

        for metric in Metric::ALL {
            for (group, label) in self.groups.iter().zip(&labels) {
                let values = group.buckets.iter().map(|b| b.metric(metric)).collect();
                columns.push(Column::float(format!("{} {}", label, metric.name()), values));
            }
        }

        Ok(SummaryTable::new(columns, labels))
    }
}

/// Reshape typed trials into the wide summary table
///
/// **Public** - core once trials are extracted
///
/// # Errors
/// * `ReshapeError::DuplicateColumn` - Ambiguous configuration labels
pub fn reshape_trials(trials: &[TrialRecord]) -> Result<SummaryTable, ReshapeError> {
    Reshaper::from_trials(trials).to_table()
}

/// Reshape a raw source table into the wide summary table
///
/// **Public** - main entry point for the aggregator stage
///
/// # Errors
/// Any `ReshapeError` from `extract_trials`
pub fn reshape_data(table: &SourceTable) -> Result<SummaryTable, ReshapeError> {
    let trials = extract_trials(table)?;
    reshape_trials(&trials)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn trial(key: (&str, &str, &str, &str), size: u64, cycles: f64, seconds: f64) -> TrialRecord {
        TrialRecord {
            key: ConfigKey::new(key.0, key.1, key.2, key.3),
            tree_size: size,
            avg_cycles: cycles,
            avg_seconds: seconds,
        }
    }

    #[test]
    fn test_first_seen_configuration_order() {
        let trials = vec![
            trial(("z", "b", "c", "d"), 3, 1.0, 1.0),
            trial(("a", "b", "c", "d"), 3, 1.0, 1.0),
            trial(("z", "b", "c", "d"), 7, 1.0, 1.0),
        ];

        let reshaper = Reshaper::from_trials(&trials);
        let labels: Vec<String> = reshaper.keys().map(|k| k.label()).collect();

        assert_eq!(labels, vec!["z b c d", "a b c d"]);
    }

    #[test]
    fn test_column_layout_is_metric_major() {
        let trials = vec![
            trial(("A", "B", "C", "D"), 3, 1.0, 1.0),
            trial(("E", "F", "G", "H"), 7, 1.0, 1.0),
        ];

        let table = reshape_trials(&trials).unwrap();
        let headers = table.headers();

        assert_eq!(headers.len(), 2 + 8 * 2);
        assert_eq!(
            &headers[..6],
            &[
                "Tree Size",
                "lg(Tree Size)",
                "A B C D mean_cycles",
                "E F G H mean_cycles",
                "A B C D mean_seconds",
                "E F G H mean_seconds",
            ]
        );
        assert_eq!(headers[17], "E F G H std_log(seconds)");
    }

    #[test]
    fn test_every_configuration_spans_the_axis() {
        let trials = vec![
            trial(("A", "B", "C", "D"), 3, 100.0, 0.001),
            trial(("A", "B", "C", "D"), 3, 200.0, 0.002),
            trial(("E", "F", "G", "H"), 7, 50.0, 0.5),
        ];

        let reshaper = Reshaper::from_trials(&trials);
        let key = ConfigKey::new("A", "B", "C", "D");

        assert_eq!(reshaper.bucket(&key, 3).unwrap().samples, 2);
        assert_eq!(reshaper.bucket(&key, 7).unwrap().samples, 0);
        assert!(reshaper.bucket(&key, 15).is_none());
    }

    #[test]
    fn test_configuration_summaries() {
        let trials = vec![
            trial(("A", "B", "C", "D"), 3, 1.0, 1.0),
            trial(("A", "B", "C", "D"), 3, 1.0, 1.0),
            trial(("A", "B", "C", "D"), 15, 1.0, 1.0),
            trial(("E", "F", "G", "H"), 7, 1.0, 1.0),
        ];

        let summaries = Reshaper::from_trials(&trials).configuration_summaries();

        assert_eq!(
            summaries,
            vec![
                ConfigurationSummary {
                    name: "A B C D".to_string(),
                    total_samples: 3,
                    populated_sizes: 2,
                },
                ConfigurationSummary {
                    name: "E F G H".to_string(),
                    total_samples: 1,
                    populated_sizes: 1,
                },
            ]
        );
    }

    #[test]
    fn test_colliding_labels_rejected() {
        let trials = vec![
            trial(("a b", "c", "d", "e"), 3, 100.0, 1.0),
            trial(("a", "b c", "d", "e"), 3, 900.0, 1.0),
        ];

        let reshaper = Reshaper::from_trials(&trials);
        assert_eq!(reshaper.configuration_count(), 2);

        assert_eq!(
            reshaper.to_table(),
            Err(ReshapeError::DuplicateColumn("a b c d e".to_string()))
        );
    }

    #[test]
    fn test_empty_input() {
        let table = reshape_trials(&[]).unwrap();

        assert_eq!(table.column_count(), 2);
        assert_eq!(table.row_count(), 0);
        assert!(table.configurations().is_empty());
    }
}
