//! Global tree-size axis shared by every configuration.

use crate::parser::TrialRecord;
use std::collections::BTreeSet;

/// Sorted distinct tree sizes observed anywhere in the input
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SizeAxis {
    sizes: Vec<u64>,
    lg_sizes: Vec<u32>,
}

impl SizeAxis {
    /// Build the axis from every trial, not per configuration
    pub fn from_trials(trials: &[TrialRecord]) -> Self {
        let sizes: BTreeSet<u64> = trials.iter().map(|t| t.tree_size).collect();
        Self::from_sizes(sizes)
    }

    pub fn from_sizes(sizes: impl IntoIterator<Item = u64>) -> Self {
        let sizes: Vec<u64> = sizes
            .into_iter()
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect();
        let lg_sizes = sizes.iter().map(|&n| lg_tree_size(n)).collect();

        Self { sizes, lg_sizes }
    }

    /// Axis position of a tree size
    pub fn index_of(&self, tree_size: u64) -> Option<usize> {
        self.sizes.binary_search(&tree_size).ok()
    }

    pub fn sizes(&self) -> &[u64] {
        &self.sizes
    }

    pub fn lg_sizes(&self) -> &[u32] {
        &self.lg_sizes
    }

    pub fn len(&self) -> usize {
        self.sizes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sizes.is_empty()
    }
}

/// `floor(log2(n + 1))`, computed exactly
pub fn lg_tree_size(tree_size: u64) -> u32 {
    (u128::from(tree_size) + 1).ilog2()
}
