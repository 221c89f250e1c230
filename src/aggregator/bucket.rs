//! Per (configuration, tree size) accumulation cells.

use super::stats::{log_or_neg_inf, mean, sample_std_dev};
use crate::utils::config::METRIC_NAMES;

/// One derived output metric
///
/// Declaration order is output column order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Metric {
    MeanCycles,
    MeanSeconds,
    MeanLogCycles,
    MeanLogSeconds,
    StdCycles,
    StdSeconds,
    StdLogCycles,
    StdLogSeconds,
}

impl Metric {
    /// All metrics, in output column order
    pub const ALL: [Metric; 8] = [
        Metric::MeanCycles,
        Metric::MeanSeconds,
        Metric::MeanLogCycles,
        Metric::MeanLogSeconds,
        Metric::StdCycles,
        Metric::StdSeconds,
        Metric::StdLogCycles,
        Metric::StdLogSeconds,
    ];

    /// Column suffix, e.g. `mean_log(cycles)`
    pub fn name(self) -> &'static str {
        METRIC_NAMES[self as usize]
    }
}

/// Derived statistics for one bucket. Zero until computed.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct BucketMetrics {
    pub mean_cycles: f64,
    pub mean_seconds: f64,
    pub mean_log_cycles: f64,
    pub mean_log_seconds: f64,
    pub std_cycles: f64,
    pub std_seconds: f64,
    pub std_log_cycles: f64,
    pub std_log_seconds: f64,
}

impl BucketMetrics {
    pub fn get(&self, metric: Metric) -> f64 {
        match metric {
            Metric::MeanCycles => self.mean_cycles,
            Metric::MeanSeconds => self.mean_seconds,
            Metric::MeanLogCycles => self.mean_log_cycles,
            Metric::MeanLogSeconds => self.mean_log_seconds,
            Metric::StdCycles => self.std_cycles,
            Metric::StdSeconds => self.std_seconds,
            Metric::StdLogCycles => self.std_log_cycles,
            Metric::StdLogSeconds => self.std_log_seconds,
        }
    }
}

/// Accumulated trials for one configuration at one tree size
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SampleBucket {
    /// Number of trials folded in
    pub samples: usize,

    pub cycles: Vec<f64>,
    pub seconds: Vec<f64>,

    pub metrics: BucketMetrics,
}

impl SampleBucket {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold one trial's measurements into the bucket
    pub fn push(&mut self, cycles: f64, seconds: f64) {
        self.samples += 1;
        self.cycles.push(cycles);
        self.seconds.push(seconds);
    }

    pub fn log_cycles(&self) -> Vec<f64> {
        self.cycles.iter().map(|&c| log_or_neg_inf(c)).collect()
    }

    pub fn log_seconds(&self) -> Vec<f64> {
        self.seconds.iter().map(|&s| log_or_neg_inf(s)).collect()
    }

    /// Compute the derived metrics from the raw samples
    ///
    /// Means need one sample and standard deviations need two; anything
    /// not computable stays at zero.
    pub fn finalize(&mut self) {
        let log_cycles = self.log_cycles();
        let log_seconds = self.log_seconds();
        let m = &mut self.metrics;

        *m = BucketMetrics::default();

        if self.samples >= 1 {
            m.mean_cycles = mean(&self.cycles).unwrap_or_default();
            m.mean_seconds = mean(&self.seconds).unwrap_or_default();
            m.mean_log_cycles = mean(&log_cycles).unwrap_or_default();
            m.mean_log_seconds = mean(&log_seconds).unwrap_or_default();
        }

        if self.samples >= 2 {
            m.std_cycles = sample_std_dev(&self.cycles).unwrap_or_default();
            m.std_seconds = sample_std_dev(&self.seconds).unwrap_or_default();
            m.std_log_cycles = sample_std_dev(&log_cycles).unwrap_or_default();
            m.std_log_seconds = sample_std_dev(&log_seconds).unwrap_or_default();
        }
    }

    /// Value of one derived metric (call `finalize` first)
    pub fn metric(&self, metric: Metric) -> f64 {
        self.metrics.get(metric)
    }
}
