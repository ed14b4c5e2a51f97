//! Result of a significance analysis.

use serde::{Deserialize, Serialize};

use crate::types::ResampleMethod;

/// Complete result from [`ResamplingEstimator::analyze`](crate::ResamplingEstimator::analyze).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SignificanceResult {
    /// One-sided p-value that the experimental condition outperforms the baseline (0.0 to 1.0).
    pub p_value: f64,

    /// Trials whose resampled aggregate difference was strictly positive.
    pub successes: usize,

    /// Trials run.
    pub num_resamples: usize,

    /// Number of paired measurements.
    pub n_items: usize,

    /// Mean baseline score.
    pub mean_baseline: f64,

    /// Mean experimental score.
    pub mean_experimental: f64,

    /// Mean of the difference scores (`mean_experimental - mean_baseline`).
    pub mean_difference: f64,

    /// First-stage sampling discipline.
    pub method: ResampleMethod,

    /// Base seed of the random streams. Feed it back through
    /// `ResamplingEstimator::seed` to reproduce this result exactly.
    pub seed: u64,
}

impl SignificanceResult {
    /// Whether the p-value falls strictly below `alpha`.
    pub fn is_significant(&self, alpha: f64) -> bool {
        self.p_value < alpha
    }
}
