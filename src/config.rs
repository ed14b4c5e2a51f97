//! Configuration for significance estimation.

use crate::types::ResampleMethod;

/// Default number of Monte Carlo trials.
pub const DEFAULT_RESAMPLES: usize = 10_000;

/// Configuration options for `ResamplingEstimator`.
#[derive(Debug, Clone)]
pub struct Config {
    /// Monte Carlo trials per estimate (default: 10,000).
    pub num_resamples: usize,

    /// Optional deterministic seed for the random streams.
    ///
    /// `None` draws a fresh base seed on every run.
    pub seed: Option<u64>,

    /// Sampling discipline of the first resampling stage (default: with replacement).
    pub method: ResampleMethod,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            num_resamples: DEFAULT_RESAMPLES,
            seed: None,
            method: ResampleMethod::WithReplacement,
        }
    }
}
