//! # paired-bootstrap
//!
//! Non-parametric significance testing for paired measurements.
//!
//! Given items scored under a baseline and an experimental condition, this
//! crate estimates a one-sided p-value for "the experimental condition
//! scores higher" by bootstrap resampling of the per-item differences:
//!
//! 1. Reduce each pair to `experimental - baseline`
//! 2. For every Monte Carlo trial, perturb the differences and redraw `n`
//!    values with replacement
//! 3. Count the trials whose redrawn sum is strictly positive
//! 4. Report `1 - successes / trials`
//!
//! All randomness flows from an explicit seed, so results are reproducible,
//! and trials run in parallel when the `parallel` feature is enabled.
//!
//! ## Quick Start
//!
//! ```
//! use paired_bootstrap::{estimate_p_value, PairedMeasurement};
//!
//! let data: Vec<_> = [(0.0, 1.0), (0.0, 1.0), (0.0, 1.0), (1.0, 0.0), (0.0, 0.0)]
//!     .into_iter()
//!     .map(|(baseline, experimental)| PairedMeasurement::new(baseline, experimental))
//!     .collect();
//!
//! let p = estimate_p_value(&data, 10_000).unwrap();
//! assert!(p < 0.5);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

// Core modules
mod config;
mod error;
mod estimator;
mod result;
mod thread_pool;
mod types;

// Functional modules
pub mod data;
pub mod statistics;

// Re-exports for public API
pub use config::{Config, DEFAULT_RESAMPLES};
pub use data::{dataset_from_json, dataset_from_value};
pub use error::{BootstrapError, Result};
pub use estimator::ResamplingEstimator;
pub use result::SignificanceResult;
pub use statistics::{
    average_baseline, average_experimental, difference_scores, estimate_p_value,
    estimate_p_value_seeded, resample,
};
pub use types::{PairedMeasurement, ResampleMethod};
