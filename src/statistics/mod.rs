//! Statistical core of the paired bootstrap test.
//!
//! - Per-condition means and difference scores
//! - Copy-on-resample bootstrap of difference series
//! - Monte Carlo p-value estimation

mod aggregate;
mod bootstrap;
mod significance;

pub use aggregate::{average_baseline, average_experimental, difference_scores};
pub use bootstrap::{counter_rng_seed, resample, resample_into};
pub use significance::{estimate_p_value, estimate_p_value_seeded, run_monte_carlo, MonteCarloOutcome};
