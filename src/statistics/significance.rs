//! Monte Carlo significance estimation.
//!
//! Each trial runs two resampling stages over the shared difference series:
//!
//! 1. Perturb the series with the configured [`ResampleMethod`]
//! 2. Draw `n` values with replacement from the perturbed series
//!
//! A trial succeeds when the sum of its draws is strictly positive. The
//! p-value is the fraction of trials that did *not* succeed, i.e. the
//! empirical probability that a resampled study shows no positive effect.

use rand::{Rng, SeedableRng};
use rand_xoshiro::Xoshiro256PlusPlus;

use crate::data::validate_dataset;
use crate::error::{BootstrapError, Result};
use crate::types::{PairedMeasurement, ResampleMethod};

use super::aggregate::difference_scores;
use super::bootstrap::{counter_rng_seed, draw_with_replacement, resample_into};

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Below this many trials the p-value moves in steps coarser than 0.05.
const MIN_RESOLVING_RESAMPLES: usize = 20;

/// Raw outcome of a Monte Carlo run.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MonteCarloOutcome {
    /// Trials whose aggregate was strictly positive.
    pub successes: usize,
    /// Trials run.
    pub num_resamples: usize,
    /// Base seed the per-trial streams were derived from.
    pub base_seed: u64,
    /// `1 - successes / num_resamples`.
    pub p_value: f64,
}

/// Estimate the one-sided p-value that the experimental condition beats the baseline.
///
/// Draws a fresh base seed; use [`estimate_p_value_seeded`] for reproducible runs.
///
/// # Errors
///
/// - [`BootstrapError::EmptyInput`] if `dataset` is empty
/// - [`BootstrapError::InvalidParameter`] if `num_resamples` is zero
/// - [`BootstrapError::MalformedRecord`] if a score is not finite
pub fn estimate_p_value(dataset: &[PairedMeasurement], num_resamples: usize) -> Result<f64> {
    validate_dataset(dataset)?;
    let series = difference_scores(dataset)?;
    let outcome = run_monte_carlo(
        &series,
        num_resamples,
        ResampleMethod::default(),
        rand::rng().random(),
    )?;
    Ok(outcome.p_value)
}

/// Same as [`estimate_p_value`] with an explicit seed and sampling discipline.
///
/// The result depends only on the inputs, not on thread scheduling.
///
/// # Errors
///
/// Same as [`estimate_p_value`].
pub fn estimate_p_value_seeded(
    dataset: &[PairedMeasurement],
    num_resamples: usize,
    method: ResampleMethod,
    seed: u64,
) -> Result<f64> {
    validate_dataset(dataset)?;
    let series = difference_scores(dataset)?;
    Ok(run_monte_carlo(&series, num_resamples, method, seed)?.p_value)
}

/// Run `num_resamples` trials over a difference series.
///
/// Trial `t` seeds its own `Xoshiro256PlusPlus` from
/// `counter_rng_seed(base_seed, t)`, so the serial and parallel paths
/// produce identical counts.
///
/// # Errors
///
/// - [`BootstrapError::EmptyInput`] if `series` is empty
/// - [`BootstrapError::InvalidParameter`] if `num_resamples` is zero
pub fn run_monte_carlo(
    series: &[f64],
    num_resamples: usize,
    method: ResampleMethod,
    base_seed: u64,
) -> Result<MonteCarloOutcome> {
    if series.is_empty() {
        return Err(BootstrapError::EmptyInput {
            operation: "run_monte_carlo",
        });
    }
    if num_resamples == 0 {
        return Err(BootstrapError::InvalidParameter {
            name: "num_resamples",
            reason: "must be a positive integer".to_string(),
        });
    }

    if num_resamples < MIN_RESOLVING_RESAMPLES {
        tracing::warn!(
            num_resamples,
            "too few resamples for a p-value resolution of 0.05"
        );
    }
    if series.iter().all(|&d| d == 0.0) {
        tracing::warn!(
            n = series.len(),
            "every difference score is zero; p-value is 1.0"
        );
    }

    let n = series.len();

    #[cfg(feature = "parallel")]
    let successes: usize = crate::thread_pool::install(|| {
        (0..num_resamples)
            .into_par_iter()
            .map_init(
                || (vec![0.0; n], vec![0.0; n]),
                |(perturbed, draws), trial| {
                    usize::from(trial_succeeds(series, method, base_seed, trial, perturbed, draws))
                },
            )
            .sum()
    });

    #[cfg(not(feature = "parallel"))]
    let successes: usize = crate::thread_pool::install(|| {
        let mut perturbed = vec![0.0; n];
        let mut draws = vec![0.0; n];
        (0..num_resamples)
            .filter(|&trial| {
                trial_succeeds(series, method, base_seed, trial, &mut perturbed, &mut draws)
            })
            .count()
    });

    let p_value = 1.0 - successes as f64 / num_resamples as f64;
    tracing::debug!(n, num_resamples, successes, p_value, "monte carlo run complete");

    Ok(MonteCarloOutcome {
        successes,
        num_resamples,
        base_seed,
        p_value,
    })
}

/// One Monte Carlo trial. Scratch buffers are reused across trials.
#[inline]
fn trial_succeeds(
    series: &[f64],
    method: ResampleMethod,
    base_seed: u64,
    trial: usize,
    perturbed: &mut [f64],
    draws: &mut [f64],
) -> bool {
    let mut rng = Xoshiro256PlusPlus::seed_from_u64(counter_rng_seed(base_seed, trial as u64));

    resample_into(series, method, &mut rng, perturbed);
    draw_with_replacement(perturbed, &mut rng, draws);

    let trial_sum: f64 = draws.iter().sum();
    trial_sum > 0.0
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dataset(pairs: &[(f64, f64)]) -> Vec<PairedMeasurement> {
        pairs
            .iter()
            .map(|&(b, e)| PairedMeasurement::new(b, e))
            .collect()
    }

    #[test]
    fn test_constant_positive_effect() {
        let data = dataset(&[(0.0, 1.0); 20]);
        let p = estimate_p_value_seeded(&data, 10_000, ResampleMethod::WithReplacement, 42).unwrap();
        assert!(p <= 0.05, "p-value should be near zero, got {p}");
    }

    #[test]
    fn test_zero_differences_give_one() {
        let data = dataset(&[(0.5, 0.5), (1.0, 1.0), (0.0, 0.0)]);
        for method in [ResampleMethod::WithReplacement, ResampleMethod::Permutation] {
            let p = estimate_p_value_seeded(&data, 1_000, method, 3).unwrap();
            assert_eq!(p, 1.0);
        }
    }

    #[test]
    fn test_single_resample_is_binary() {
        let data = dataset(&[(0.0, 1.0), (1.0, 0.0), (0.0, 1.0)]);
        for seed in 0..20 {
            let p = estimate_p_value_seeded(&data, 1, ResampleMethod::WithReplacement, seed).unwrap();
            assert!(p == 0.0 || p == 1.0, "got fractional p-value {p}");
        }
    }

    #[test]
    fn test_p_value_in_unit_interval() {
        let data = dataset(&[(0.3, 0.1), (0.9, 0.2), (0.1, 0.8), (0.5, 0.5)]);
        for seed in 0..10 {
            let p = estimate_p_value_seeded(&data, 200, ResampleMethod::Permutation, seed).unwrap();
            assert!((0.0..=1.0).contains(&p));
        }
    }

    #[test]
    fn test_seeded_runs_are_deterministic() {
        let data = dataset(&[(0.0, 1.0), (0.0, 1.0), (0.0, 1.0), (1.0, 0.0), (0.0, 0.0)]);
        let a = estimate_p_value_seeded(&data, 2_000, ResampleMethod::WithReplacement, 42).unwrap();
        let b = estimate_p_value_seeded(&data, 2_000, ResampleMethod::WithReplacement, 42).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_outcome_counts_match_p_value() {
        let series = [1.0, -1.0, 2.0, 0.5];
        let outcome = run_monte_carlo(&series, 500, ResampleMethod::WithReplacement, 9).unwrap();
        assert_eq!(outcome.num_resamples, 500);
        assert_eq!(outcome.base_seed, 9);
        assert!(outcome.successes <= 500);
        let expected = 1.0 - outcome.successes as f64 / 500.0;
        assert!((outcome.p_value - expected).abs() < 1e-15);
    }

    #[test]
    fn test_series_is_not_mutated() {
        let series = vec![1.0, -2.0, 3.0, 0.0, -0.5];
        let snapshot = series.clone();
        run_monte_carlo(&series, 100, ResampleMethod::Permutation, 1).unwrap();
        assert_eq!(series, snapshot);
    }

    #[test]
    fn test_count_matches_sequential_trials() {
        let series = [1.0, -1.0, 0.5, 0.0, -0.25, 2.0];
        for method in [ResampleMethod::WithReplacement, ResampleMethod::Permutation] {
            let outcome = run_monte_carlo(&series, 3_000, method, 42).unwrap();

            let mut perturbed = vec![0.0; series.len()];
            let mut draws = vec![0.0; series.len()];
            let mut expected = 0;
            for trial in 0..3_000 {
                if trial_succeeds(&series, method, 42, trial, &mut perturbed, &mut draws) {
                    expected += 1;
                }
            }

            assert_eq!(outcome.successes, expected, "{method:?} count depends on scheduling");
        }
    }

    #[test]
    fn test_non_finite_score_is_rejected() {
        let data = dataset(&[(0.0, 1.0), (f64::NAN, 1.0), (0.0, 1.0)]);
        assert!(matches!(
            estimate_p_value(&data, 1_000),
            Err(BootstrapError::MalformedRecord { index: 1, .. })
        ));
        assert!(matches!(
            estimate_p_value_seeded(&data, 1_000, ResampleMethod::Permutation, 7),
            Err(BootstrapError::MalformedRecord { index: 1, .. })
        ));
    }

    #[test]
    fn test_precondition_errors() {
        assert!(matches!(
            estimate_p_value(&[], 10_000),
            Err(BootstrapError::EmptyInput { .. })
        ));

        let data = dataset(&[(0.0, 1.0)]);
        assert!(matches!(
            estimate_p_value(&data, 0),
            Err(BootstrapError::InvalidParameter {
                name: "num_resamples",
                ..
            })
        ));
    }
}
