//! Main `ResamplingEstimator` entry point and builder.

use std::time::Instant;

use rand::Rng;

use crate::config::Config;
use crate::data::validate_dataset;
use crate::error::Result;
use crate::result::SignificanceResult;
use crate::statistics::{average_baseline, average_experimental, difference_scores, run_monte_carlo};
use crate::types::{PairedMeasurement, ResampleMethod};

/// Bootstrap significance test for paired measurements.
///
/// Use the builder pattern to configure and run the test.
///
/// # Example
///
/// ```
/// use paired_bootstrap::{PairedMeasurement, ResamplingEstimator};
///
/// let data = vec![
///     PairedMeasurement::new(0.0, 1.0),
///     PairedMeasurement::new(0.0, 1.0),
///     PairedMeasurement::new(1.0, 0.0),
/// ];
///
/// let result = ResamplingEstimator::new()
///     .resamples(5_000)
///     .seed(7)
///     .analyze(&data)
///     .unwrap();
///
/// assert!((0.0..=1.0).contains(&result.p_value));
/// ```
#[derive(Debug, Clone, Default)]
pub struct ResamplingEstimator {
    config: Config,
}

impl ResamplingEstimator {
    /// Create with default configuration (10,000 resamples, random seed).
    pub fn new() -> Self {
        Self {
            config: Config::default(),
        }
    }

    /// Create with a reduced trial count for quick checks (1,000 resamples).
    pub fn quick() -> Self {
        Self {
            config: Config {
                num_resamples: 1_000,
                ..Config::default()
            },
        }
    }

    /// Create with a high trial count for reporting (100,000 resamples).
    ///
    /// Monte Carlo error of the p-value shrinks with the square root of the
    /// trial count, so this is about 3x tighter than the default.
    pub fn thorough() -> Self {
        Self {
            config: Config {
                num_resamples: 100_000,
                ..Config::default()
            },
        }
    }

    /// Create from an explicit configuration.
    pub fn with_config(config: Config) -> Self {
        Self { config }
    }

    /// Set the number of Monte Carlo trials.
    pub fn resamples(mut self, n: usize) -> Self {
        self.config.num_resamples = n;
        self
    }

    /// Fix the base seed for reproducible results.
    pub fn seed(mut self, seed: u64) -> Self {
        self.config.seed = Some(seed);
        self
    }

    /// Set the first-stage sampling discipline.
    pub fn method(mut self, method: ResampleMethod) -> Self {
        self.config.method = method;
        self
    }

    /// Get the current configuration.
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Estimate only the p-value.
    ///
    /// # Errors
    ///
    /// See [`analyze`](Self::analyze).
    pub fn p_value(&self, dataset: &[PairedMeasurement]) -> Result<f64> {
        self.analyze(dataset).map(|r| r.p_value)
    }

    /// Run the full analysis: means, difference scores and Monte Carlo p-value.
    ///
    /// # Errors
    ///
    /// - [`BootstrapError::EmptyInput`](crate::BootstrapError::EmptyInput) if `dataset` is empty
    /// - [`BootstrapError::InvalidParameter`](crate::BootstrapError::InvalidParameter) if the resample count is zero
    /// - [`BootstrapError::MalformedRecord`](crate::BootstrapError::MalformedRecord) if a score is not finite
    pub fn analyze(&self, dataset: &[PairedMeasurement]) -> Result<SignificanceResult> {
        let start = Instant::now();

        validate_dataset(dataset)?;
        let series = difference_scores(dataset)?;
        let mean_baseline = average_baseline(dataset)?;
        let mean_experimental = average_experimental(dataset)?;

        let seed = self.config.seed.unwrap_or_else(|| rand::rng().random());
        tracing::debug!(
            n_items = dataset.len(),
            num_resamples = self.config.num_resamples,
            method = ?self.config.method,
            seed,
            "starting bootstrap significance estimate"
        );

        let outcome = run_monte_carlo(&series, self.config.num_resamples, self.config.method, seed)?;

        tracing::debug!(
            p_value = outcome.p_value,
            elapsed_ms = start.elapsed().as_millis() as u64,
            "bootstrap significance estimate finished"
        );

        Ok(SignificanceResult {
            p_value: outcome.p_value,
            successes: outcome.successes,
            num_resamples: outcome.num_resamples,
            n_items: dataset.len(),
            mean_baseline,
            mean_experimental,
            mean_difference: series.iter().sum::<f64>() / series.len() as f64,
            method: self.config.method,
            seed: outcome.base_seed,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::BootstrapError;

    #[test]
    fn test_presets() {
        assert_eq!(ResamplingEstimator::new().config().num_resamples, 10_000);
        assert_eq!(ResamplingEstimator::quick().config().num_resamples, 1_000);
        assert_eq!(ResamplingEstimator::thorough().config().num_resamples, 100_000);
        assert_eq!(ResamplingEstimator::new().config().seed, None);
    }

    #[test]
    fn test_builder_setters() {
        let estimator = ResamplingEstimator::quick()
            .resamples(250)
            .seed(11)
            .method(ResampleMethod::Permutation);

        let config = estimator.config();
        assert_eq!(config.num_resamples, 250);
        assert_eq!(config.seed, Some(11));
        assert_eq!(config.method, ResampleMethod::Permutation);
    }

    #[test]
    fn test_analyze_reports_diagnostics() {
        let data = vec![
            PairedMeasurement::new(0.0, 1.0),
            PairedMeasurement::new(0.5, 1.0),
            PairedMeasurement::new(1.0, 0.5),
            PairedMeasurement::new(0.0, 0.0),
        ];

        let result = ResamplingEstimator::new().resamples(400).seed(5).analyze(&data).unwrap();

        assert_eq!(result.n_items, 4);
        assert_eq!(result.num_resamples, 400);
        assert_eq!(result.seed, 5);
        assert!((result.mean_baseline - 0.375).abs() < 1e-12);
        assert!((result.mean_experimental - 0.625).abs() < 1e-12);
        assert!((result.mean_difference - 0.25).abs() < 1e-12);
    }

    #[test]
    fn test_unseeded_result_is_reproducible_from_its_seed() {
        let data = vec![
            PairedMeasurement::new(0.0, 1.0),
            PairedMeasurement::new(1.0, 0.0),
            PairedMeasurement::new(0.0, 1.0),
        ];

        let first = ResamplingEstimator::new().resamples(300).analyze(&data).unwrap();
        let replay = ResamplingEstimator::new()
            .resamples(300)
            .seed(first.seed)
            .analyze(&data)
            .unwrap();

        assert_eq!(first, replay);
    }

    #[test]
    fn test_rejects_non_finite_scores() {
        let data = vec![PairedMeasurement::new(0.0, f64::INFINITY)];
        assert!(matches!(
            ResamplingEstimator::quick().p_value(&data),
            Err(BootstrapError::MalformedRecord { index: 0, .. })
        ));
    }

    #[test]
    fn test_rejects_zero_resamples() {
        let data = vec![PairedMeasurement::new(0.0, 1.0)];
        assert!(matches!(
            ResamplingEstimator::new().resamples(0).p_value(&data),
            Err(BootstrapError::InvalidParameter { .. })
        ));
    }
}
