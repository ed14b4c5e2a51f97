//! Per-condition means and difference scores.

use crate::error::{BootstrapError, Result};
use crate::types::PairedMeasurement;

fn mean_of<F>(dataset: &[PairedMeasurement], operation: &'static str, score: F) -> Result<f64>
where
    F: Fn(&PairedMeasurement) -> f64,
{
    if dataset.is_empty() {
        return Err(BootstrapError::EmptyInput { operation });
    }
    let sum: f64 = dataset.iter().map(score).sum();
    Ok(sum / dataset.len() as f64)
}

/// Mean of the baseline scores.
///
/// # Errors
///
/// Returns [`BootstrapError::EmptyInput`] if `dataset` is empty.
pub fn average_baseline(dataset: &[PairedMeasurement]) -> Result<f64> {
    mean_of(dataset, "average_baseline", |m| m.baseline_score)
}

/// Mean of the experimental scores.
///
/// # Errors
///
/// Returns [`BootstrapError::EmptyInput`] if `dataset` is empty.
pub fn average_experimental(dataset: &[PairedMeasurement]) -> Result<f64> {
    mean_of(dataset, "average_experimental", |m| m.experimental_score)
}

/// Reduce each pair to `experimental - baseline`, preserving order.
///
/// # Errors
///
/// Returns [`BootstrapError::EmptyInput`] if `dataset` is empty.
pub fn difference_scores(dataset: &[PairedMeasurement]) -> Result<Vec<f64>> {
    if dataset.is_empty() {
        return Err(BootstrapError::EmptyInput {
            operation: "difference_scores",
        });
    }
    Ok(dataset.iter().map(PairedMeasurement::difference).collect())
}
