//! Building datasets from record-shaped JSON.
//!
//! Records look like
//!
//! ```json
//! [{"question": "...", "answer": "...", "baselineScore": 0.0, "experimentalScore": 1.0}]
//! ```
//!
//! Only the two score fields are required.

use serde_json::Value;

use crate::error::{BootstrapError, Result};
use crate::types::PairedMeasurement;

const BASELINE_KEY: &str = "baselineScore";
const EXPERIMENTAL_KEY: &str = "experimentalScore";

/// Parse a JSON array of records.
///
/// # Errors
///
/// - [`BootstrapError::Parse`] if `json` is not valid JSON
/// - [`BootstrapError::MalformedRecord`] for the first bad record
pub fn dataset_from_json(json: &str) -> Result<Vec<PairedMeasurement>> {
    let value: Value = serde_json::from_str(json).map_err(|e| BootstrapError::Parse {
        reason: e.to_string(),
    })?;
    dataset_from_value(value)
}

/// Convert an already-parsed JSON array of records.
///
/// # Errors
///
/// [`BootstrapError::Parse`] if `value` is not an array,
/// [`BootstrapError::MalformedRecord`] for the first bad record.
pub fn dataset_from_value(value: Value) -> Result<Vec<PairedMeasurement>> {
    let Value::Array(records) = value else {
        return Err(BootstrapError::Parse {
            reason: "expected a JSON array of records".to_string(),
        });
    };

    records
        .into_iter()
        .enumerate()
        .map(|(index, record)| record_from_value(index, record))
        .collect()
}

/// Check that every score is a finite number.
///
/// # Errors
///
/// [`BootstrapError::MalformedRecord`] naming the first offending record.
pub fn validate_dataset(dataset: &[PairedMeasurement]) -> Result<()> {
    for (index, m) in dataset.iter().enumerate() {
        for (key, score) in [
            (BASELINE_KEY, m.baseline_score),
            (EXPERIMENTAL_KEY, m.experimental_score),
        ] {
            if !score.is_finite() {
                return Err(BootstrapError::MalformedRecord {
                    index,
                    reason: format!("`{key}` is not finite ({score})"),
                });
            }
        }
    }
    Ok(())
}

fn record_from_value(index: usize, record: Value) -> Result<PairedMeasurement> {
    if !record.is_object() {
        return Err(BootstrapError::MalformedRecord {
            index,
            reason: "record is not a JSON object".to_string(),
        });
    }
    serde_json::from_value(record).map_err(|e| BootstrapError::MalformedRecord {
        index,
        reason: e.to_string(),
    })
}
