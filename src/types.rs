//! Core data types.

use serde::{Deserialize, Serialize};

/// One item scored under both conditions.
///
/// Only the two scores take part in the computation; `question` and
/// `answer` are descriptive and passed through untouched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PairedMeasurement {
    /// Optional item text.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub question: Option<String>,
    /// Optional reference answer.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub answer: Option<String>,
    /// Score under the baseline condition.
    pub baseline_score: f64,
    /// Score under the experimental condition.
    pub experimental_score: f64,
}

impl PairedMeasurement {
    /// Create a measurement from its two scores.
    pub fn new(baseline_score: f64, experimental_score: f64) -> Self {
        Self {
            question: None,
            answer: None,
            baseline_score,
            experimental_score,
        }
    }

    /// Attach the item's question text.
    pub fn with_question(mut self, question: impl Into<String>) -> Self {
        self.question = Some(question.into());
        self
    }

    /// Attach the item's answer text.
    pub fn with_answer(mut self, answer: impl Into<String>) -> Self {
        self.answer = Some(answer.into());
        self
    }

    /// Signed difference `experimental - baseline`.
    #[inline]
    pub fn difference(&self) -> f64 {
        self.experimental_score - self.baseline_score
    }
}

/// How the first stage of each Monte Carlo trial perturbs the difference series.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResampleMethod {
    /// Independent uniform draws with replacement (classic bootstrap).
    #[default]
    WithReplacement,
    /// Uniformly random reordering of the series (no replacement).
    Permutation,
}
