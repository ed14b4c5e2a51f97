//! Error types for the resampling pipeline.

use thiserror::Error;

/// Failure of a precondition in one of the estimator operations.
///
/// Every operation checks its inputs before doing any work, so an error
/// always means nothing was computed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BootstrapError {
    /// An operation that divides by `n` received no measurements.
    #[error("{operation} requires at least one paired measurement")]
    EmptyInput {
        /// Name of the operation that rejected the input.
        operation: &'static str,
    },

    /// A tuning parameter is out of range.
    #[error("invalid parameter `{name}`: {reason}")]
    InvalidParameter {
        /// Parameter name.
        name: &'static str,
        /// What was wrong with it.
        reason: String,
    },

    /// A record lacks a required score or holds an unusable value.
    #[error("malformed record at index {index}: {reason}")]
    MalformedRecord {
        /// Position of the record in the dataset.
        index: usize,
        /// What was wrong with it.
        reason: String,
    },

    /// Record text was not valid JSON.
    #[error("failed to parse records: {reason}")]
    Parse {
        /// Parser message.
        reason: String,
    },
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, BootstrapError>;
