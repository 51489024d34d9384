//! Network-related error types.

use thiserror::Error;

/// Errors surfaced by network construction, `compute`, and model
/// persistence.
///
/// The first three variants are contract violations by the caller; none of
/// them is retryable.
#[derive(Debug, Error)]
pub enum NetworkError {
    #[error("shape mismatch: expected {expected} values, got {actual}")]
    ShapeMismatch { expected: usize, actual: usize },

    #[error("invalid topology: {message}")]
    InvalidTopology { message: String },

    #[error("label {label} out of range for {num_classes} output classes")]
    LabelOutOfRange { label: usize, num_classes: usize },

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),
}
