// src/error.rs
//
// Error type shared by the transform, windowing and check modules.

use thiserror::Error;

/// Errors raised by the MDCT engine and the checks built on it
#[derive(Debug, Clone, PartialEq, Error)]
pub enum MdctError {
    /// Frame or coefficient count does not satisfy the transform's length rule
    #[error("invalid frame length {len}: must be a non-zero multiple of {required}")]
    InvalidFrameLength { len: usize, required: usize },

    /// Input contains NaN or infinite samples
    #[error("non-finite sample at index {index}")]
    NumericDegenerate { index: usize },

    /// Buffer handed to a planned transform has the wrong size
    #[error("length mismatch: expected {expected}, got {actual}")]
    LengthMismatch { expected: usize, actual: usize },

    /// Check configuration rejected by validation
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

pub type MdctResult<T> = Result<T, MdctError>;

/// Return the index of the first non-finite sample as an error
pub(crate) fn ensure_finite(samples: &[f64]) -> MdctResult<()> {
    match samples.iter().position(|s| !s.is_finite()) {
        Some(index) => Err(MdctError::NumericDegenerate { index }),
        None => Ok(()),
    }
}
