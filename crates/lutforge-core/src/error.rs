//! Core error types.

use thiserror::Error;

/// Result type for core operations.
pub type CoreResult<T> = Result<T, CoreError>;

/// Errors from buffer construction and geometry.
#[derive(Debug, Error)]
pub enum CoreError {
    /// Invalid image dimensions.
    #[error("invalid dimensions: {0}")]
    InvalidDimensions(String),

    /// Buffer length does not match the declared geometry.
    #[error("buffer size mismatch: expected {expected}, got {actual}")]
    BufferSize {
        /// Expected element count.
        expected: usize,
        /// Actual element count.
        actual: usize,
    },
}
