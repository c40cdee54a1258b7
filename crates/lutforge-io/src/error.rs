//! Error types for image I/O.

use std::io;
use thiserror::Error;

/// I/O operation error.
#[derive(Debug, Error)]
pub enum IoError {
    /// File I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Unsupported format or extension.
    #[error("unsupported format: {0}")]
    UnsupportedFormat(String),

    /// Source file exceeds the ingest byte cap.
    #[error("file too large: {actual} bytes (limit {limit})")]
    FileTooLarge {
        /// File size on disk.
        actual: u64,
        /// Configured cap.
        limit: u64,
    },

    /// Decoding error (corrupt or truncated image).
    #[error("decode error: {0}")]
    Decode(String),

    /// Encoding error.
    #[error("encode error: {0}")]
    Encode(String),

    /// Unsupported bit depth or channel layout.
    #[error("unsupported bit depth: {0}")]
    UnsupportedBitDepth(String),

    /// Decoded data is inconsistent with its own header.
    #[error("invalid image: {0}")]
    Invalid(String),
}

/// Result type for I/O operations.
pub type IoResult<T> = Result<T, IoError>;
