//! # lutforge-io
//!
//! Image ingestion and export.
//!
//! The ingestion boundary accepts PNG or JPEG files and yields an
//! [`ImageBuf`]. Three validation gates run before any pixel reaches the
//! pipeline, each mapping to its own error:
//!
//! 1. extension detection ([`Format::from_path`]) - unsupported types
//!    are refused up front
//! 2. a byte cap on the source file, checked before decode
//! 3. the decode itself - corrupt data becomes [`IoError::Decode`]
//!
//! Decoded images larger than the configured long-edge cap are downscaled
//! (aspect preserved) before they are returned, keeping preview and
//! whole-image grading interactive.

use std::path::Path;

use lutforge_core::{ImageBuf, fit_within};
use tracing::debug;

pub mod detect;
mod error;
pub mod jpeg;
pub mod png;

pub use detect::Format;
pub use error::{IoError, IoResult};

/// Default long-edge cap applied at ingest.
pub const MAX_EDGE_DEFAULT: u32 = 1500;

/// Default source-file byte cap.
pub const MAX_FILE_BYTES_DEFAULT: u64 = 64 * 1024 * 1024;

/// Loads an image with the default ingest limits.
pub fn load_image<P: AsRef<Path>>(path: P) -> IoResult<ImageBuf> {
    load_image_with_limits(path, MAX_EDGE_DEFAULT, MAX_FILE_BYTES_DEFAULT)
}

/// Loads an image with explicit limits.
///
/// `max_edge` of 0 disables the downscale; `max_bytes` of 0 disables the
/// byte cap.
pub fn load_image_with_limits<P: AsRef<Path>>(
    path: P,
    max_edge: u32,
    max_bytes: u64,
) -> IoResult<ImageBuf> {
    let path = path.as_ref();
    let format = Format::from_path(path)?;

    if max_bytes > 0 {
        let actual = std::fs::metadata(path)?.len();
        if actual > max_bytes {
            return Err(IoError::FileTooLarge { actual, limit: max_bytes });
        }
    }

    let image = match format {
        Format::Png => png::read(path)?,
        Format::Jpeg => jpeg::read(path)?,
    };

    match fit_within(&image, max_edge).map_err(|e| IoError::Invalid(e.to_string()))? {
        Some(smaller) => {
            debug!(
                src_w = image.width(),
                src_h = image.height(),
                dst_w = smaller.width(),
                dst_h = smaller.height(),
                "downscaled oversized source"
            );
            Ok(smaller)
        }
        None => Ok(image),
    }
}

/// Saves an image, dispatching on the output extension.
pub fn save_image<P: AsRef<Path>>(path: P, image: &ImageBuf) -> IoResult<()> {
    let path = path.as_ref();
    match Format::from_path(path)? {
        Format::Png => png::write(path, image),
        Format::Jpeg => jpeg::write(path, image),
    }
}
