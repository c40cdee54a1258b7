//! Format detection by file extension.

use std::path::Path;

use crate::error::{IoError, IoResult};

/// Supported raster formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    /// Portable Network Graphics.
    Png,
    /// JPEG/JFIF.
    Jpeg,
}

impl Format {
    /// Detects the format from a path's extension.
    ///
    /// Unknown or missing extensions are an input-validation error; the
    /// caller reports and aborts without touching prior state.
    pub fn from_path(path: &Path) -> IoResult<Self> {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .unwrap_or("")
            .to_ascii_lowercase();
        match ext.as_str() {
            "png" => Ok(Self::Png),
            "jpg" | "jpeg" => Ok(Self::Jpeg),
            "" => Err(IoError::UnsupportedFormat(format!(
                "no file extension: {}",
                path.display()
            ))),
            other => Err(IoError::UnsupportedFormat(format!(".{other}"))),
        }
    }
}
