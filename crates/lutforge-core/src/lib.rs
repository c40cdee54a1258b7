//! # lutforge-core
//!
//! Core types for the lutforge grading pipeline.
//!
//! This crate provides the foundational pieces shared by every other
//! lutforge crate:
//!
//! - [`pixel`] - per-channel math: clamping, safe exponentiation, BT.709
//!   luma, hue/chroma helpers, 8-bit boundary conversion
//! - [`ColorGrade`] - the seam trait between parameter models and the
//!   consumers that drive them (LUT sampling, image application, preview)
//! - [`ImageBuf`] - owned RGBA float image buffer
//! - [`resize`] - aspect-preserving downscale for ingest
//!
//! # Design
//!
//! All color math happens on normalized `f32` channels in a fixed,
//! non-linear 0-1 space. No color management (ICC, wide gamut) is
//! performed anywhere in the pipeline. 8-bit data crosses the boundary
//! through [`pixel::u8_to_f32`] / [`pixel::f32_to_u8`].
//!
//! ## Feature Flags
//!
//! - `parallel` - rayon-parallel whole-image grading (enabled by default)

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod error;
pub mod grade;
pub mod image;
pub mod pixel;
pub mod resize;

pub use error::{CoreError, CoreResult};
pub use grade::ColorGrade;
pub use image::ImageBuf;
pub use pixel::{
    REC709_LUMA, REC709_LUMA_B, REC709_LUMA_G, REC709_LUMA_R, clamp01, luminance_rec709, safe_pow,
};
pub use resize::fit_within;
