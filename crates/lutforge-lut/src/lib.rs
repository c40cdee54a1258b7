//! # lutforge-lut
//!
//! 3D LUT sampling and `.cube` serialization.
//!
//! A grade is a continuous function over the RGB unit cube; third-party
//! color tools consume it as a discrete cube of samples. This crate turns
//! any [`ColorGrade`](lutforge_core::ColorGrade) into a [`Lut3D`] via
//! [`sample::sample_grade`] and serializes it byte-exactly into the
//! Adobe/Resolve `.cube` text format via [`cube`].
//!
//! # Enumeration order
//!
//! `.cube` data lines are R-fastest: the innermost loop varies red, then
//! green, then blue. [`Lut3D`] stores samples in that same file order, so
//! serialization is a straight walk over the data.
//!
//! # Usage
//!
//! ```rust
//! use lutforge_lut::{cube, sample};
//! use lutforge_grade::GradeParams;
//!
//! let params = GradeParams { exposure: 0.5, ..Default::default() };
//! let lut = sample::sample_grade(&params, 32, "warm bump");
//! let text = cube::render_3d(&lut);
//! assert!(text.starts_with("TITLE \"warm bump\"\n"));
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod cube;
mod error;
mod lut3d;
pub mod sample;

pub use error::{LutError, LutResult};
pub use lut3d::Lut3D;
pub use sample::sample_grade;
