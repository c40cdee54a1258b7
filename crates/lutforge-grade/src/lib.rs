//! # lutforge-grade
//!
//! Parameter schemas and per-pixel grade engines.
//!
//! Two closed parameter schemas exist, one per target look:
//!
//! - [`GradeParams`] - the cinematic profile: exposure, white balance,
//!   ASC-CDL lift/gamma/gain, contrast, saturation, split toning
//! - [`CameraParams`] - the camera profile: brightness, contrast, gamma,
//!   fade, shadow/highlight masks, posterize, warmth, saturation,
//!   vibrance, split toning, monochrome
//!
//! Both implement [`ColorGrade`], the pure per-pixel transform consumed by
//! the LUT sampler, whole-image application, and the preview loop. Every
//! knob has a neutral default; a schema with all knobs neutral is the
//! identity transform.
//!
//! The two stage orders are distinct and never interleaved - each engine
//! documents its own composition.
//!
//! # Merging external values
//!
//! [`merge::merge_over_defaults`] turns an untrusted JSON object (a remote
//! text-generation reply, a user parameter file) into a fully valid
//! schema: known keys are applied with range clamping, numeric-looking
//! strings are coerced, garbage falls back to the default, unknown keys
//! are dropped. It cannot fail and cannot produce a partially invalid set.

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod camera;
pub mod cinematic;
pub mod look;
pub mod merge;
pub mod schema;
mod stages;

pub use camera::CameraParams;
pub use cinematic::GradeParams;
pub use look::{Look, Profile};
pub use lutforge_core::ColorGrade;
pub use merge::{MergeReport, merge_over_defaults};
pub use schema::{FlagSpec, ParamSet, ParamSpec};
