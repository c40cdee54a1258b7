//! # lutforge-prompt
//!
//! The remote text-generation boundary: turn a free-text look description
//! ("bleak russian winter, crushed blacks, teal highlights") into a
//! grading-parameter delta.
//!
//! One request per user action: a fixed system instruction enumerating
//! every parameter name, range, and meaning (built from the schema's spec
//! table), plus the user's raw text. The reply is expected to contain a
//! single JSON object, possibly wrapped in prose or code fences; the
//! substring between the first `{` and the last `}` is the documented
//! fallback extraction.
//!
//! This crate stops at a validated `serde_json` object. Folding it into a
//! parameter set is `lutforge-grade`'s merge step, so external values
//! become state at exactly one place.
//!
//! # Failure taxonomy
//!
//! Missing credential refuses locally (no network I/O), transport/HTTP
//! failures, moderation refusals (empty candidate list), and malformed
//! replies each map to their own [`PromptError`] variant; callers surface
//! them all as one "generation failed" user message carrying the most
//! specific detail available.

pub mod client;
pub mod error;
pub mod extract;
pub mod instruction;
pub mod wire;

pub use client::PromptClient;
pub use error::PromptError;
pub use extract::extract_json;
pub use instruction::build_instruction;
