//! Prompt-mapping error types.

use thiserror::Error;

/// Everything that can go wrong between a user prompt and a parameter
/// delta. None of these corrupt parameter state; the merge only runs on
/// a successfully validated reply.
#[derive(Debug, Error)]
pub enum PromptError {
    /// No API key supplied. Refused locally; no request is sent.
    #[error("missing API key: set one before generating")]
    MissingApiKey,

    /// A request from this client is already outstanding.
    #[error("a generation request is already in flight")]
    Busy,

    /// Connection-level failure (DNS, TLS, timeout, refused).
    #[error("transport error: {0}")]
    Transport(String),

    /// The endpoint answered with an error body or non-success status.
    #[error("endpoint error: {message}")]
    Api {
        /// Most specific message the endpoint provided.
        message: String,
    },

    /// Empty candidate list: the endpoint declined to answer
    /// (moderation or safety refusal).
    #[error("the endpoint returned no candidates (request may have been refused)")]
    Blocked,

    /// The reply carried no parseable JSON object.
    #[error("malformed reply: {0}")]
    Malformed(String),
}
