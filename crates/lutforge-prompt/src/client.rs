//! The remote client.

use std::sync::atomic::{AtomicBool, Ordering};

use serde_json::{Map, Value};
use tracing::{debug, warn};

use crate::error::PromptError;
use crate::extract::extract_json;
use crate::wire::{Content, GenerateRequest, GenerateResponse};

/// Default generateContent-shaped endpoint.
pub const DEFAULT_ENDPOINT: &str =
    "https://generativelanguage.googleapis.com/v1beta/models/gemini-2.5-flash:generateContent";

/// Client for one text-generation endpoint.
///
/// Holds the endpoint URL and the caller-supplied opaque key. At most one
/// request per client is in flight at a time; a second call while one is
/// outstanding fails fast with [`PromptError::Busy`] instead of queueing
/// a duplicate for the same user gesture.
pub struct PromptClient {
    endpoint: String,
    api_key: String,
    in_flight: AtomicBool,
}

impl PromptClient {
    /// Creates a client for the default endpoint.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self::with_endpoint(DEFAULT_ENDPOINT, api_key)
    }

    /// Creates a client for a custom endpoint.
    pub fn with_endpoint(endpoint: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            api_key: api_key.into(),
            in_flight: AtomicBool::new(false),
        }
    }

    /// Sends one prompt and returns the validated JSON object from the
    /// reply.
    ///
    /// The caller provides the fixed system instruction (see
    /// [`crate::build_instruction`]). An empty API key refuses locally
    /// before any network I/O.
    pub fn generate(
        &self,
        user_prompt: &str,
        instruction: &str,
    ) -> Result<Map<String, Value>, PromptError> {
        if self.api_key.is_empty() {
            return Err(PromptError::MissingApiKey);
        }
        let _guard = self.begin()?;

        let request = GenerateRequest {
            contents: vec![Content::from_text(user_prompt)],
            system_instruction: Some(Content::from_text(instruction)),
        };

        debug!(endpoint = %self.endpoint, "sending generation request");
        let url = format!("{}?key={}", self.endpoint, self.api_key);
        let response = match ureq::post(&url).send_json(&request) {
            Ok(resp) => resp
                .into_json::<GenerateResponse>()
                .map_err(|e| PromptError::Malformed(format!("invalid response body: {e}")))?,
            Err(ureq::Error::Status(code, resp)) => {
                // Failure bodies usually carry a specific message; surface
                // it when present.
                let body = resp.into_json::<GenerateResponse>().ok();
                let message = body
                    .and_then(|b| b.error)
                    .map(|e| e.message)
                    .filter(|m| !m.is_empty())
                    .unwrap_or_else(|| format!("HTTP {code}"));
                warn!(%message, "generation request failed");
                return Err(PromptError::Api { message });
            }
            Err(ureq::Error::Transport(t)) => {
                return Err(PromptError::Transport(t.to_string()));
            }
        };

        if let Some(err) = response.error {
            return Err(PromptError::Api { message: err.message });
        }

        let text = response.first_text().ok_or(PromptError::Blocked)?;
        parse_reply(&text)
    }

    fn begin(&self) -> Result<InFlightGuard<'_>, PromptError> {
        if self.in_flight.swap(true, Ordering::AcqRel) {
            return Err(PromptError::Busy);
        }
        Ok(InFlightGuard { flag: &self.in_flight })
    }
}

/// Clears the in-flight flag when the request resolves or errors.
struct InFlightGuard<'a> {
    flag: &'a AtomicBool,
}

impl Drop for InFlightGuard<'_> {
    fn drop(&mut self) {
        self.flag.store(false, Ordering::Release);
    }
}

/// Extracts and validates the JSON object from reply text.
///
/// Strict parse-then-validate: the brace-scan fallback locates a
/// candidate substring, `serde_json` must accept it, and the top level
/// must be an object. Anything else is [`PromptError::Malformed`].
pub fn parse_reply(text: &str) -> Result<Map<String, Value>, PromptError> {
    let snippet = extract_json(text)
        .ok_or_else(|| PromptError::Malformed("no JSON object in reply".into()))?;
    let value: Value = serde_json::from_str(snippet)
        .map_err(|e| PromptError::Malformed(format!("reply is not valid JSON: {e}")))?;
    let Value::Object(map) = value else {
        return Err(PromptError::Malformed("expected a JSON object".into()));
    };
    Ok(map)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_key_refuses_without_network() {
        // Unroutable endpoint: if the key gate failed we would see a
        // transport error instead of MissingApiKey.
        let client = PromptClient::with_endpoint("http://203.0.113.1:1/v1:generateContent", "");
        match client.generate("moody", "instr") {
            Err(PromptError::MissingApiKey) => {}
            other => panic!("expected MissingApiKey, got {other:?}"),
        }
    }

    #[test]
    fn second_call_while_in_flight_is_busy() {
        let client = PromptClient::new("k");
        let guard = client.begin().expect("first begin");
        match client.begin() {
            Err(PromptError::Busy) => {}
            _ => panic!("expected Busy"),
        }
        drop(guard);
        assert!(client.begin().is_ok());
    }

    #[test]
    fn parse_reply_accepts_fenced_json() {
        let map = parse_reply("```json\n{\"exposure\": 0.5, \"note\": \"x\"}\n```").unwrap();
        assert_eq!(map["exposure"], 0.5);
    }

    #[test]
    fn parse_reply_rejects_non_objects() {
        assert!(matches!(parse_reply("[1, 2, 3]"), Err(PromptError::Malformed(_))));
        assert!(matches!(parse_reply("no braces"), Err(PromptError::Malformed(_))));
        assert!(matches!(parse_reply("{broken"), Err(PromptError::Malformed(_))));
    }
}
