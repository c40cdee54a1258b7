//! Wire types for the generateContent-shaped endpoint.
//!
//! Request: `{ contents: [{ parts: [{ text }] }], systemInstruction: ... }`.
//! Response: `{ candidates: [{ content: { parts: [{ text }] } }] }`, with
//! an `error` object on failure. Unknown fields on either side are
//! ignored; the contract this pipeline depends on is only "one candidate
//! whose parts contain text".

use serde::{Deserialize, Serialize};

/// A block of text parts.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Content {
    /// Ordered text parts.
    #[serde(default)]
    pub parts: Vec<Part>,
}

impl Content {
    /// Single-part content from a string.
    pub fn from_text(text: impl Into<String>) -> Self {
        Self { parts: vec![Part { text: text.into() }] }
    }
}

/// One text part.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Part {
    /// The text payload.
    #[serde(default)]
    pub text: String,
}

/// Request body for one generation call.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateRequest {
    /// User turn(s).
    pub contents: Vec<Content>,
    /// Fixed system instruction (parameter vocabulary and ranges).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub system_instruction: Option<Content>,
}

/// Response body.
#[derive(Debug, Clone, Deserialize, Default)]
pub struct GenerateResponse {
    /// Generated candidates; empty on refusal.
    #[serde(default)]
    pub candidates: Vec<Candidate>,
    /// Error object, present on failure bodies.
    #[serde(default)]
    pub error: Option<ApiError>,
}

impl GenerateResponse {
    /// Concatenated text of the first candidate, if any.
    pub fn first_text(&self) -> Option<String> {
        let candidate = self.candidates.first()?;
        let content = candidate.content.as_ref()?;
        if content.parts.is_empty() {
            return None;
        }
        Some(content.parts.iter().map(|p| p.text.as_str()).collect())
    }
}

/// One generated candidate.
#[derive(Debug, Clone, Deserialize, Default)]
pub struct Candidate {
    /// Generated content.
    #[serde(default)]
    pub content: Option<Content>,
}

/// Error object in a failure body.
#[derive(Debug, Clone, Deserialize, Default)]
pub struct ApiError {
    /// Human-readable message.
    #[serde(default)]
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_serializes_with_camel_case_instruction() {
        let req = GenerateRequest {
            contents: vec![Content::from_text("make it moody")],
            system_instruction: Some(Content::from_text("you are a colorist")),
        };
        let json = serde_json::to_value(&req).unwrap();
        assert_eq!(json["contents"][0]["parts"][0]["text"], "make it moody");
        assert!(json.get("systemInstruction").is_some());
    }

    #[test]
    fn instruction_is_omitted_when_absent() {
        let req = GenerateRequest { contents: vec![], system_instruction: None };
        let json = serde_json::to_value(&req).unwrap();
        assert!(json.get("systemInstruction").is_none());
    }

    #[test]
    fn response_tolerates_unknown_fields() {
        let body = r#"{
            "candidates": [{
                "content": {"parts": [{"text": "{\"exposure\": 1}"}], "role": "model"},
                "finishReason": "STOP"
            }],
            "usageMetadata": {"totalTokenCount": 12}
        }"#;
        let resp: GenerateResponse = serde_json::from_str(body).unwrap();
        assert_eq!(resp.first_text().unwrap(), "{\"exposure\": 1}");
    }

    #[test]
    fn empty_candidates_yield_no_text() {
        let resp: GenerateResponse = serde_json::from_str(r#"{"candidates": []}"#).unwrap();
        assert!(resp.first_text().is_none());
    }

    #[test]
    fn error_body_parses() {
        let resp: GenerateResponse =
            serde_json::from_str(r#"{"error": {"message": "API key not valid", "code": 400}}"#).unwrap();
        assert_eq!(resp.error.unwrap().message, "API key not valid");
    }
}
