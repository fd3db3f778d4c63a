//! Message types for the Gemini `generateContent` REST protocol.
//!
//! This module defines the JSON structures for a unary content-generation
//! call with multimodal input (text plus an inline image blob) and the
//! Google Search tool enabled.
//!
//! # Example
//!
//! ```
//! use hokusai_models::{Content, GenerateContentRequest, Part, Tool};
//!
//! let request = GenerateContentRequest {
//!     contents: vec![Content::user(vec![
//!         Part::text("Describe this chart."),
//!         Part::inline_png("iVBORw0KGgo="),
//!     ])],
//!     tools: Some(vec![Tool::google_search()]),
//!     generation_config: None,
//! };
//!
//! let json = serde_json::to_string(&request).unwrap();
//! assert!(json.contains("\"googleSearch\":{}"));
//! ```

use serde::{Deserialize, Serialize};

//
// ─── REQUEST ────────────────────────────────────────────────────────────────
//

/// Unary content-generation request body.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateContentRequest {
    /// Conversation contents (one user turn for a single-shot call)
    pub contents: Vec<Content>,

    /// Tools available to the model
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tools: Option<Vec<Tool>>,

    /// Generation parameters
    #[serde(skip_serializing_if = "Option::is_none")]
    pub generation_config: Option<GenerationConfig>,
}

/// A single conversation turn.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Content {
    /// Role ("user", "model")
    pub role: String,

    /// Content parts
    pub parts: Vec<Part>,
}

impl Content {
    /// Create a user turn from parts.
    pub fn user(parts: Vec<Part>) -> Self {
        Self {
            role: "user".to_string(),
            parts,
        }
    }
}

/// Content part (text, inline data, or anything this pipeline does not
/// consume).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Part {
    /// Text content
    Text(TextPart),
    /// Inline data (images)
    InlineData(InlineDataPart),
    /// Part shapes this pipeline does not consume (e.g. executable code)
    Other(serde_json::Value),
}

/// Text content part.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TextPart {
    /// The text payload
    pub text: String,
}

/// Inline data content part.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InlineDataPart {
    /// The wrapped data blob
    pub inline_data: InlineData,
}

/// Inline data with MIME type.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InlineData {
    /// MIME type of the blob (e.g. "image/png")
    pub mime_type: String,
    /// Base64-encoded payload
    pub data: String,
}

/// Tool capability flag.
///
/// Serialized as `{"googleSearch": {}}` when search grounding is enabled.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Tool {
    /// Google Search grounding
    #[serde(skip_serializing_if = "Option::is_none")]
    pub google_search: Option<GoogleSearch>,
}

impl Tool {
    /// The Google Search grounding tool.
    pub fn google_search() -> Self {
        Self {
            google_search: Some(GoogleSearch {}),
        }
    }
}

/// Marker for the Google Search tool.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GoogleSearch {}

/// Generation configuration parameters.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct GenerationConfig {
    /// Temperature for sampling
    #[serde(skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f64>,

    /// Maximum tokens to generate
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_output_tokens: Option<i32>,
}

//
// ─── RESPONSE ───────────────────────────────────────────────────────────────
//

/// Unary content-generation response body.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateContentResponse {
    /// Generated candidates
    #[serde(default)]
    pub candidates: Vec<Candidate>,
}

/// A generated candidate.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Candidate {
    /// Candidate content
    #[serde(default)]
    pub content: Option<CandidateContent>,

    /// Why generation stopped
    #[serde(default)]
    pub finish_reason: Option<String>,
}

/// Candidate content parts.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CandidateContent {
    /// Content parts
    #[serde(default)]
    pub parts: Vec<Part>,
}

//
// ─── HELPER IMPLEMENTATIONS ─────────────────────────────────────────────────
//

impl Part {
    /// Create a text part.
    pub fn text(text: impl Into<String>) -> Self {
        Part::Text(TextPart { text: text.into() })
    }

    /// Create an inline PNG part from base64-encoded bytes.
    pub fn inline_png(data: impl Into<String>) -> Self {
        Part::InlineData(InlineDataPart {
            inline_data: InlineData {
                mime_type: "image/png".to_string(),
                data: data.into(),
            },
        })
    }

    /// Extract text from a part, if it contains text.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Part::Text(TextPart { text }) => Some(text),
            _ => None,
        }
    }
}

impl GenerateContentResponse {
    /// Concatenate the text parts of the first candidate, if any.
    pub fn text(&self) -> Option<String> {
        let candidate = self.candidates.first()?;
        let content = candidate.content.as_ref()?;
        let text = content
            .parts
            .iter()
            .filter_map(|part| part.as_text())
            .collect::<Vec<_>>()
            .join("");
        if text.is_empty() { None } else { Some(text) }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_serialization() {
        let request = GenerateContentRequest {
            contents: vec![Content::user(vec![
                Part::text("Summarize the day's movement."),
                Part::inline_png("aGVhdG1hcA=="),
            ])],
            tools: Some(vec![Tool::google_search()]),
            generation_config: None,
        };

        let json = serde_json::to_string(&request).unwrap();
        assert!(json.contains("\"role\":\"user\""));
        assert!(json.contains("\"text\":\"Summarize the day's movement.\""));
        assert!(json.contains("\"inlineData\":{\"mimeType\":\"image/png\",\"data\":\"aGVhdG1hcA==\"}"));
        assert!(json.contains("\"tools\":[{\"googleSearch\":{}}]"));
        assert!(!json.contains("generationConfig"));
    }

    #[test]
    fn test_response_text_extraction() {
        let json = r#"{
            "candidates": [{
                "content": {
                    "parts": [{"text": "日経平均は"}, {"text": "続伸した。"}],
                    "role": "model"
                },
                "finishReason": "STOP"
            }]
        }"#;

        let response: GenerateContentResponse = serde_json::from_str(json).unwrap();
        assert_eq!(response.text().unwrap(), "日経平均は続伸した。");
    }

    #[test]
    fn test_response_with_unconsumed_parts() {
        let json = r#"{
            "candidates": [{
                "content": {
                    "parts": [
                        {"executableCode": {"language": "PYTHON", "code": "1"}},
                        {"text": "summary"}
                    ]
                }
            }]
        }"#;

        let response: GenerateContentResponse = serde_json::from_str(json).unwrap();
        assert_eq!(response.text().unwrap(), "summary");
    }

    #[test]
    fn test_empty_response_has_no_text() {
        let response: GenerateContentResponse = serde_json::from_str("{}").unwrap();
        assert!(response.text().is_none());

        let json = r#"{"candidates": [{"finishReason": "SAFETY"}]}"#;
        let response: GenerateContentResponse = serde_json::from_str(json).unwrap();
        assert!(response.text().is_none());
    }
}
