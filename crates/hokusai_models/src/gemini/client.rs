//! Gemini analysis client.

use super::protocol::{Content, GenerateContentRequest, GenerateContentResponse, Part, Tool};
use super::prompt::MARKET_PROMPT;
use async_trait::async_trait;
use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use hokusai_core::{MarketSummary, Snapshot};
use hokusai_error::{AnalysisError, AnalysisErrorKind, HokusaiResult};
use hokusai_interface::MarketAnalyst;
use tracing::{info, instrument};

/// Default base URL of the Gemini REST API.
pub const GEMINI_ENDPOINT: &str = "https://generativelanguage.googleapis.com/v1beta";

/// Market analyst backed by the Gemini `generateContent` endpoint.
///
/// One unary call per run: the fixed instruction prompt plus the snapshot
/// PNG as an inline blob, with the Google Search tool enabled so the model
/// can ground the per-stock rationales in live articles.
///
/// # Example
/// ```no_run
/// use hokusai_models::{GEMINI_ENDPOINT, GeminiAnalyst};
/// use hokusai_interface::MarketAnalyst;
/// use hokusai_core::Snapshot;
///
/// # #[tokio::main]
/// # async fn main() -> hokusai_error::HokusaiResult<()> {
/// let analyst = GeminiAnalyst::new(GEMINI_ENDPOINT, "api-key", "gemini-2.5-flash");
/// let snapshot = Snapshot::new(vec![0x89, 0x50, 0x4E, 0x47], "heatmap.png".into());
/// let summary = analyst.analyze(&snapshot).await?;
/// println!("{}", summary.text());
/// # Ok(())
/// # }
/// ```
pub struct GeminiAnalyst {
    http: reqwest::Client,
    endpoint: String,
    api_key: String,
    model: String,
}

impl std::fmt::Debug for GeminiAnalyst {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GeminiAnalyst")
            .field("endpoint", &self.endpoint)
            .field("model", &self.model)
            .finish_non_exhaustive()
    }
}

impl GeminiAnalyst {
    /// Create a new analyst against `endpoint` using `model`.
    pub fn new(
        endpoint: impl Into<String>,
        api_key: impl Into<String>,
        model: impl Into<String>,
    ) -> Self {
        Self {
            http: reqwest::Client::new(),
            endpoint: endpoint.into(),
            api_key: api_key.into(),
            model: model.into(),
        }
    }

    /// Build the generation request for a snapshot.
    fn request_for(snapshot: &Snapshot) -> GenerateContentRequest {
        GenerateContentRequest {
            contents: vec![Content::user(vec![
                Part::text(MARKET_PROMPT),
                Part::inline_png(STANDARD.encode(snapshot.bytes())),
            ])],
            tools: Some(vec![Tool::google_search()]),
            generation_config: None,
        }
    }
}

#[async_trait]
impl MarketAnalyst for GeminiAnalyst {
    #[instrument(skip(self, snapshot), fields(model = %self.model))]
    async fn analyze(&self, snapshot: &Snapshot) -> HokusaiResult<MarketSummary> {
        let url = format!("{}/models/{}:generateContent", self.endpoint, self.model);
        let request = Self::request_for(snapshot);

        let response = self
            .http
            .post(&url)
            .header("x-goog-api-key", &self.api_key)
            .json(&request)
            .send()
            .await
            .map_err(|e| AnalysisError::new(AnalysisErrorKind::Request(e.to_string())))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| AnalysisError::new(AnalysisErrorKind::Request(e.to_string())))?;

        if !status.is_success() {
            return Err(AnalysisError::new(AnalysisErrorKind::Status {
                status_code: status.as_u16(),
                message: body,
            })
            .into());
        }

        let parsed: GenerateContentResponse = serde_json::from_str(&body)
            .map_err(|e| AnalysisError::new(AnalysisErrorKind::MalformedResponse(e.to_string())))?;

        let text = parsed
            .text()
            .ok_or_else(|| AnalysisError::new(AnalysisErrorKind::EmptyResponse))?;
        info!(chars = text.chars().count(), "analysis complete");
        Ok(MarketSummary::new(text))
    }
}
