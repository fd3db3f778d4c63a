//! ImgBB upload client.

use super::UploadResponse;
use async_trait::async_trait;
use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use hokusai_core::{HostedImage, Snapshot};
use hokusai_error::{HokusaiResult, UploadError, UploadErrorKind};
use hokusai_interface::ImageHost;
use tracing::{info, instrument};

/// Client for the ImgBB upload endpoint.
///
/// The upload is a single form POST: the API key and the base64-encoded
/// image bytes as form fields. The key travels in the body; there is no
/// separate auth header.
///
/// # Example
/// ```no_run
/// use hokusai_hosting::ImgbbClient;
/// use hokusai_interface::ImageHost;
/// use hokusai_core::Snapshot;
///
/// # #[tokio::main]
/// # async fn main() -> hokusai_error::HokusaiResult<()> {
/// let client = ImgbbClient::new("https://api.imgbb.com/1/upload", "api-key");
/// let snapshot = Snapshot::new(vec![0x89, 0x50, 0x4E, 0x47], "heatmap.png".into());
/// let hosted = client.publish(&snapshot).await?;
/// println!("hosted at {}", hosted.url());
/// # Ok(())
/// # }
/// ```
pub struct ImgbbClient {
    http: reqwest::Client,
    endpoint: String,
    api_key: String,
}

impl std::fmt::Debug for ImgbbClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ImgbbClient")
            .field("endpoint", &self.endpoint)
            .finish_non_exhaustive()
    }
}

impl ImgbbClient {
    /// Create a new client for `endpoint` authenticating with `api_key`.
    pub fn new(endpoint: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            endpoint: endpoint.into(),
            api_key: api_key.into(),
        }
    }
}

#[async_trait]
impl ImageHost for ImgbbClient {
    #[instrument(skip(self, snapshot), fields(size = snapshot.bytes().len()))]
    async fn publish(&self, snapshot: &Snapshot) -> HokusaiResult<HostedImage> {
        let encoded = STANDARD.encode(snapshot.bytes());
        let params = [("key", self.api_key.as_str()), ("image", encoded.as_str())];

        let response = self
            .http
            .post(&self.endpoint)
            .form(&params)
            .send()
            .await
            .map_err(|e| UploadError::new(UploadErrorKind::Request(e.to_string())))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| UploadError::new(UploadErrorKind::Request(e.to_string())))?;

        if !status.is_success() {
            return Err(UploadError::new(UploadErrorKind::Status {
                status_code: status.as_u16(),
                message: body,
            })
            .into());
        }

        let parsed: UploadResponse = serde_json::from_str(&body)
            .map_err(|e| UploadError::new(UploadErrorKind::MalformedResponse(e.to_string())))?;

        let url = parsed.data().url().clone();
        info!(%url, "snapshot published");
        Ok(HostedImage::new(url))
    }
}
