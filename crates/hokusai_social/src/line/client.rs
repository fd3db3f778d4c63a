//! LINE broadcast client.

use super::BroadcastRequest;
use async_trait::async_trait;
use hokusai_core::BroadcastMessage;
use hokusai_error::{BroadcastError, BroadcastErrorKind, HokusaiResult};
use hokusai_interface::Broadcaster;
use tracing::{info, instrument};

/// Default host of the LINE Messaging API.
pub const LINE_HOST: &str = "https://api.line.me";

/// Path of the broadcast endpoint.
const BROADCAST_PATH: &str = "/v2/bot/message/broadcast";

/// Client for the LINE Messaging API broadcast endpoint.
///
/// Submits the run's message sequence in one bearer-authenticated call
/// delivered to every subscriber of the channel.
///
/// # Example
/// ```no_run
/// use hokusai_core::BroadcastMessage;
/// use hokusai_interface::Broadcaster;
/// use hokusai_social::{LINE_HOST, LineClient};
///
/// # #[tokio::main]
/// # async fn main() -> hokusai_error::HokusaiResult<()> {
/// let client = LineClient::new(LINE_HOST, "channel-access-token");
/// client
///     .broadcast(&[BroadcastMessage::image("https://img.example/x.png")])
///     .await?;
/// # Ok(())
/// # }
/// ```
pub struct LineClient {
    http: reqwest::Client,
    host: String,
    token: String,
}

impl std::fmt::Debug for LineClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LineClient")
            .field("host", &self.host)
            .finish_non_exhaustive()
    }
}

impl LineClient {
    /// Create a new client for `host` authenticating with the channel access
    /// token.
    pub fn new(host: impl Into<String>, token: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            host: host.into(),
            token: token.into(),
        }
    }
}

#[async_trait]
impl Broadcaster for LineClient {
    #[instrument(skip(self, messages), fields(count = messages.len()))]
    async fn broadcast(&self, messages: &[BroadcastMessage]) -> HokusaiResult<()> {
        let url = format!("{}{BROADCAST_PATH}", self.host);
        let request = BroadcastRequest::from_messages(messages);

        let response = self
            .http
            .post(&url)
            .bearer_auth(&self.token)
            .json(&request)
            .send()
            .await
            .map_err(|e| BroadcastError::new(BroadcastErrorKind::Request(e.to_string())))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(BroadcastError::from_status(status.as_u16(), body).into());
        }

        info!(count = messages.len(), "broadcast delivered");
        Ok(())
    }
}
