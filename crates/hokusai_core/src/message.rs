//! Broadcast message variants.

use crate::{HostedImage, MarketSummary};
use serde::{Deserialize, Serialize};

/// A message submitted to the messaging platform's broadcast endpoint.
///
/// A run produces an ordered sequence of one or two of these: the image
/// message, then the text message when analysis ran. Platform wire formats
/// live with the platform clients; this is the domain representation.
///
/// # Examples
///
/// ```
/// use hokusai_core::BroadcastMessage;
///
/// let image = BroadcastMessage::image("https://img.example/x.png");
/// match image {
///     BroadcastMessage::Image { original_url, preview_url } => {
///         assert_eq!(original_url, preview_url);
///     }
///     _ => unreachable!(),
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum BroadcastMessage {
    /// An image message carrying the hosted snapshot URL
    Image {
        /// URL of the full-size image
        original_url: String,
        /// URL of the preview image (same as the original)
        preview_url: String,
    },
    /// A text message carrying the rendered market summary
    Text {
        /// The message body
        body: String,
    },
}

impl BroadcastMessage {
    /// Build an image message, using the one hosted URL for both roles.
    pub fn image(url: impl Into<String>) -> Self {
        let url = url.into();
        Self::Image {
            original_url: url.clone(),
            preview_url: url,
        }
    }

    /// Build a text message.
    pub fn text(body: impl Into<String>) -> Self {
        Self::Text { body: body.into() }
    }

    /// Assemble the ordered message sequence for one run: the image message,
    /// then the summary text when analysis ran.
    pub fn sequence(hosted: &HostedImage, summary: Option<&MarketSummary>) -> Vec<Self> {
        let mut messages = vec![Self::image(hosted.url().clone())];
        if let Some(summary) = summary {
            messages.push(Self::text(summary.broadcast_body()));
        }
        messages
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::SUMMARY_HEADER;

    #[test]
    fn image_only_sequence() {
        let hosted = HostedImage::new("https://img.example/x.png".to_string());
        let messages = BroadcastMessage::sequence(&hosted, None);
        assert_eq!(
            messages,
            vec![BroadcastMessage::image("https://img.example/x.png")]
        );
    }

    #[test]
    fn annotated_sequence_orders_image_first() {
        let hosted = HostedImage::new("https://img.example/x.png".to_string());
        let summary = MarketSummary::new("summary text".to_string());
        let messages = BroadcastMessage::sequence(&hosted, Some(&summary));
        assert_eq!(messages.len(), 2);
        assert_eq!(
            messages[0],
            BroadcastMessage::image("https://img.example/x.png")
        );
        assert_eq!(
            messages[1],
            BroadcastMessage::text(format!("{SUMMARY_HEADER}\n\nsummary text"))
        );
    }
}
