//! JSON wire models for LINE broadcast messages.
//!
//! These models match the Messaging API's message object schemas. They are
//! separate from the domain [`BroadcastMessage`] type so the wire casing and
//! tagging stay a platform concern.

use hokusai_core::BroadcastMessage;
use serde::{Deserialize, Serialize};

/// A message object as the Messaging API expects it.
///
/// # Examples
///
/// ```
/// use hokusai_core::BroadcastMessage;
/// use hokusai_social::LineMessage;
///
/// let wire = LineMessage::from(&BroadcastMessage::image("https://img.example/x.png"));
/// let json = serde_json::to_value(&wire).unwrap();
/// assert_eq!(json["type"], "image");
/// assert_eq!(json["originalContentUrl"], json["previewImageUrl"]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum LineMessage {
    /// Image message: full-size and preview URLs
    #[serde(rename_all = "camelCase")]
    Image {
        /// URL of the full-size image
        original_content_url: String,
        /// URL of the preview image
        preview_image_url: String,
    },
    /// Text message
    Text {
        /// The message body
        text: String,
    },
}

impl From<&BroadcastMessage> for LineMessage {
    fn from(message: &BroadcastMessage) -> Self {
        match message {
            BroadcastMessage::Image {
                original_url,
                preview_url,
            } => LineMessage::Image {
                original_content_url: original_url.clone(),
                preview_image_url: preview_url.clone(),
            },
            BroadcastMessage::Text { body } => LineMessage::Text { text: body.clone() },
        }
    }
}

/// Broadcast request body: the ordered message sequence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BroadcastRequest {
    /// Messages delivered to every subscriber, in order
    pub messages: Vec<LineMessage>,
}

impl BroadcastRequest {
    /// Build the wire request from the domain message sequence.
    pub fn from_messages(messages: &[BroadcastMessage]) -> Self {
        Self {
            messages: messages.iter().map(LineMessage::from).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn image_message_wire_shape() {
        let wire = LineMessage::from(&BroadcastMessage::image("https://img.example/x.png"));
        assert_eq!(
            serde_json::to_value(&wire).unwrap(),
            json!({
                "type": "image",
                "originalContentUrl": "https://img.example/x.png",
                "previewImageUrl": "https://img.example/x.png",
            })
        );
    }

    #[test]
    fn text_message_wire_shape() {
        let wire = LineMessage::from(&BroadcastMessage::text("本日の分析"));
        assert_eq!(
            serde_json::to_value(&wire).unwrap(),
            json!({"type": "text", "text": "本日の分析"})
        );
    }

    #[test]
    fn request_preserves_message_order() {
        let request = BroadcastRequest::from_messages(&[
            BroadcastMessage::image("https://img.example/x.png"),
            BroadcastMessage::text("body"),
        ]);
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["messages"][0]["type"], "image");
        assert_eq!(json["messages"][1]["type"], "text");
    }
}
