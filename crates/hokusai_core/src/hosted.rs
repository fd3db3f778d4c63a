//! Public reference to a hosted snapshot.

use serde::{Deserialize, Serialize};

/// A publicly dereferenceable URL returned by the image host.
///
/// Created by the publish stage from a [`crate::Snapshot`]; consumed by the
/// broadcast stage, which uses the same URL for both the original and the
/// preview roles (the host does not generate a separate thumbnail).
///
/// # Examples
///
/// ```
/// use hokusai_core::HostedImage;
///
/// let hosted = HostedImage::new("https://i.ibb.co/abc123/heatmap.png".to_string());
/// assert!(hosted.url().starts_with("https://"));
/// ```
#[derive(
    Debug, Clone, PartialEq, Eq, Serialize, Deserialize, derive_getters::Getters, derive_new::new,
)]
pub struct HostedImage {
    /// The public URL of the uploaded image
    url: String,
}
