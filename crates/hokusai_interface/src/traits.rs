//! Trait definitions for the pipeline stages.

use async_trait::async_trait;
use hokusai_core::{
    BroadcastMessage, CaptureSettings, HeatmapTarget, HostedImage, MarketSummary, Snapshot,
};
use hokusai_error::HokusaiResult;
use std::path::Path;

/// Capture stage: produce a PNG snapshot of the heatmap.
#[async_trait]
pub trait HeatmapCapture: Send + Sync {
    /// Render `target` at the configured viewport, wait for the page to
    /// settle, and write a PNG snapshot to `path`.
    async fn capture(
        &self,
        target: &HeatmapTarget,
        settings: &CaptureSettings,
        path: &Path,
    ) -> HokusaiResult<Snapshot>;
}

/// Publish stage: turn snapshot bytes into a public URL.
#[async_trait]
pub trait ImageHost: Send + Sync {
    /// Upload the snapshot and return its public reference.
    async fn publish(&self, snapshot: &Snapshot) -> HokusaiResult<HostedImage>;
}

/// Analysis stage: derive a market summary from the snapshot.
#[async_trait]
pub trait MarketAnalyst: Send + Sync {
    /// Generate a natural-language summary of the snapshot.
    async fn analyze(&self, snapshot: &Snapshot) -> HokusaiResult<MarketSummary>;
}

/// Broadcast stage: deliver one message set to all channel subscribers.
#[async_trait]
pub trait Broadcaster: Send + Sync {
    /// Submit the ordered message sequence in a single broadcast call.
    async fn broadcast(&self, messages: &[BroadcastMessage]) -> HokusaiResult<()>;
}
