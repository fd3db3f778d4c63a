//! The pipeline orchestrator.
//!
//! One pipeline, four ordered stages, each behind its seam trait. The
//! analysis stage is a slot that is either present or absent; everything
//! else is identical between the standard and annotated runs. There is no
//! retry and no partial success: the first stage error aborts the run.

use crate::{Credentials, HokusaiConfig};
use hokusai_capture::ChromiumCapture;
use hokusai_core::{
    BroadcastMessage, CaptureSettings, HeatmapTarget, RunProfile,
};
use hokusai_error::{ConfigError, HokusaiResult};
use hokusai_hosting::ImgbbClient;
use hokusai_interface::{Broadcaster, HeatmapCapture, ImageHost, MarketAnalyst};
use hokusai_models::GeminiAnalyst;
use hokusai_social::LineClient;
use std::path::{Path, PathBuf};
use tracing::{info, instrument};

/// Summary of a completed run.
#[derive(Debug, Clone, PartialEq, Eq, derive_getters::Getters, derive_new::new)]
pub struct RunReport {
    /// Where the snapshot PNG was written
    snapshot_path: PathBuf,
    /// Public URL of the published snapshot
    image_url: String,
    /// Whether the analysis stage ran
    analyzed: bool,
    /// Number of messages broadcast
    messages: usize,
}

/// The four-stage pipeline.
pub struct Pipeline {
    capture: Box<dyn HeatmapCapture>,
    host: Box<dyn ImageHost>,
    analyst: Option<Box<dyn MarketAnalyst>>,
    broadcaster: Box<dyn Broadcaster>,
}

impl Pipeline {
    /// Build a pipeline from stage implementations.
    ///
    /// Passing `None` for the analyst yields the standard variant: capture,
    /// publish, broadcast the image.
    pub fn new(
        capture: Box<dyn HeatmapCapture>,
        host: Box<dyn ImageHost>,
        analyst: Option<Box<dyn MarketAnalyst>>,
        broadcaster: Box<dyn Broadcaster>,
    ) -> Self {
        Self {
            capture,
            host,
            analyst,
            broadcaster,
        }
    }

    /// Assemble the production pipeline for `profile` from configuration and
    /// credentials.
    pub fn assemble(
        profile: RunProfile,
        config: &HokusaiConfig,
        credentials: &Credentials,
    ) -> HokusaiResult<Self> {
        let analyst: Option<Box<dyn MarketAnalyst>> = if profile.analyzes() {
            let api_key = credentials
                .gemini_api_key()
                .as_ref()
                .ok_or_else(|| ConfigError::missing_var("GEMINI_API_KEY"))?;
            Some(Box::new(GeminiAnalyst::new(
                config.analysis().endpoint(),
                api_key,
                config.analysis().model(),
            )))
        } else {
            None
        };

        Ok(Self::new(
            Box::new(ChromiumCapture::new()),
            Box::new(ImgbbClient::new(
                config.hosting().endpoint(),
                credentials.imgbb_api_key(),
            )),
            analyst,
            Box::new(LineClient::new(
                config.broadcast().host(),
                credentials.line_token(),
            )),
        ))
    }

    /// Execute one run: capture, publish, optionally analyze, broadcast.
    #[instrument(skip(self, target, settings), fields(path = %path.display()))]
    pub async fn run(
        &self,
        target: &HeatmapTarget,
        settings: &CaptureSettings,
        path: &Path,
    ) -> HokusaiResult<RunReport> {
        info!("capturing heatmap");
        let snapshot = self.capture.capture(target, settings, path).await?;

        info!("publishing snapshot");
        let hosted = self.host.publish(&snapshot).await?;

        let summary = match &self.analyst {
            Some(analyst) => {
                info!("analyzing snapshot");
                Some(analyst.analyze(&snapshot).await?)
            }
            None => None,
        };

        let messages = BroadcastMessage::sequence(&hosted, summary.as_ref());
        info!(count = messages.len(), "broadcasting");
        self.broadcaster.broadcast(&messages).await?;

        Ok(RunReport::new(
            snapshot.path().clone(),
            hosted.url().clone(),
            summary.is_some(),
            messages.len(),
        ))
    }
}
