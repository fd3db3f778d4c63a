//! Chromium-backed heatmap capture.

use crate::{Settle, wait_until_settled};
use async_trait::async_trait;
use chromiumoxide::browser::{Browser, BrowserConfig};
use chromiumoxide::cdp::browser_protocol::page::CaptureScreenshotFormat;
use chromiumoxide::handler::viewport::Viewport as CdpViewport;
use chromiumoxide::page::{Page, ScreenshotParams};
use futures::StreamExt;
use hokusai_core::{CaptureSettings, HeatmapTarget, Snapshot};
use hokusai_error::{CaptureError, CaptureErrorKind, HokusaiResult};
use hokusai_interface::HeatmapCapture;
use std::path::Path;
use tracing::{info, instrument};

/// Readiness probe evaluated in the page: the heatmap has drawn once its
/// canvas exists with a non-zero area.
const READY_PROBE: &str =
    "(() => { const c = document.querySelector('canvas'); return !!c && c.width > 0 && c.height > 0; })()";

/// Heatmap capture backed by a headless Chromium instance.
///
/// Each capture launches an isolated browser, renders the target page at the
/// configured viewport, waits for the heatmap to settle, screenshots the
/// viewport as PNG, and releases the browser.
///
/// # Example
/// ```no_run
/// use hokusai_capture::ChromiumCapture;
/// use hokusai_core::{CaptureSettings, HeatmapTarget, RunProfile};
/// use hokusai_interface::HeatmapCapture;
/// use std::path::Path;
///
/// # #[tokio::main]
/// # async fn main() -> hokusai_error::HokusaiResult<()> {
/// let capture = ChromiumCapture::new();
/// let settings = CaptureSettings::new(RunProfile::Standard.viewport(), 15, 500);
/// let snapshot = capture
///     .capture(
///         &HeatmapTarget::default(),
///         &settings,
///         Path::new("nikkei_heatmap_2025-01-15.png"),
///     )
///     .await?;
/// println!("captured {} bytes", snapshot.bytes().len());
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, Copy, Default, derive_new::new)]
pub struct ChromiumCapture;

impl ChromiumCapture {
    /// Launch a headless browser at the configured viewport.
    fn browser_config(settings: &CaptureSettings) -> HokusaiResult<BrowserConfig> {
        let viewport = settings.viewport();
        let config = BrowserConfig::builder()
            .window_size(*viewport.width(), *viewport.height())
            .viewport(CdpViewport {
                width: *viewport.width(),
                height: *viewport.height(),
                device_scale_factor: *viewport.device_scale_factor(),
                ..CdpViewport::default()
            })
            .build()
            .map_err(|e| CaptureError::new(CaptureErrorKind::BrowserLaunch(e)))?;
        Ok(config)
    }

    /// Evaluate the readiness probe in the page.
    async fn probe(page: &Page) -> HokusaiResult<bool> {
        let ready = page
            .evaluate(READY_PROBE)
            .await
            .map_err(|e| CaptureError::new(CaptureErrorKind::Probe(e.to_string())))?
            .into_value::<bool>()
            .map_err(|e| CaptureError::new(CaptureErrorKind::Probe(e.to_string())))?;
        Ok(ready)
    }
}

#[async_trait]
impl HeatmapCapture for ChromiumCapture {
    #[instrument(skip(self, target, settings), fields(path = %path.display()))]
    async fn capture(
        &self,
        target: &HeatmapTarget,
        settings: &CaptureSettings,
        path: &Path,
    ) -> HokusaiResult<Snapshot> {
        let config = Self::browser_config(settings)?;
        let (mut browser, mut handler) = Browser::launch(config)
            .await
            .map_err(|e| CaptureError::new(CaptureErrorKind::BrowserLaunch(e.to_string())))?;

        // The handler drives the CDP connection; it runs until the browser
        // closes or the connection drops.
        let handler_task = tokio::spawn(async move {
            while let Some(event) = handler.next().await {
                if event.is_err() {
                    break;
                }
            }
        });

        let url = target.url();
        info!(%url, "navigating to heatmap");
        let page = browser
            .new_page(url.as_str())
            .await
            .map_err(|e| CaptureError::new(CaptureErrorKind::Navigation(e.to_string())))?;
        page.wait_for_navigation()
            .await
            .map_err(|e| CaptureError::new(CaptureErrorKind::Navigation(e.to_string())))?;

        let settle = wait_until_settled(
            || Self::probe(&page),
            settings.max_render_wait(),
            settings.poll_interval(),
        )
        .await?;
        match settle {
            Settle::Ready { polls, waited } => {
                info!(polls, waited_ms = waited.as_millis() as u64, "heatmap settled");
            }
            Settle::TimedOut { .. } => {}
        }

        let bytes = page
            .screenshot(
                ScreenshotParams::builder()
                    .format(CaptureScreenshotFormat::Png)
                    .build(),
            )
            .await
            .map_err(|e| CaptureError::new(CaptureErrorKind::Screenshot(e.to_string())))?;

        tokio::fs::write(path, &bytes)
            .await
            .map_err(|e| CaptureError::new(CaptureErrorKind::FileWrite(e.to_string())))?;
        info!(size = bytes.len(), "snapshot written");

        browser
            .close()
            .await
            .map_err(|e| CaptureError::new(CaptureErrorKind::Shutdown(e.to_string())))?;
        let _ = browser.wait().await;
        handler_task.abort();

        Ok(Snapshot::new(bytes, path.to_path_buf()))
    }
}
