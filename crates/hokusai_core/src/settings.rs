//! Capture viewport and render-wait settings.

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Browser viewport configuration for the capture stage.
///
/// # Examples
///
/// ```
/// use hokusai_core::Viewport;
///
/// let viewport = Viewport::new(1280, 720, None);
/// assert_eq!(*viewport.width(), 1280);
/// ```
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Serialize,
    Deserialize,
    derive_getters::Getters,
    derive_new::new,
)]
pub struct Viewport {
    /// Viewport width in CSS pixels
    width: u32,
    /// Viewport height in CSS pixels
    height: u32,
    /// Device pixel scale, when pinned (e.g. `Some(1.0)` for high-resolution
    /// captures without scaling)
    #[serde(default)]
    device_scale_factor: Option<f64>,
}

/// Settings governing the capture stage's render wait.
///
/// The capture stage polls a DOM readiness probe every `poll_interval_ms` up
/// to `max_render_wait_secs`, then captures regardless. This replaces a hard
/// sleep: the heatmap page keeps rendering after its load event fires, so
/// readiness is observed rather than assumed.
#[derive(
    Debug, Clone, Copy, PartialEq, Serialize, Deserialize, derive_getters::Getters, derive_new::new,
)]
pub struct CaptureSettings {
    /// Viewport to render the page at
    viewport: Viewport,
    /// Upper bound on the render wait, in seconds
    max_render_wait_secs: u64,
    /// Interval between readiness probes, in milliseconds
    poll_interval_ms: u64,
}

impl CaptureSettings {
    /// Upper bound on the render wait.
    pub fn max_render_wait(&self) -> Duration {
        Duration::from_secs(self.max_render_wait_secs)
    }

    /// Interval between readiness probes.
    pub fn poll_interval(&self) -> Duration {
        Duration::from_millis(self.poll_interval_ms)
    }
}
