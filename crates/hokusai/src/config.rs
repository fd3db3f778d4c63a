//! Operational configuration.
//!
//! Settings are loaded once at startup: bundled defaults (compiled in from
//! `hokusai.toml`) merged with an optional user file, user values taking
//! precedence. Credentials are not configuration; they come from the
//! environment (see [`crate::Credentials`]).

use config::{Config, File, FileFormat};
use hokusai_core::{CaptureSettings, HeatmapTarget, RunProfile, Viewport};
use hokusai_error::{ConfigError, HokusaiResult};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::debug;

/// Bundled default configuration.
const DEFAULT_CONFIG: &str = include_str!("../hokusai.toml");

/// Capture stage settings.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize, derive_getters::Getters)]
pub struct CaptureConfig {
    /// Upper bound on the render wait, in seconds
    max_render_wait_secs: u64,
    /// Interval between readiness probes, in milliseconds
    poll_interval_ms: u64,
    /// Viewport override; when absent, the run profile's viewport applies
    #[serde(default)]
    viewport: Option<Viewport>,
}

/// Image host settings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize, derive_getters::Getters)]
pub struct HostingConfig {
    /// Upload endpoint URL
    endpoint: String,
}

/// Analysis stage settings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize, derive_getters::Getters)]
pub struct AnalysisConfig {
    /// Base URL of the model REST API
    endpoint: String,
    /// Model identifier
    model: String,
}

/// Broadcast stage settings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize, derive_getters::Getters)]
pub struct BroadcastConfig {
    /// Messaging platform host
    host: String,
}

/// The full operational configuration for one run.
///
/// # Examples
///
/// ```
/// use hokusai::HokusaiConfig;
///
/// let config = HokusaiConfig::load(None).unwrap();
/// assert_eq!(config.heatmap().data_source(), "NI225");
/// ```
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize, derive_getters::Getters)]
pub struct HokusaiConfig {
    /// Heatmap target parameters
    #[serde(default)]
    heatmap: HeatmapTarget,
    /// Capture stage settings
    capture: CaptureConfig,
    /// Image host settings
    hosting: HostingConfig,
    /// Analysis stage settings
    analysis: AnalysisConfig,
    /// Broadcast stage settings
    broadcast: BroadcastConfig,
}

impl HokusaiConfig {
    /// Load configuration: bundled defaults, then the user file.
    ///
    /// With `user_path` set, that file must exist and parse. Otherwise a
    /// `hokusai.toml` in the working directory is merged when present.
    pub fn load(user_path: Option<&Path>) -> HokusaiResult<Self> {
        let mut builder =
            Config::builder().add_source(File::from_str(DEFAULT_CONFIG, FileFormat::Toml));
        match user_path {
            Some(path) => {
                debug!(path = %path.display(), "merging user configuration");
                builder = builder.add_source(File::from(path));
            }
            None => {
                builder = builder.add_source(File::with_name("hokusai").required(false));
            }
        }
        let config = builder
            .build()
            .map_err(|e| ConfigError::new(e.to_string()))?;
        config
            .try_deserialize()
            .map_err(|e| ConfigError::new(e.to_string()).into())
    }

    /// Resolve the capture settings for a run profile.
    ///
    /// A configured viewport override wins; otherwise the profile's default
    /// viewport applies.
    pub fn capture_settings(&self, profile: RunProfile) -> CaptureSettings {
        let viewport = self.capture.viewport.unwrap_or_else(|| profile.viewport());
        CaptureSettings::new(
            viewport,
            self.capture.max_render_wait_secs,
            self.capture.poll_interval_ms,
        )
    }
}
