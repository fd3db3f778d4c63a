//! Hokusai: a scheduled heatmap snapshot pipeline.
//!
//! One run captures a TradingView heatmap with a headless browser, publishes
//! the PNG to ImgBB, optionally derives a market summary from it via Gemini,
//! and broadcasts the result to a LINE channel. The stages run strictly in
//! order; any stage failure aborts the run.
//!
//! # Example
//!
//! ```no_run
//! use hokusai::{Credentials, HokusaiConfig, Pipeline};
//! use hokusai_core::RunProfile;
//! use std::path::Path;
//!
//! # #[tokio::main]
//! # async fn main() -> hokusai_error::HokusaiResult<()> {
//! let profile = RunProfile::Annotated;
//! let credentials = Credentials::from_env(profile)?;
//! let config = HokusaiConfig::load(None)?;
//!
//! let pipeline = Pipeline::assemble(profile, &config, &credentials)?;
//! let report = pipeline
//!     .run(
//!         config.heatmap(),
//!         &config.capture_settings(profile),
//!         Path::new("nikkei_heatmap_20250115.png"),
//!     )
//!     .await?;
//! println!("published {}", report.image_url());
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod config;
mod credentials;
mod pipeline;

pub use config::{
    AnalysisConfig, BroadcastConfig, CaptureConfig, HokusaiConfig, HostingConfig,
};
pub use credentials::Credentials;
pub use pipeline::{Pipeline, RunReport};
