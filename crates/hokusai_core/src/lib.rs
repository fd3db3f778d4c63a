//! Core data types for the Hokusai heatmap pipeline.
//!
//! This crate provides the transient values threaded through a pipeline run:
//! the captured snapshot, the hosted image reference, the optional market
//! summary, and the broadcast messages built from them.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod hosted;
mod message;
mod profile;
mod settings;
mod snapshot;
mod summary;
mod target;

pub use hosted::HostedImage;
pub use message::BroadcastMessage;
pub use profile::{DateStamp, RunProfile, SNAPSHOT_PREFIX};
pub use settings::{CaptureSettings, Viewport};
pub use snapshot::Snapshot;
pub use summary::{MarketSummary, SUMMARY_HEADER};
pub use target::HeatmapTarget;
