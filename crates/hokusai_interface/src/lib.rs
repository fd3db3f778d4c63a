//! Stage traits for the Hokusai heatmap pipeline.
//!
//! Each external handoff in the pipeline sits behind one of these seams, so
//! the orchestrator depends on capabilities rather than concrete clients,
//! and tests can substitute mocks for the browser and the network services.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod traits;

pub use traits::{Broadcaster, HeatmapCapture, ImageHost, MarketAnalyst};
