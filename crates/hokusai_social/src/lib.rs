//! Messaging platform integration for the Hokusai heatmap pipeline.
//!
//! The broadcast stage delivers the run's message set to every subscriber of
//! a LINE Messaging API channel in a single authenticated call.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod line;

pub use line::{BroadcastRequest, LINE_HOST, LineClient, LineMessage};
