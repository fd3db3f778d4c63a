//! Headless browser capture for the Hokusai heatmap pipeline.
//!
//! This crate drives a headless Chromium instance over CDP to render the
//! heatmap page and screenshot it. The render wait is observed, not assumed:
//! a DOM readiness probe is polled until the heatmap has drawn or a deadline
//! passes, at which point the capture proceeds anyway.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod browser;
mod readiness;

pub use browser::ChromiumCapture;
pub use readiness::{Settle, wait_until_settled};
