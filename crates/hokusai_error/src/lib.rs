//! Error types for the Hokusai heatmap pipeline.
//!
//! This crate provides the foundation error types used throughout the Hokusai
//! workspace.
//!
//! # Error Hierarchy
//!
//! All errors follow the `ErrorKind` + wrapper struct pattern for clean error
//! handling:
//! - `*ErrorKind` enum defines specific error conditions
//! - `*Error` struct wraps the kind with source location tracking
//! - All errors use `#[track_caller]` for automatic location capture
//!
//! # Examples
//!
//! ```
//! use hokusai_error::{HokusaiResult, UploadError, UploadErrorKind};
//!
//! fn publish() -> HokusaiResult<String> {
//!     Err(UploadError::new(UploadErrorKind::Request("connection refused".into())))?
//! }
//!
//! match publish() {
//!     Ok(url) => println!("Hosted at {}", url),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod analysis;
mod broadcast;
mod capture;
mod config;
mod error;
mod upload;

pub use analysis::{AnalysisError, AnalysisErrorKind};
pub use broadcast::{BroadcastError, BroadcastErrorKind};
pub use capture::{CaptureError, CaptureErrorKind};
pub use config::ConfigError;
pub use error::{HokusaiError, HokusaiErrorKind, HokusaiResult};
pub use upload::{UploadError, UploadErrorKind};
