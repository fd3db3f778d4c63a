//! Image hosting client for the Hokusai heatmap pipeline.
//!
//! The publish stage uploads the snapshot PNG to ImgBB and extracts the
//! public URL from the typed JSON response. Parsing is strict: a response
//! without the expected URL field fails the run before any broadcast
//! happens.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod imgbb;

pub use imgbb::{ImgbbClient, UploadData, UploadResponse};
