//! ImgBB upload integration.

mod client;
mod models;

pub use client::ImgbbClient;
pub use models::{UploadData, UploadResponse};
