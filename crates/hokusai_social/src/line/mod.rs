//! LINE Messaging API integration.

mod client;
mod messages;

pub use client::{LINE_HOST, LineClient};
pub use messages::{BroadcastRequest, LineMessage};
