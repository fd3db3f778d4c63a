//! Google Gemini integration.

mod client;
mod prompt;
mod protocol;

pub use client::{GEMINI_ENDPOINT, GeminiAnalyst};
pub use prompt::MARKET_PROMPT;
pub use protocol::{
    Candidate, CandidateContent, Content, GenerateContentRequest, GenerateContentResponse,
    GenerationConfig, GoogleSearch, InlineData, InlineDataPart, Part, TextPart, Tool,
};
