//! Model provider integration for the Hokusai heatmap pipeline.
//!
//! The analysis stage sends the snapshot image and a fixed instruction
//! prompt to the Gemini `generateContent` endpoint with the Google Search
//! tool enabled, and forwards the returned text verbatim.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod gemini;

pub use gemini::{
    Candidate, CandidateContent, Content, GEMINI_ENDPOINT, GeminiAnalyst, GenerateContentRequest,
    GenerateContentResponse, GenerationConfig, GoogleSearch, InlineData, InlineDataPart,
    MARKET_PROMPT, Part, TextPart, Tool,
};
