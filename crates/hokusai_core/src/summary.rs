//! The AI-generated market summary.

use serde::{Deserialize, Serialize};

/// Header line prepended to the summary when it becomes a broadcast text
/// body.
pub const SUMMARY_HEADER: &str = "【本日の日経225分析】";

/// Free-form market summary text produced by the analysis stage.
///
/// The text is forwarded verbatim; no validation of its structure (ticker
/// count, section layout) is performed.
///
/// # Examples
///
/// ```
/// use hokusai_core::{MarketSummary, SUMMARY_HEADER};
///
/// let summary = MarketSummary::new("日経平均は続伸。".to_string());
/// let body = summary.broadcast_body();
/// assert!(body.starts_with(SUMMARY_HEADER));
/// assert!(body.ends_with("日経平均は続伸。"));
/// ```
#[derive(
    Debug, Clone, PartialEq, Eq, Serialize, Deserialize, derive_getters::Getters, derive_new::new,
)]
pub struct MarketSummary {
    /// The generated summary text, verbatim
    text: String,
}

impl MarketSummary {
    /// Render the summary as a broadcast text body: the fixed header line,
    /// a blank line, then the summary text unchanged.
    pub fn broadcast_body(&self) -> String {
        format!("{SUMMARY_HEADER}\n\n{}", self.text)
    }
}
