//! The heatmap visualization target.

use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};
use serde::{Deserialize, Serialize};

/// Base URL of the TradingView stock heatmap.
const HEATMAP_BASE: &str = "https://jp.tradingview.com/heatmap/stock/";

/// Field names and values are alphanumeric plus underscore; encoding
/// everything else matches what TradingView emits itself.
const FRAGMENT_SET: &AsciiSet = &NON_ALPHANUMERIC.remove(b'_');

/// The heatmap configuration selected via the URL fragment.
///
/// TradingView reads a percent-encoded JSON object from the fragment to pick
/// the data source, the coloring metric, the sizing metric, and the grouping.
///
/// # Examples
///
/// ```
/// use hokusai_core::HeatmapTarget;
///
/// let target = HeatmapTarget::default();
/// assert!(target.url().starts_with("https://jp.tradingview.com/heatmap/stock/#"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, derive_getters::Getters)]
#[serde(default)]
pub struct HeatmapTarget {
    /// Index to display (e.g. "NI225")
    data_source: String,
    /// Metric that colors each block (e.g. "change")
    block_color: String,
    /// Metric that sizes each block (e.g. "market_cap_basic")
    block_size: String,
    /// Grouping dimension (e.g. "sector")
    grouping: String,
}

impl Default for HeatmapTarget {
    fn default() -> Self {
        Self {
            data_source: "NI225".to_string(),
            block_color: "change".to_string(),
            block_size: "market_cap_basic".to_string(),
            grouping: "sector".to_string(),
        }
    }
}

/// Fragment payload in TradingView's expected field order and casing.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct Fragment<'a> {
    data_source: &'a str,
    block_color: &'a str,
    block_size: &'a str,
    grouping: &'a str,
}

impl HeatmapTarget {
    /// Render the full heatmap URL with the percent-encoded JSON fragment.
    pub fn url(&self) -> String {
        let fragment = Fragment {
            data_source: &self.data_source,
            block_color: &self.block_color,
            block_size: &self.block_size,
            grouping: &self.grouping,
        };
        let json = serde_json::to_string(&fragment).expect("fragment serialization is infallible");
        let encoded = utf8_percent_encode(&json, FRAGMENT_SET);
        format!("{HEATMAP_BASE}#{encoded}")
    }
}
