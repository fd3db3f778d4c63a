//! Run profiles: the standard and annotated pipeline variants.

use crate::Viewport;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// File name prefix for snapshot PNGs.
pub const SNAPSHOT_PREFIX: &str = "nikkei_heatmap";

/// Date stamp format used in snapshot file names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DateStamp {
    /// `YYYY-MM-DD`
    Dashed,
    /// `YYYYMMDD`
    Compact,
}

impl DateStamp {
    /// Format a date with this stamp.
    pub fn format(&self, date: NaiveDate) -> String {
        match self {
            DateStamp::Dashed => date.format("%Y-%m-%d").to_string(),
            DateStamp::Compact => date.format("%Y%m%d").to_string(),
        }
    }
}

/// The pipeline variant for one run.
///
/// The two variants share the same pipeline; they differ only in whether the
/// analysis stage runs, the date stamp used in the snapshot file name, and
/// the capture viewport (the annotated variant captures at high resolution
/// for the model to read tickers from).
///
/// # Examples
///
/// ```
/// use hokusai_core::RunProfile;
/// use chrono::NaiveDate;
///
/// let date = NaiveDate::from_ymd_opt(2025, 1, 15).unwrap();
/// assert_eq!(RunProfile::Standard.filename(date), "nikkei_heatmap_2025-01-15.png");
/// assert_eq!(RunProfile::Annotated.filename(date), "nikkei_heatmap_20250115.png");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RunProfile {
    /// Capture, publish, broadcast the image
    Standard,
    /// Capture at high resolution, publish, analyze, broadcast image + text
    Annotated,
}

impl RunProfile {
    /// Whether this profile runs the analysis stage.
    pub fn analyzes(&self) -> bool {
        matches!(self, RunProfile::Annotated)
    }

    /// The date stamp format this profile uses in file names.
    pub fn date_stamp(&self) -> DateStamp {
        match self {
            RunProfile::Standard => DateStamp::Dashed,
            RunProfile::Annotated => DateStamp::Compact,
        }
    }

    /// The default capture viewport for this profile.
    pub fn viewport(&self) -> Viewport {
        match self {
            RunProfile::Standard => Viewport::new(1280, 720, None),
            RunProfile::Annotated => Viewport::new(3440, 1440, Some(1.0)),
        }
    }

    /// The snapshot file name for a run on `date`.
    pub fn filename(&self, date: NaiveDate) -> String {
        format!("{SNAPSHOT_PREFIX}_{}.png", self.date_stamp().format(date))
    }
}
