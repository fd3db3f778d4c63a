//! Top-level error wrapper types.

use crate::{AnalysisError, BroadcastError, CaptureError, ConfigError, UploadError};

/// The foundation error enum, one variant per pipeline stage plus
/// configuration.
///
/// # Examples
///
/// ```
/// use hokusai_error::{HokusaiError, ConfigError};
///
/// let config_err = ConfigError::new("missing key");
/// let err: HokusaiError = config_err.into();
/// assert!(format!("{}", err).contains("Configuration Error"));
/// ```
#[derive(Debug, derive_more::From, derive_more::Display, derive_more::Error)]
pub enum HokusaiErrorKind {
    /// Configuration error
    #[from(ConfigError)]
    Config(ConfigError),
    /// Browser capture error
    #[from(CaptureError)]
    Capture(CaptureError),
    /// Image upload error
    #[from(UploadError)]
    Upload(UploadError),
    /// Market analysis error
    #[from(AnalysisError)]
    Analysis(AnalysisError),
    /// Messaging broadcast error
    #[from(BroadcastError)]
    Broadcast(BroadcastError),
}

/// Hokusai error with kind discrimination.
///
/// # Examples
///
/// ```
/// use hokusai_error::{HokusaiResult, ConfigError};
///
/// fn might_fail() -> HokusaiResult<()> {
///     Err(ConfigError::new("missing field"))?
/// }
///
/// match might_fail() {
///     Ok(_) => println!("Success"),
///     Err(e) => println!("Error: {}", e),
/// }
/// ```
#[derive(Debug, derive_more::Display, derive_more::Error)]
#[display("Hokusai Error: {}", _0)]
pub struct HokusaiError(Box<HokusaiErrorKind>);

impl HokusaiError {
    /// Create a new error from a kind.
    pub fn new(kind: HokusaiErrorKind) -> Self {
        Self(Box::new(kind))
    }

    /// Get the error kind.
    pub fn kind(&self) -> &HokusaiErrorKind {
        &self.0
    }
}

// Generic From implementation for any type that converts to HokusaiErrorKind
impl<T> From<T> for HokusaiError
where
    T: Into<HokusaiErrorKind>,
{
    fn from(err: T) -> Self {
        Self::new(err.into())
    }
}

/// Result type for Hokusai operations.
///
/// # Examples
///
/// ```
/// use hokusai_error::{HokusaiResult, UploadError, UploadErrorKind};
///
/// fn publish() -> HokusaiResult<String> {
///     Err(UploadError::new(UploadErrorKind::Request("404".into())))?
/// }
/// ```
pub type HokusaiResult<T> = std::result::Result<T, HokusaiError>;
