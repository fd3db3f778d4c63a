//! Browser capture error types.

/// Kinds of capture errors.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, derive_more::Display)]
pub enum CaptureErrorKind {
    /// Failed to launch the headless browser
    #[display("Failed to launch browser: {}", _0)]
    BrowserLaunch(String),
    /// Navigation to the target page failed
    #[display("Navigation failed: {}", _0)]
    Navigation(String),
    /// Evaluating the readiness probe in the page failed
    #[display("Readiness probe failed: {}", _0)]
    Probe(String),
    /// Taking the screenshot failed
    #[display("Screenshot failed: {}", _0)]
    Screenshot(String),
    /// Writing the snapshot file failed
    #[display("Failed to write snapshot file: {}", _0)]
    FileWrite(String),
    /// Shutting the browser down failed
    #[display("Browser shutdown failed: {}", _0)]
    Shutdown(String),
}

/// Capture error with location tracking.
///
/// # Examples
///
/// ```
/// use hokusai_error::{CaptureError, CaptureErrorKind};
///
/// let err = CaptureError::new(CaptureErrorKind::Navigation("timeout".to_string()));
/// assert!(format!("{}", err).contains("Navigation failed"));
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Capture Error: {} at line {} in {}", kind, line, file)]
pub struct CaptureError {
    /// The kind of error that occurred
    pub kind: CaptureErrorKind,
    /// Line number where error was created
    pub line: u32,
    /// File where error was created
    pub file: &'static str,
}

impl CaptureError {
    /// Create a new capture error with automatic location tracking.
    #[track_caller]
    pub fn new(kind: CaptureErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}
