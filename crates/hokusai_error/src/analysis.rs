//! Market analysis error types.

/// Kinds of analysis errors.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, derive_more::Display)]
pub enum AnalysisErrorKind {
    /// The generation request could not be sent
    #[display("Analysis request failed: {}", _0)]
    Request(String),
    /// The model endpoint returned a non-success status
    #[display("HTTP {} from model endpoint: {}", status_code, message)]
    Status {
        /// HTTP status code
        status_code: u16,
        /// Response body or status text
        message: String,
    },
    /// The response body did not match the expected shape
    #[display("Malformed generation response: {}", _0)]
    MalformedResponse(String),
    /// The model returned no usable text
    #[display("Model returned no text candidates")]
    EmptyResponse,
}

/// Analysis error with location tracking.
///
/// # Examples
///
/// ```
/// use hokusai_error::{AnalysisError, AnalysisErrorKind};
///
/// let err = AnalysisError::new(AnalysisErrorKind::EmptyResponse);
/// assert!(format!("{}", err).contains("no text candidates"));
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Analysis Error: {} at line {} in {}", kind, line, file)]
pub struct AnalysisError {
    /// The kind of error that occurred
    pub kind: AnalysisErrorKind,
    /// Line number where error was created
    pub line: u32,
    /// File where error was created
    pub file: &'static str,
}

impl AnalysisError {
    /// Create a new analysis error with automatic location tracking.
    #[track_caller]
    pub fn new(kind: AnalysisErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}
