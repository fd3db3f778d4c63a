//! Image upload error types.

/// Kinds of upload errors.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, derive_more::Display)]
pub enum UploadErrorKind {
    /// The upload request could not be sent
    #[display("Upload request failed: {}", _0)]
    Request(String),
    /// The host returned a non-success status
    #[display("HTTP {} from image host: {}", status_code, message)]
    Status {
        /// HTTP status code
        status_code: u16,
        /// Response body or status text
        message: String,
    },
    /// The response body did not match the expected shape
    #[display("Malformed upload response: {}", _0)]
    MalformedResponse(String),
}

/// Upload error with location tracking.
///
/// # Examples
///
/// ```
/// use hokusai_error::{UploadError, UploadErrorKind};
///
/// let err = UploadError::new(UploadErrorKind::Status {
///     status_code: 400,
///     message: "Invalid API key".to_string(),
/// });
/// assert!(format!("{}", err).contains("400"));
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Upload Error: {} at line {} in {}", kind, line, file)]
pub struct UploadError {
    /// The kind of error that occurred
    pub kind: UploadErrorKind,
    /// Line number where error was created
    pub line: u32,
    /// File where error was created
    pub file: &'static str,
}

impl UploadError {
    /// Create a new upload error with automatic location tracking.
    #[track_caller]
    pub fn new(kind: UploadErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}
