//! Messaging broadcast error types.

/// Kinds of broadcast errors.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, derive_more::Display)]
pub enum BroadcastErrorKind {
    /// The broadcast request could not be sent
    #[display("Broadcast request failed: {}", _0)]
    Request(String),
    /// The access token was rejected
    #[display("Authentication rejected (HTTP {}): {}", status_code, message)]
    Authentication {
        /// HTTP status code (401 or 403)
        status_code: u16,
        /// Response body or status text
        message: String,
    },
    /// The message payload exceeded the platform's size limit
    #[display("Payload too large: {}", _0)]
    PayloadTooLarge(String),
    /// The platform rate-limited the request
    #[display("Rate limited: {}", _0)]
    RateLimited(String),
    /// Any other non-success status
    #[display("HTTP {} from messaging platform: {}", status_code, message)]
    Status {
        /// HTTP status code
        status_code: u16,
        /// Response body or status text
        message: String,
    },
}

/// Broadcast error with location tracking.
///
/// # Examples
///
/// ```
/// use hokusai_error::{BroadcastError, BroadcastErrorKind};
///
/// let err = BroadcastError::new(BroadcastErrorKind::Authentication {
///     status_code: 401,
///     message: "invalid token".to_string(),
/// });
/// assert!(format!("{}", err).contains("401"));
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Broadcast Error: {} at line {} in {}", kind, line, file)]
pub struct BroadcastError {
    /// The kind of error that occurred
    pub kind: BroadcastErrorKind,
    /// Line number where error was created
    pub line: u32,
    /// File where error was created
    pub file: &'static str,
}

impl BroadcastError {
    /// Create a new broadcast error with automatic location tracking.
    #[track_caller]
    pub fn new(kind: BroadcastErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }

    /// Map an HTTP status and body to the matching broadcast error kind.
    #[track_caller]
    pub fn from_status(status_code: u16, message: impl Into<String>) -> Self {
        let message = message.into();
        let kind = match status_code {
            401 | 403 => BroadcastErrorKind::Authentication {
                status_code,
                message,
            },
            413 => BroadcastErrorKind::PayloadTooLarge(message),
            429 => BroadcastErrorKind::RateLimited(message),
            _ => BroadcastErrorKind::Status {
                status_code,
                message,
            },
        };
        Self::new(kind)
    }
}
