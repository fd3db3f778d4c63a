//! JSON deserialization models for ImgBB upload responses.
//!
//! These models match the upload endpoint's response shape. Only `data.url`
//! is load-bearing; the other fields are parsed for logging value but never
//! required.

use serde::{Deserialize, Serialize};

/// Successful upload response envelope.
///
/// # Examples
///
/// ```
/// use hokusai_hosting::UploadResponse;
///
/// let json = r#"{"data":{"url":"https://i.ibb.co/abc/x.png"},"success":true,"status":200}"#;
/// let response: UploadResponse = serde_json::from_str(json).unwrap();
/// assert_eq!(response.data().url(), "https://i.ibb.co/abc/x.png");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, derive_getters::Getters)]
pub struct UploadResponse {
    /// Upload result payload (required)
    data: UploadData,
    /// Whether the host reported success (optional)
    #[serde(default)]
    success: Option<bool>,
    /// HTTP-like status code echoed in the body (optional)
    #[serde(default)]
    status: Option<u16>,
}

/// Upload result payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, derive_getters::Getters)]
pub struct UploadData {
    /// Public URL of the uploaded image (required)
    url: String,
    /// Host's display URL variant (optional)
    #[serde(default)]
    display_url: Option<String>,
    /// Deletion URL for the upload (optional)
    #[serde(default)]
    delete_url: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_minimal_response() {
        let json = r#"{"data":{"url":"https://img.example/x.png"}}"#;
        let response: UploadResponse = serde_json::from_str(json).unwrap();
        assert_eq!(response.data().url(), "https://img.example/x.png");
        assert_eq!(*response.success(), None);
    }

    #[test]
    fn missing_url_is_an_error() {
        let json = r#"{"data":{"display_url":"https://img.example/x.png"}}"#;
        let result: Result<UploadResponse, _> = serde_json::from_str(json);
        assert!(result.is_err());
    }

    #[test]
    fn missing_data_is_an_error() {
        let json = r#"{"success":true,"status":200}"#;
        let result: Result<UploadResponse, _> = serde_json::from_str(json);
        assert!(result.is_err());
    }
}
