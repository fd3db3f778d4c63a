//! Service credentials.
//!
//! Credentials are read from the environment exactly once, at startup, into
//! an explicit value handed to each client. Absence is a startup error, not
//! a downstream authentication fault.

use hokusai_core::RunProfile;
use hokusai_error::{ConfigError, HokusaiResult};

/// Environment variable holding the LINE channel access token.
const LINE_TOKEN_VAR: &str = "LINE_TOKEN";
/// Environment variable holding the ImgBB API key.
const IMGBB_API_KEY_VAR: &str = "IMGBB_API_KEY";
/// Environment variable holding the Gemini API key.
const GEMINI_API_KEY_VAR: &str = "GEMINI_API_KEY";

/// The credential set for one run.
///
/// The Gemini key is only demanded when the run profile analyzes; for a
/// standard run it is carried along when present and ignored otherwise.
#[derive(Clone, derive_getters::Getters)]
pub struct Credentials {
    /// LINE channel access token
    line_token: String,
    /// ImgBB API key
    imgbb_api_key: String,
    /// Gemini API key, required for annotated runs
    gemini_api_key: Option<String>,
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("gemini_api_key", &self.gemini_api_key.is_some())
            .finish_non_exhaustive()
    }
}

impl Credentials {
    /// Read credentials from the process environment.
    pub fn from_env(profile: RunProfile) -> HokusaiResult<Self> {
        Self::from_lookup(profile, |name| std::env::var(name).ok())
    }

    /// Read credentials through `lookup`, validating per `profile`.
    pub fn from_lookup(
        profile: RunProfile,
        lookup: impl Fn(&str) -> Option<String>,
    ) -> HokusaiResult<Self> {
        let line_token =
            lookup(LINE_TOKEN_VAR).ok_or_else(|| ConfigError::missing_var(LINE_TOKEN_VAR))?;
        let imgbb_api_key =
            lookup(IMGBB_API_KEY_VAR).ok_or_else(|| ConfigError::missing_var(IMGBB_API_KEY_VAR))?;
        let gemini_api_key = match lookup(GEMINI_API_KEY_VAR) {
            Some(key) => Some(key),
            None if profile.analyzes() => {
                return Err(ConfigError::missing_var(GEMINI_API_KEY_VAR).into());
            }
            None => None,
        };
        Ok(Self {
            line_token,
            imgbb_api_key,
            gemini_api_key,
        })
    }
}
