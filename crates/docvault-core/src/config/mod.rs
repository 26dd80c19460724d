//! Client configuration.
//!
//! The only runtime setting is the API origin. Everything else (paths, token
//! keys) is fixed by the server contract.

use crate::api::ApiError;
use crate::util::{is_http_url, normalize_text_option};

/// Origin used when nothing is configured at build time.
pub const DEFAULT_API_BASE_URL: &str = "http://127.0.0.1:8000";

const MEDIA_PREFIX: &str = "/media/";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    api_base_url: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
        }
    }
}

impl ClientConfig {
    /// Builds a config for an explicit API origin.
    pub fn new(api_base_url: impl AsRef<str>) -> Result<Self, ApiError> {
        Ok(Self {
            api_base_url: normalize_base_url(api_base_url.as_ref())?,
        })
    }

    /// Uses `api_base_url` when present, otherwise the default origin.
    pub fn from_optional(api_base_url: Option<String>) -> Result<Self, ApiError> {
        normalize_text_option(api_base_url).map_or_else(|| Ok(Self::default()), Self::new)
    }

    pub fn api_base_url(&self) -> &str {
        &self.api_base_url
    }

    /// Joins an endpoint path (with leading slash) onto the origin.
    pub fn api_url(&self, path: &str) -> String {
        format!("{}{}", self.api_base_url, path)
    }

    /// Resolves a stored file reference to a downloadable URL.
    ///
    /// Absolute URLs pass through; `/media/...` paths are joined to the
    /// origin; bare storage paths get the media prefix.
    pub fn media_url(&self, file: &str) -> String {
        let file = file.trim();
        if is_http_url(file) {
            return file.to_string();
        }
        if file.starts_with(MEDIA_PREFIX) {
            return self.api_url(file);
        }
        format!(
            "{}{}{}",
            self.api_base_url,
            MEDIA_PREFIX,
            file.trim_start_matches('/')
        )
    }
}

fn normalize_base_url(raw: &str) -> Result<String, ApiError> {
    let base = raw.trim().trim_end_matches('/').to_string();
    if base.is_empty() {
        return Err(ApiError::InvalidConfiguration(
            "API base URL must not be empty".to_string(),
        ));
    }
    if !is_http_url(&base) {
        return Err(ApiError::InvalidConfiguration(
            "API base URL must include http:// or https://".to_string(),
        ));
    }
    Ok(base)
}
