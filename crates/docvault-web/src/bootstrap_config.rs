//! Web bootstrap configuration loaded from build-time generated JSON.

use serde::{Deserialize, Serialize};
use tracing::Level;

pub const BOOTSTRAP_JSON: &str = include_str!(concat!(env!("OUT_DIR"), "/web-bootstrap.json"));

/// Build-provisioned settings embedded into the wasm bundle.
///
/// Everything here ships to the browser. Secrets must never be stored here.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct WebBootstrapConfig {
    #[serde(default)]
    pub api_base_url: Option<String>,
    #[serde(default)]
    pub log_level: Option<String>,
}

pub fn parse_bootstrap_config(raw: &str) -> Result<WebBootstrapConfig, serde_json::Error> {
    serde_json::from_str(raw)
}

/// Loads the generated bootstrap JSON from `OUT_DIR`.
///
/// If parsing fails, this logs a warning and returns a default empty config so
/// the client falls back to the default API origin.
pub fn load_bootstrap_config() -> WebBootstrapConfig {
    parse_bootstrap_config(BOOTSTRAP_JSON).unwrap_or_else(|error| {
        tracing::warn!("Failed to parse web bootstrap config: {}", error);
        WebBootstrapConfig::default()
    })
}

pub const fn default_log_level() -> Level {
    if cfg!(debug_assertions) {
        Level::DEBUG
    } else {
        Level::INFO
    }
}

impl WebBootstrapConfig {
    /// Configured log level, or the build profile's default when missing or unparseable.
    pub fn log_level(&self) -> Level {
        self.log_level
            .as_deref()
            .and_then(|value| value.trim().parse().ok())
            .unwrap_or_else(default_log_level)
    }
}
