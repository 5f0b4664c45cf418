//! # Provider Configuration
//!
//! Connection settings for the Gemini endpoint that performs the
//! extraction. The API key can be given literally or through
//! environment variable syntax such as `"${GEMINI_API_KEY}"`.
//!
//! # Example
//!
//! ```toml
//! [provider]
//! endpoint = "https://generativelanguage.googleapis.com"
//! api_key = "${GEMINI_API_KEY}"
//! ```

use serde::Deserialize;
use tracing::warn;

use crate::constants::{DEFAULT_API_KEY_SPEC, DEFAULT_GEMINI_API_PATH, DEFAULT_GEMINI_ENDPOINT};

/// Configuration for the Gemini model provider.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProviderConfig {
    /// API endpoint URL
    pub endpoint: String,
    /// API key (can use environment variable syntax like "${VAR_NAME}")
    pub api_key: Option<String>,
    /// Custom API path override (e.g., "v1beta/models")
    pub api_path: Option<String>,
}

impl Default for ProviderConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_GEMINI_ENDPOINT.to_string(),
            api_key: Some(DEFAULT_API_KEY_SPEC.to_string()),
            api_path: None,
        }
    }
}

impl ProviderConfig {
    /// API path, falling back to the Gemini default.
    pub fn api_path(&self) -> &str {
        self.api_path.as_deref().unwrap_or(DEFAULT_GEMINI_API_PATH)
    }

    /// Resolve the configured API key, expanding `${VAR}` references
    /// against the environment. Returns `None` when the variable is
    /// unset or the key spec is blank.
    pub fn resolved_api_key(&self) -> Option<String> {
        let spec = self.api_key.as_deref().map(str::trim)?;
        if spec.is_empty() {
            return None;
        }
        match shellexpand::env(spec) {
            Ok(expanded) => {
                let key = expanded.trim();
                if key.is_empty() {
                    None
                } else {
                    Some(key.to_string())
                }
            }
            Err(err) => {
                warn!(spec, %err, "API key environment variable is not set");
                None
            }
        }
    }
}

#[derive(Debug, Clone, Deserialize, Default)]
pub(super) struct RawProvider {
    pub(super) endpoint: Option<String>,
    pub(super) api_key: Option<String>,
    #[serde(default)]
    pub(super) api_path: Option<String>,
}

impl From<RawProvider> for ProviderConfig {
    fn from(raw: RawProvider) -> Self {
        let defaults = ProviderConfig::default();
        Self {
            endpoint: raw.endpoint.unwrap_or(defaults.endpoint),
            api_key: raw.api_key.or(defaults.api_key),
            api_path: raw.api_path,
        }
    }
}
