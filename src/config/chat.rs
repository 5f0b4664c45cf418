use serde::Deserialize;

use crate::constants::DEFAULT_BACKEND_URL;

/// Chat screen settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatConfig {
    /// Base URL of the REST backend, without a trailing slash
    pub backend_url: String,
}

impl Default for ChatConfig {
    fn default() -> Self {
        Self {
            backend_url: DEFAULT_BACKEND_URL.to_string(),
        }
    }
}

#[derive(Debug, Clone, Deserialize, Default)]
pub(super) struct RawChat {
    pub(super) backend_url: Option<String>,
}
