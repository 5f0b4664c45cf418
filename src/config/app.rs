use super::chat::ChatConfig;
use super::error::ConfigError;
use super::extraction::ExtractionConfig;
use super::provider::ProviderConfig;
use super::rest::RestConfig;
use std::path::Path;

/// Application configuration loaded from scout.toml
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub model: String,
    pub provider: ProviderConfig,
    pub extraction: ExtractionConfig,
    pub rest: RestConfig,
    pub chat: ChatConfig,
}

impl AppConfig {
    /// Load configuration from a file path (or default path if None)
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        super::loader::load_config(path)
    }

    /// Load configuration, writing a default file first when none exists
    pub fn load_or_init(path: Option<&Path>) -> Result<Self, ConfigError> {
        super::loader::load_or_init(path)
    }
}
