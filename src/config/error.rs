use std::io;
use std::net::AddrParseError;
use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur when loading or validating configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("configuration file not found at {path:?}")]
    NotFound { path: PathBuf },

    #[error("failed to read config from {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to parse config from {path:?}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("invalid [rest] bind address '{value}': {source}")]
    InvalidBind {
        value: String,
        #[source]
        source: AddrParseError,
    },

    #[error("[extraction] page_size must be at least 1")]
    InvalidPageSize,

    #[error("[chat] backend_url cannot be empty")]
    MissingBackendUrl,

    #[error(
        "Gemini API key not found. Set the GEMINI_API_KEY environment variable or put a key in [provider] api_key."
    )]
    MissingApiKey,
}
