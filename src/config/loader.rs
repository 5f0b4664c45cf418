use super::chat::{ChatConfig, RawChat};
use super::error::ConfigError;
use super::extraction::{ExtractionConfig, RawExtraction};
use super::provider::RawProvider;
use super::rest::{RawRest, RestConfig};
use crate::constants::{
    CONFIG_PATH, DEFAULT_API_KEY_SPEC, DEFAULT_BACKEND_URL, DEFAULT_BIND_ADDR,
    DEFAULT_FETCH_TIMEOUT_SECS, DEFAULT_GEMINI_ENDPOINT, DEFAULT_MODEL, DEFAULT_PAGE_SIZE,
    ENV_PATH,
};
use dotenvy::from_filename;
use serde::Deserialize;
use std::fs;
use std::io;
use std::path::Path;
use std::sync::Once;
use tracing::{debug, info};

static ENV_LOADER: Once = Once::new();

/// Contents written when no configuration file exists yet
fn default_config_toml() -> String {
    format!(
        r#"model = "{DEFAULT_MODEL}"

[provider]
endpoint = "{DEFAULT_GEMINI_ENDPOINT}"
api_key = "{DEFAULT_API_KEY_SPEC}"

[extraction]
page_size = {DEFAULT_PAGE_SIZE}
fetch_timeout_secs = {DEFAULT_FETCH_TIMEOUT_SECS}

[rest]
bind = "{DEFAULT_BIND_ADDR}"
cors_origins = []

[chat]
backend_url = "{DEFAULT_BACKEND_URL}"
"#
    )
}

/// Raw configuration structure for deserialization from TOML
#[derive(Debug, Deserialize, Default)]
pub(super) struct RawConfig {
    pub model: Option<String>,
    #[serde(default)]
    pub provider: RawProvider,
    #[serde(default)]
    pub extraction: RawExtraction,
    #[serde(default)]
    pub rest: RawRest,
    #[serde(default)]
    pub chat: RawChat,
}

/// Ensures environment variables are loaded from config/.env
pub fn ensure_env_loaded() {
    ENV_LOADER.call_once(|| {
        let _ = from_filename(ENV_PATH);
    });
}

/// Load and validate configuration from a file path
pub fn load_config(path: Option<&Path>) -> Result<super::AppConfig, ConfigError> {
    ensure_env_loaded();
    let config_path = path.unwrap_or_else(|| Path::new(CONFIG_PATH));
    read_config(config_path)
}

/// Like [`load_config`], but writes a default file first when none exists
pub fn load_or_init(path: Option<&Path>) -> Result<super::AppConfig, ConfigError> {
    ensure_env_loaded();
    let config_path = path.unwrap_or_else(|| Path::new(CONFIG_PATH));
    if !config_path.exists() {
        if let Some(parent) = config_path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).map_err(|source| ConfigError::Io {
                    path: config_path.to_path_buf(),
                    source,
                })?;
            }
        }
        fs::write(config_path, default_config_toml()).map_err(|source| ConfigError::Io {
            path: config_path.to_path_buf(),
            source,
        })?;
        info!(path = %config_path.display(), "Created default configuration file");
    }
    read_config(config_path)
}

fn read_config(path: &Path) -> Result<super::AppConfig, ConfigError> {
    debug!(path = %path.display(), "Reading configuration file");

    let content = fs::read_to_string(path).map_err(|source| {
        if source.kind() == io::ErrorKind::NotFound {
            ConfigError::NotFound {
                path: path.to_path_buf(),
            }
        } else {
            ConfigError::Io {
                path: path.to_path_buf(),
                source,
            }
        }
    })?;

    let parsed: RawConfig = toml::from_str(&content).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })?;

    validate_and_build(parsed)
}

fn validate_and_build(parsed: RawConfig) -> Result<super::AppConfig, ConfigError> {
    let model = parsed.model.unwrap_or_else(|| DEFAULT_MODEL.to_string());

    if parsed.extraction.page_size == Some(0) {
        return Err(ConfigError::InvalidPageSize);
    }
    let extraction = ExtractionConfig::from(parsed.extraction);

    let rest = match parsed.rest.bind {
        Some(value) => {
            let bind = value
                .parse()
                .map_err(|source| ConfigError::InvalidBind { value, source })?;
            RestConfig {
                bind,
                cors_origins: parsed.rest.cors_origins,
            }
        }
        None => RestConfig {
            cors_origins: parsed.rest.cors_origins,
            ..RestConfig::default()
        },
    };

    let chat = match parsed.chat.backend_url {
        Some(url) => {
            let trimmed = url.trim().trim_end_matches('/');
            if trimmed.is_empty() {
                return Err(ConfigError::MissingBackendUrl);
            }
            ChatConfig {
                backend_url: trimmed.to_string(),
            }
        }
        None => ChatConfig::default(),
    };

    Ok(super::AppConfig {
        model,
        provider: parsed.provider.into(),
        extraction,
        rest,
        chat,
    })
}
