//! Application constants
//!
//! Single source of truth for paths and other constants.

/// Default configuration file path
pub const CONFIG_PATH: &str = "config/scout.toml";

/// Default environment file path
pub const ENV_PATH: &str = "config/.env";

/// Configuration directory
pub const CONFIG_DIR: &str = "config";

/// Default Gemini API path (fallback when not specified in config)
pub const DEFAULT_GEMINI_API_PATH: &str = "v1beta/models";

/// Default Gemini endpoint
pub const DEFAULT_GEMINI_ENDPOINT: &str = "https://generativelanguage.googleapis.com";

/// Default extraction model
pub const DEFAULT_MODEL: &str = "gemini-pro";

/// Environment variable expansion spec for the Gemini API key
pub const DEFAULT_API_KEY_SPEC: &str = "${GEMINI_API_KEY}";

/// Default REST bind address
pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8080";

/// Default backend URL the chat screen talks to
pub const DEFAULT_BACKEND_URL: &str = "http://127.0.0.1:8080";

/// Number of resorts requested per extraction batch
pub const DEFAULT_PAGE_SIZE: usize = 20;

/// Timeout for listing page downloads, in seconds
pub const DEFAULT_FETCH_TIMEOUT_SECS: u64 = 10;

/// User agent sent when downloading listing pages. Some listing sites
/// refuse requests without a browser-looking agent.
pub const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/58.0.3029.110 Safari/537.3";
