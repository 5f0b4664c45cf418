// Config parsing tests - testing successful config parsing
//
// Tests for valid configuration parsing including section defaults.

use resort_scout::config::AppConfig;
use std::fs;
use std::path::Path;
use std::time::Duration;
use tempfile::tempdir;

fn write_config(dir: &Path, content: &str) -> std::path::PathBuf {
    let path = dir.join("scout.toml");
    fs::write(&path, content).expect("Failed to write config");
    path
}

fn minimal_valid_config() -> &'static str {
    r#"
model = "gemini-pro"
"#
}

#[test]
fn parses_minimal_valid_config() {
    let dir = tempdir().expect("tempdir");
    let path = write_config(dir.path(), minimal_valid_config());

    let config = AppConfig::load(Some(&path)).expect("load config");

    assert_eq!(config.model, "gemini-pro");
    assert_eq!(
        config.provider.endpoint,
        "https://generativelanguage.googleapis.com"
    );
    assert_eq!(config.extraction.page_size, 20);
    assert_eq!(config.extraction.fetch_timeout, Duration::from_secs(10));
    assert_eq!(config.rest.bind.to_string(), "0.0.0.0:8080");
    assert!(config.rest.cors_origins.is_empty());
    assert_eq!(config.chat.backend_url, "http://127.0.0.1:8080");
}

#[test]
fn parses_full_config() {
    let dir = tempdir().expect("tempdir");
    let path = write_config(
        dir.path(),
        r#"
model = "gemini-1.5-flash-latest"

[provider]
endpoint = "https://gemini.example.com"
api_key = "literal-key"
api_path = "v1/models"

[extraction]
page_size = 5
user_agent = "scout-test/1.0"
fetch_timeout_secs = 3

[rest]
bind = "127.0.0.1:9090"
cors_origins = ["http://localhost:5173"]

[chat]
backend_url = "http://10.0.0.5:9090"
"#,
    );

    let config = AppConfig::load(Some(&path)).expect("load config");

    assert_eq!(config.model, "gemini-1.5-flash-latest");
    assert_eq!(config.provider.endpoint, "https://gemini.example.com");
    assert_eq!(config.provider.api_key.as_deref(), Some("literal-key"));
    assert_eq!(config.provider.api_path(), "v1/models");
    assert_eq!(config.extraction.page_size, 5);
    assert_eq!(config.extraction.user_agent, "scout-test/1.0");
    assert_eq!(config.extraction.fetch_timeout, Duration::from_secs(3));
    assert_eq!(config.rest.bind.to_string(), "127.0.0.1:9090");
    assert_eq!(config.rest.cors_origins, vec!["http://localhost:5173"]);
    assert_eq!(config.chat.backend_url, "http://10.0.0.5:9090");
}

#[test]
fn trims_trailing_slash_from_backend_url() {
    let dir = tempdir().expect("tempdir");
    let path = write_config(
        dir.path(),
        r#"
model = "gemini-pro"

[chat]
backend_url = "http://10.0.0.5:9090/"
"#,
    );

    let config = AppConfig::load(Some(&path)).expect("load config");
    assert_eq!(config.chat.backend_url, "http://10.0.0.5:9090");
}

#[test]
fn defaults_user_agent_to_a_browser_string() {
    let dir = tempdir().expect("tempdir");
    let path = write_config(dir.path(), minimal_valid_config());

    let config = AppConfig::load(Some(&path)).expect("load config");

    // Listing sites refuse obviously non-browser agents
    assert!(config.extraction.user_agent.starts_with("Mozilla/5.0"));
}
