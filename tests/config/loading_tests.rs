// Config loading tests - testing AppConfig::load error handling
//
// Tests focused on configuration file loading and validation errors.

use resort_scout::config::{AppConfig, ConfigError};
use std::fs;
use std::path::Path;
use tempfile::tempdir;

fn write_config(dir: &Path, content: &str) -> std::path::PathBuf {
    let path = dir.join("scout.toml");
    fs::write(&path, content).expect("Failed to write config");
    path
}

#[test]
fn returns_error_when_file_not_found() {
    let result = AppConfig::load(Some(Path::new("/nonexistent/path/scout.toml")));
    assert!(matches!(result, Err(ConfigError::NotFound { .. })));
}

#[test]
fn returns_error_on_invalid_toml() {
    let dir = tempdir().expect("tempdir");
    let path = write_config(dir.path(), "model = \"unterminated");

    let result = AppConfig::load(Some(&path));
    assert!(matches!(result, Err(ConfigError::Parse { .. })));
}

#[test]
fn missing_model_falls_back_to_the_default() {
    let dir = tempdir().expect("tempdir");
    let path = write_config(
        dir.path(),
        r#"
[provider]
endpoint = "https://gemini.example.com"
"#,
    );

    let config = AppConfig::load(Some(&path)).expect("load config");
    assert_eq!(config.model, "gemini-pro");
}

#[test]
fn returns_error_on_unparseable_bind_address() {
    let dir = tempdir().expect("tempdir");
    let path = write_config(
        dir.path(),
        r#"
model = "gemini-pro"

[rest]
bind = "not-an-address"
"#,
    );

    let result = AppConfig::load(Some(&path));
    assert!(matches!(result, Err(ConfigError::InvalidBind { .. })));
}

#[test]
fn returns_error_on_zero_page_size() {
    let dir = tempdir().expect("tempdir");
    let path = write_config(
        dir.path(),
        r#"
model = "gemini-pro"

[extraction]
page_size = 0
"#,
    );

    let result = AppConfig::load(Some(&path));
    assert!(matches!(result, Err(ConfigError::InvalidPageSize)));
}

#[test]
fn returns_error_on_blank_backend_url() {
    let dir = tempdir().expect("tempdir");
    let path = write_config(
        dir.path(),
        r#"
model = "gemini-pro"

[chat]
backend_url = "   "
"#,
    );

    let result = AppConfig::load(Some(&path));
    assert!(matches!(result, Err(ConfigError::MissingBackendUrl)));
}

#[test]
fn load_or_init_writes_a_default_file() {
    let dir = tempdir().expect("tempdir");
    let path = dir.path().join("fresh").join("scout.toml");
    assert!(!path.exists());

    let config = AppConfig::load_or_init(Some(&path)).expect("init config");

    assert!(path.exists());
    assert_eq!(config.model, "gemini-pro");
    assert_eq!(config.extraction.page_size, 20);

    // A second load reads the file it just wrote
    let reloaded = AppConfig::load(Some(&path)).expect("reload config");
    assert_eq!(reloaded, config);
}

#[test]
fn load_or_init_keeps_an_existing_file() {
    let dir = tempdir().expect("tempdir");
    let path = write_config(dir.path(), "model = \"my-tuned-model\"\n");

    let config = AppConfig::load_or_init(Some(&path)).expect("load config");

    assert_eq!(config.model, "my-tuned-model");
}
