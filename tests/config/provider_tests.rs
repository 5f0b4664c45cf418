// Provider config tests - API key resolution
//
// The key can be a literal or an environment variable reference such
// as "${GEMINI_API_KEY}". Env-mutating tests are serialized.

use resort_scout::config::ProviderConfig;
use serial_test::serial;
use std::env;

fn provider_with_key(spec: Option<&str>) -> ProviderConfig {
    ProviderConfig {
        api_key: spec.map(String::from),
        ..ProviderConfig::default()
    }
}

#[test]
fn resolves_literal_api_key() {
    let provider = provider_with_key(Some("literal-key"));
    assert_eq!(provider.resolved_api_key().as_deref(), Some("literal-key"));
}

#[test]
fn missing_key_resolves_to_none() {
    let provider = provider_with_key(None);
    assert_eq!(provider.resolved_api_key(), None);
}

#[test]
fn blank_key_resolves_to_none() {
    let provider = provider_with_key(Some("   "));
    assert_eq!(provider.resolved_api_key(), None);
}

#[test]
#[serial]
fn expands_env_var_reference() {
    unsafe {
        env::set_var("SCOUT_TEST_API_KEY", "sekrit");
    }

    let provider = provider_with_key(Some("${SCOUT_TEST_API_KEY}"));
    assert_eq!(provider.resolved_api_key().as_deref(), Some("sekrit"));
}

#[test]
#[serial]
fn unset_env_var_resolves_to_none() {
    unsafe {
        env::remove_var("SCOUT_TEST_MISSING_KEY");
    }

    let provider = provider_with_key(Some("${SCOUT_TEST_MISSING_KEY}"));
    assert_eq!(provider.resolved_api_key(), None);
}

#[test]
#[serial]
fn default_spec_reads_gemini_api_key() {
    unsafe {
        env::set_var("GEMINI_API_KEY", "from-env");
    }

    let provider = ProviderConfig::default();
    assert_eq!(provider.resolved_api_key().as_deref(), Some("from-env"));

    unsafe {
        env::remove_var("GEMINI_API_KEY");
    }
}

#[test]
fn api_path_defaults_to_gemini_models_path() {
    let provider = ProviderConfig::default();
    assert_eq!(provider.api_path(), "v1beta/models");
}

#[test]
fn api_path_override_wins() {
    let provider = ProviderConfig {
        api_path: Some("v1/models".to_string()),
        ..ProviderConfig::default()
    };
    assert_eq!(provider.api_path(), "v1/models");
}
