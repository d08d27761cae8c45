//! Tests for session configuration and client construction.

use std::env;

use altegio_client::{AltegioClient, AltegioConfig, ApiError, ConfigError, DEFAULT_BASE_URL};

#[test]
fn partner_only_config_targets_production() {
    let config = AltegioConfig::new("pt-1");
    assert_eq!(config.base_url, DEFAULT_BASE_URL);
    assert_eq!(config.partner_token, "pt-1");
    assert!(config.user_token.is_none());
}

#[test]
fn base_url_override_trims_trailing_slash() {
    let config = AltegioConfig::new("pt-1").with_base_url("https://mirror.example/api/v1/");
    assert_eq!(config.base_url, "https://mirror.example/api/v1");
}

#[test]
fn from_env_reads_session_and_requires_partner_token() {
    // Single test so the env mutations cannot race a sibling.
    env::set_var("ALTEGIO_PARTNER_TOKEN", "pt-env");
    env::set_var("ALTEGIO_USER_TOKEN", "ut-env");
    env::set_var("ALTEGIO_BASE_URL", "https://mirror.example/v1/");

    let config = AltegioConfig::from_env().unwrap();
    assert_eq!(config.partner_token, "pt-env");
    assert_eq!(config.user_token.as_deref(), Some("ut-env"));
    assert_eq!(config.base_url, "https://mirror.example/v1");

    env::set_var("ALTEGIO_USER_TOKEN", "");
    let config = AltegioConfig::from_env().unwrap();
    assert!(config.user_token.is_none(), "empty variables count as unset");

    env::set_var("ALTEGIO_PARTNER_TOKEN", "");
    let err = AltegioConfig::from_env().unwrap_err();
    assert_eq!(err, ConfigError::MissingVar("ALTEGIO_PARTNER_TOKEN"));

    env::remove_var("ALTEGIO_PARTNER_TOKEN");
    env::remove_var("ALTEGIO_USER_TOKEN");
    env::remove_var("ALTEGIO_BASE_URL");
}

#[test]
fn client_build_rejects_control_characters_in_tokens() {
    let config = AltegioConfig::new("bad\ntoken");
    let err = AltegioClient::new(config).unwrap_err();
    assert!(matches!(err, ApiError::ClientBuild { .. }));
}

#[test]
fn client_exposes_its_configuration() {
    let config = AltegioConfig::new("pt-1").with_user_token("ut-1");
    let client = AltegioClient::new(config.clone()).unwrap();
    assert_eq!(client.config(), &config);
}
