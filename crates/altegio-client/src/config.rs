//! Session configuration for the Alteg.io API.
//!
//! A session is just three strings: where the API lives and which tokens
//! authenticate against it. Configurations are plain values; build as many
//! differently-scoped clients as you need, there is no ambient state.

use std::env;

use thiserror::Error;

/// Public production endpoint of the Alteg.io REST API.
pub const DEFAULT_BASE_URL: &str = "https://api.alteg.io/api/v1";

/// Credentials and endpoint for one API session.
///
/// The partner token is always required. The user token unlocks the
/// account-scoped endpoints (companies, clients) and comes from
/// [`AltegioClient::authenticate`]; leave it unset for partner-only calls.
///
/// [`AltegioClient::authenticate`]: crate::client::AltegioClient::authenticate
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AltegioConfig {
    pub base_url: String,
    pub partner_token: String,
    pub user_token: Option<String>,
}

impl AltegioConfig {
    /// Partner-only session against the production endpoint.
    pub fn new(partner_token: impl Into<String>) -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            partner_token: partner_token.into(),
            user_token: None,
        }
    }

    pub fn with_user_token(mut self, user_token: impl Into<String>) -> Self {
        self.user_token = Some(user_token.into());
        self
    }

    /// Point the session at a different endpoint, e.g. a staging mirror.
    /// A trailing slash is trimmed so path joining stays predictable.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into();
        self.base_url = base_url.trim_end_matches('/').to_string();
        self
    }

    /// Read the session from `ALTEGIO_PARTNER_TOKEN`, `ALTEGIO_USER_TOKEN`
    /// and `ALTEGIO_BASE_URL`.
    ///
    /// Only the partner token is required; empty variables count as unset.
    ///
    /// # Errors
    ///
    /// [`ConfigError::MissingVar`] when `ALTEGIO_PARTNER_TOKEN` is absent
    /// or empty.
    pub fn from_env() -> Result<Self, ConfigError> {
        let partner_token = read_var("ALTEGIO_PARTNER_TOKEN")
            .ok_or(ConfigError::MissingVar("ALTEGIO_PARTNER_TOKEN"))?;

        let mut config = Self::new(partner_token);
        if let Some(user_token) = read_var("ALTEGIO_USER_TOKEN") {
            config = config.with_user_token(user_token);
        }
        if let Some(base_url) = read_var("ALTEGIO_BASE_URL") {
            config = config.with_base_url(base_url);
        }
        Ok(config)
    }
}

fn read_var(name: &str) -> Option<String> {
    env::var(name).ok().filter(|value| !value.is_empty())
}

/// Failures while assembling a session from the environment.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("environment variable {0} is not set")]
    MissingVar(&'static str),
}
