//! Identity-provider configuration baked in at build time.
//!
//! SYSTEM CONTEXT
//! ==============
//! The browser bundle has no process environment, so values come from
//! `option_env!` when the WASM crate is compiled. `from_lookup` keeps parsing
//! independent of where the values come from.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

pub const DEFAULT_IDENTITY_BASE_URL: &str = "https://identitytoolkit.googleapis.com/v1";
pub const DEFAULT_SECURE_TOKEN_BASE_URL: &str = "https://securetoken.googleapis.com/v1";

pub const API_KEY_VAR: &str = "EVDASH_IDENTITY_API_KEY";
pub const AUTH_DOMAIN_VAR: &str = "EVDASH_IDENTITY_AUTH_DOMAIN";
pub const PROJECT_ID_VAR: &str = "EVDASH_IDENTITY_PROJECT_ID";
pub const GOOGLE_CLIENT_ID_VAR: &str = "EVDASH_OAUTH_GOOGLE_CLIENT_ID";
pub const IDENTITY_BASE_URL_VAR: &str = "EVDASH_IDENTITY_BASE_URL";
pub const SECURE_TOKEN_BASE_URL_VAR: &str = "EVDASH_SECURE_TOKEN_BASE_URL";

/// Errors produced while reading identity configuration.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    /// A required variable was absent or blank.
    #[error("missing config: {var} not set")]
    Missing { var: &'static str },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IdentityConfig {
    pub api_key: String,
    pub auth_domain: Option<String>,
    pub project_id: Option<String>,
    /// Google OAuth web client ID. OAuth sign-in is disabled without it.
    pub google_client_id: Option<String>,
    pub identity_base_url: String,
    pub secure_token_base_url: String,
}

impl IdentityConfig {
    /// Build typed config from a key lookup.
    ///
    /// Required:
    /// - `EVDASH_IDENTITY_API_KEY`
    ///
    /// Optional:
    /// - `EVDASH_IDENTITY_AUTH_DOMAIN`, `EVDASH_IDENTITY_PROJECT_ID`
    /// - `EVDASH_OAUTH_GOOGLE_CLIENT_ID`
    /// - `EVDASH_IDENTITY_BASE_URL`: default Identity Toolkit v1 endpoint
    /// - `EVDASH_SECURE_TOKEN_BASE_URL`: default secure-token v1 endpoint
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Missing`] when the API key is absent or blank.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let value = |key: &str| lookup(key).map(|v| v.trim().to_owned()).filter(|v| !v.is_empty());

        let api_key = value(API_KEY_VAR).ok_or(ConfigError::Missing { var: API_KEY_VAR })?;
        let identity_base_url = value(IDENTITY_BASE_URL_VAR)
            .unwrap_or_else(|| DEFAULT_IDENTITY_BASE_URL.to_owned())
            .trim_end_matches('/')
            .to_owned();
        let secure_token_base_url = value(SECURE_TOKEN_BASE_URL_VAR)
            .unwrap_or_else(|| DEFAULT_SECURE_TOKEN_BASE_URL.to_owned())
            .trim_end_matches('/')
            .to_owned();

        Ok(Self {
            api_key,
            auth_domain: value(AUTH_DOMAIN_VAR),
            project_id: value(PROJECT_ID_VAR),
            google_client_id: value(GOOGLE_CLIENT_ID_VAR),
            identity_base_url,
            secure_token_base_url,
        })
    }

    /// Read config from the environment captured when this crate was compiled.
    ///
    /// # Errors
    ///
    /// Same as [`IdentityConfig::from_lookup`].
    pub fn from_build_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| {
            let raw = match key {
                API_KEY_VAR => option_env!("EVDASH_IDENTITY_API_KEY"),
                AUTH_DOMAIN_VAR => option_env!("EVDASH_IDENTITY_AUTH_DOMAIN"),
                PROJECT_ID_VAR => option_env!("EVDASH_IDENTITY_PROJECT_ID"),
                GOOGLE_CLIENT_ID_VAR => option_env!("EVDASH_OAUTH_GOOGLE_CLIENT_ID"),
                IDENTITY_BASE_URL_VAR => option_env!("EVDASH_IDENTITY_BASE_URL"),
                SECURE_TOKEN_BASE_URL_VAR => option_env!("EVDASH_SECURE_TOKEN_BASE_URL"),
                _ => None,
            };
            raw.map(str::to_owned)
        })
    }
}
