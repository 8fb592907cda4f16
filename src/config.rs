//! Login form configuration parsed from environment variables.

use crate::net::api::USER_ENDPOINT;

/// Overrides the user lookup URL, e.g. to point at a local stub.
pub const ENDPOINT_VAR: &str = "LOGIN_USER_ENDPOINT";

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("{var} is set but empty")]
    EmptyEndpoint { var: &'static str },

    #[error("{var} must be an http(s) URL, got '{value}'")]
    InvalidEndpoint { var: &'static str, value: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoginConfig {
    pub endpoint: String,
}

impl Default for LoginConfig {
    fn default() -> Self {
        Self { endpoint: USER_ENDPOINT.to_owned() }
    }
}

impl LoginConfig {
    /// Build config from the process environment.
    ///
    /// Optional:
    /// - `LOGIN_USER_ENDPOINT`: default is the fixed demo resource
    ///
    /// # Errors
    ///
    /// Returns an error if the endpoint override is empty or not an http(s) URL.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build config from an arbitrary key lookup.
    ///
    /// # Errors
    ///
    /// Same as [`LoginConfig::from_env`].
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let endpoint = parse_endpoint(lookup(ENDPOINT_VAR).as_deref())?;
        Ok(Self { endpoint })
    }
}

fn parse_endpoint(raw: Option<&str>) -> Result<String, ConfigError> {
    let Some(raw) = raw else {
        return Ok(USER_ENDPOINT.to_owned());
    };
    let value = raw.trim();
    if value.is_empty() {
        return Err(ConfigError::EmptyEndpoint { var: ENDPOINT_VAR });
    }
    if !(value.starts_with("http://") || value.starts_with("https://")) {
        return Err(ConfigError::InvalidEndpoint { var: ENDPOINT_VAR, value: value.to_owned() });
    }
    Ok(value.to_owned())
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
