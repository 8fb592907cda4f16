//! User lookup performed by the login form on submit.
//!
//! The form does not authenticate anything: submitting issues one `GET` to a
//! fixed demo resource and renders whatever user comes back. The entered
//! credentials are never sent.
//!
//! ERROR HANDLING
//! ==============
//! `FetchError` keeps the failure cause for logging only. The form collapses
//! every variant into its single error flag.

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::types::User;
use crate::config::LoginConfig;

/// Fixed resource fetched on every submission.
pub const USER_ENDPOINT: &str = "https://jsonplaceholder.typicode.com/users/1";

/// Errors from a single user lookup.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FetchError {
    /// The HTTP client could not be constructed.
    #[error("HTTP client build failed: {0}")]
    ClientBuild(String),

    /// The request never produced a response (DNS, connect, TLS, reset).
    #[error("user request failed: {0}")]
    Request(String),

    /// The endpoint answered with a non-success status.
    #[error("user request failed: status {status}")]
    Status { status: u16 },

    /// The response body was not a user record.
    #[error("user response parse failed: {0}")]
    Decode(String),
}

/// Source of the user record shown after a submission. Enables mocking in tests.
#[cfg_attr(not(target_arch = "wasm32"), async_trait::async_trait)]
#[cfg_attr(target_arch = "wasm32", async_trait::async_trait(?Send))]
pub trait UserSource: Send + Sync {
    /// Fetch the user record.
    ///
    /// # Errors
    ///
    /// Returns a [`FetchError`] if the request fails, the status is not 2xx,
    /// or the body does not decode.
    async fn fetch_user(&self) -> Result<User, FetchError>;
}

// =============================================================================
// HTTP SOURCE
// =============================================================================

/// `reqwest`-backed source hitting a single fixed URL.
///
/// Uses client defaults only: no timeout, no retry, no extra headers.
#[derive(Clone, Debug)]
pub struct HttpUserSource {
    http: reqwest::Client,
    endpoint: String,
}

impl HttpUserSource {
    /// Build a source for `endpoint`.
    ///
    /// # Errors
    ///
    /// Returns [`FetchError::ClientBuild`] if the HTTP client fails to build.
    pub fn new(endpoint: impl Into<String>) -> Result<Self, FetchError> {
        let http = reqwest::Client::builder()
            .build()
            .map_err(|e| FetchError::ClientBuild(e.to_string()))?;
        Ok(Self { http, endpoint: endpoint.into() })
    }

    /// Build a source for the endpoint named in `config`.
    ///
    /// # Errors
    ///
    /// Returns [`FetchError::ClientBuild`] if the HTTP client fails to build.
    pub fn from_config(config: &LoginConfig) -> Result<Self, FetchError> {
        Self::new(config.endpoint.clone())
    }

    /// The URL this source requests.
    #[must_use]
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[cfg_attr(not(target_arch = "wasm32"), async_trait::async_trait)]
#[cfg_attr(target_arch = "wasm32", async_trait::async_trait(?Send))]
impl UserSource for HttpUserSource {
    async fn fetch_user(&self) -> Result<User, FetchError> {
        tracing::debug!(endpoint = %self.endpoint, "fetching user");

        let response = self
            .http
            .get(&self.endpoint)
            .send()
            .await
            .map_err(|e| FetchError::Request(e.to_string()))?;

        check_status(response.status().as_u16())?;

        let text = response
            .text()
            .await
            .map_err(|e| FetchError::Request(e.to_string()))?;

        parse_user(&text)
    }
}

/// Accept 2xx, reject everything else.
fn check_status(status: u16) -> Result<(), FetchError> {
    if (200..300).contains(&status) {
        Ok(())
    } else {
        Err(FetchError::Status { status })
    }
}

fn parse_user(body: &str) -> Result<User, FetchError> {
    serde_json::from_str(body).map_err(|e| FetchError::Decode(e.to_string()))
}
