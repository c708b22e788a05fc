//! Client configuration.
//!
//! Configuration is limited to what the REST API needs: where it lives, the
//! token to authenticate with, and an optional per-call timeout. It is supplied
//! programmatically or deserialised from whatever config file the embedding
//! application already loads; this crate never reads the environment.

use std::time::Duration;

use serde::{Deserialize, Deserializer};
use url::Url;

use crate::ClientError;

/// Production ZenHub API endpoint.
pub const DEFAULT_BASE_URL: &str = "https://api.zenhub.io";

/// Settings for a [`crate::Client`].
///
/// ```toml
/// token = "..."
/// base_url = "https://api.zenhub.io"   # optional
/// timeout_secs = 30                    # optional
/// ```
#[derive(Clone, Deserialize)]
pub struct ClientConfig {
    /// API token sent as `X-Authentication-Token`.
    token: String,

    /// Root of the REST API; paths such as `/p1/repositories/...` are appended.
    #[serde(default = "default_base_url")]
    base_url: String,

    /// Deadline applied to each call whose [`crate::RequestContext`] has none.
    #[serde(default, rename = "timeout_secs", deserialize_with = "deserialize_secs")]
    timeout: Option<Duration>,
}

impl ClientConfig {
    /// Creates a configuration for the production endpoint with no timeout.
    pub fn new(token: impl Into<String>) -> Self {
        Self {
            token: token.into(),
            base_url: default_base_url(),
            timeout: None,
        }
    }

    /// Points the client at another deployment (staging, a local stub).
    ///
    /// The URL is checked when the client is built.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Sets the default per-call timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Returns the configured base URL.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Returns the default per-call timeout, if any.
    pub fn timeout(&self) -> Option<Duration> {
        self.timeout
    }

    pub(crate) fn token(&self) -> &str {
        &self.token
    }

    /// Checks the configuration before any request is attempted.
    ///
    /// The token must be non-empty and usable as a header value.
    pub(crate) fn validate(&self) -> Result<(), ClientError> {
        let printable = self.token.bytes().all(|b| b.is_ascii_graphic());
        if self.token.is_empty() || !printable {
            return Err(ClientError::InvalidToken);
        }
        match Url::parse(&self.base_url) {
            Ok(url) if !url.cannot_be_a_base() => Ok(()),
            Ok(_) => Err(ClientError::InvalidBaseUrl {
                url: self.base_url.clone(),
                source: url::ParseError::RelativeUrlWithCannotBeABaseBase,
            }),
            Err(source) => Err(ClientError::InvalidBaseUrl {
                url: self.base_url.clone(),
                source,
            }),
        }
    }

    /// Joins `path` onto the base URL, tolerating a trailing slash on either side.
    pub(crate) fn endpoint(&self, path: &str) -> Result<Url, ClientError> {
        let raw = format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            path.trim_start_matches('/')
        );
        Url::parse(&raw).map_err(|source| ClientError::Request { url: raw, source })
    }
}

// The token must never reach logs.
impl std::fmt::Debug for ClientConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ClientConfig")
            .field("token", &"<redacted>")
            .field("base_url", &self.base_url)
            .field("timeout", &self.timeout)
            .finish()
    }
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

fn deserialize_secs<'de, D>(deserializer: D) -> Result<Option<Duration>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<u64>::deserialize(deserializer)?.map(Duration::from_secs))
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
