//! The HTTP transport port and its reqwest adapter.
//!
//! The client only ever needs "GET this URL with these headers and give me the
//! status and body". [`HttpTransport`] is that seam; [`ReqwestTransport`] is
//! the production implementation. Connection pooling, TLS, and proxies are
//! whatever the underlying [`reqwest::Client`] provides.

use async_trait::async_trait;
use thiserror::Error;
use url::Url;

/// Status and body of a completed HTTP exchange, whatever the status.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    /// HTTP status code.
    pub status: u16,
    /// Raw response body.
    pub body: Vec<u8>,
}

impl HttpResponse {
    /// Returns `true` for any 2xx status.
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// The exchange could not be completed (connect, DNS, TLS, reading the body).
#[derive(Debug, Error)]
#[error("{message}")]
pub struct TransportError {
    message: String,
    #[source]
    source: Option<Box<dyn std::error::Error + Send + Sync>>,
}

impl TransportError {
    /// Creates an error with only a message.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            source: None,
        }
    }

    /// Creates an error wrapping the underlying cause.
    pub fn with_source(
        message: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }
}

/// Performs GET requests on behalf of [`crate::Client`].
///
/// Implementations must not retry: one call, one request.
#[async_trait]
pub trait HttpTransport: Send + Sync {
    /// Sends `GET url` with the given headers and returns the response,
    /// including non-2xx ones.
    async fn get(&self, url: &Url, headers: &[(&str, &str)]) -> Result<HttpResponse, TransportError>;
}

// ---------------------------------------------------------------------------

/// [`HttpTransport`] backed by [`reqwest`].
#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    client: reqwest::Client,
}

impl ReqwestTransport {
    /// Builds a transport with reqwest's defaults (rustls, pooled connections).
    pub fn new() -> Result<Self, TransportError> {
        let client = reqwest::Client::builder()
            .build()
            .map_err(|e| TransportError::with_source("failed to build reqwest client", e))?;
        Ok(Self { client })
    }

    /// Wraps an existing client, e.g. one configured with a proxy.
    pub fn with_client(client: reqwest::Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl HttpTransport for ReqwestTransport {
    async fn get(&self, url: &Url, headers: &[(&str, &str)]) -> Result<HttpResponse, TransportError> {
        let mut request = self.client.get(url.clone());
        for (name, value) in headers {
            request = request.header(*name, *value);
        }

        let response = request
            .send()
            .await
            .map_err(|e| TransportError::with_source(e.to_string(), e))?;
        let status = response.status().as_u16();
        let body = response
            .bytes()
            .await
            .map_err(|e| TransportError::with_source("failed to read response body", e))?;

        Ok(HttpResponse {
            status,
            body: body.to_vec(),
        })
    }
}
