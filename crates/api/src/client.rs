//! The REST client façade.

use std::sync::Arc;

use board::{Board, Event, IssueNumber, RepositoryId};
use tokio::time::Instant;
use tracing::{debug, instrument, warn};
use url::Url;

use crate::{ClientConfig, ClientError, HttpTransport, ReqwestTransport, RequestContext};

/// Header carrying the API token.
pub const AUTH_HEADER: &str = "X-Authentication-Token";

/// Authenticated client for the ZenHub REST API.
///
/// Holds immutable configuration only, so a single instance can be shared
/// across tasks (`Client` is `Send + Sync`; wrap it in an `Arc` or clone it).
#[derive(Clone)]
pub struct Client {
    config: ClientConfig,
    transport: Arc<dyn HttpTransport>,
}

impl Client {
    /// Creates a client for the production API.
    ///
    /// # Errors
    ///
    /// [`ClientError::InvalidToken`] if `token` is empty.
    pub fn new(token: impl Into<String>) -> Result<Self, ClientError> {
        Self::from_config(ClientConfig::new(token))
    }

    /// Creates a client from explicit configuration, using reqwest for transport.
    pub fn from_config(config: ClientConfig) -> Result<Self, ClientError> {
        config.validate()?;
        let transport =
            ReqwestTransport::new().map_err(|source| ClientError::HttpClient { source })?;
        Ok(Self {
            config,
            transport: Arc::new(transport),
        })
    }

    /// Creates a client that sends requests through `transport`.
    pub fn with_transport(
        config: ClientConfig,
        transport: Arc<dyn HttpTransport>,
    ) -> Result<Self, ClientError> {
        config.validate()?;
        Ok(Self { config, transport })
    }

    /// Returns the base URL requests are sent to.
    pub fn base_url(&self) -> &str {
        self.config.base_url()
    }

    /// Fetches the board of a repository.
    #[instrument(skip_all, fields(repo_id = %repo_id))]
    pub async fn get_board(
        &self,
        ctx: &RequestContext,
        repo_id: RepositoryId,
    ) -> Result<Board, ClientError> {
        let url = self
            .config
            .endpoint(&format!("p1/repositories/{repo_id}/board"))?;
        let body = self.get(ctx, &url).await?;

        board::decode_board(&body).map_err(|source| decode_error(&url, &body, source))
    }

    /// Fetches every event recorded for an issue, in the order ZenHub returns
    /// them.
    #[instrument(skip_all, fields(repo_id = %repo_id, issue_number = %issue_number))]
    pub async fn get_issue_events(
        &self,
        ctx: &RequestContext,
        repo_id: RepositoryId,
        issue_number: IssueNumber,
    ) -> Result<Vec<Event>, ClientError> {
        let url = self.config.endpoint(&format!(
            "p1/repositories/{repo_id}/issues/{issue_number}/events"
        ))?;
        let body = self.get(ctx, &url).await?;

        board::decode_events(&body).map_err(|source| decode_error(&url, &body, source))
    }

    /// Sends one GET and returns the body of a 2xx response.
    async fn get(&self, ctx: &RequestContext, url: &Url) -> Result<Vec<u8>, ClientError> {
        if ctx.is_cancelled() {
            return Err(ClientError::Cancelled {
                url: url.to_string(),
            });
        }

        let deadline = ctx
            .deadline()
            .or_else(|| self.config.timeout().map(|t| Instant::now() + t));
        let headers = [
            ("Content-Type", "application/json"),
            (AUTH_HEADER, self.config.token()),
        ];

        let response = tokio::select! {
            biased;
            () = ctx.cancellation_token().cancelled() => {
                warn!(%url, "request cancelled");
                return Err(ClientError::Cancelled { url: url.to_string() });
            }
            () = deadline_elapsed(deadline) => {
                warn!(%url, "request timed out");
                return Err(ClientError::Timeout { url: url.to_string() });
            }
            result = self.transport.get(url, &headers) => {
                result.map_err(|source| ClientError::Transport { url: url.to_string(), source })?
            }
        };

        debug!(status = response.status, bytes = response.body.len(), "received response");

        if !response.is_success() {
            return Err(ClientError::Status {
                status: response.status,
                url: url.to_string(),
                body: String::from_utf8_lossy(&response.body).into_owned(),
            });
        }
        Ok(response.body)
    }
}

impl std::fmt::Debug for Client {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Client").field("config", &self.config).finish_non_exhaustive()
    }
}

async fn deadline_elapsed(deadline: Option<Instant>) {
    match deadline {
        Some(deadline) => tokio::time::sleep_until(deadline).await,
        None => std::future::pending().await,
    }
}

fn decode_error(url: &Url, body: &[u8], source: board::DecodeError) -> ClientError {
    ClientError::Decode {
        url: url.to_string(),
        body: String::from_utf8_lossy(body).into_owned(),
        source,
    }
}

#[cfg(test)]
#[path = "client_tests.rs"]
mod tests;
