//! Errors returned by the REST client.
//!
//! Every variant is fatal to the call that produced it. Nothing is retried
//! here; retry policy belongs to the caller.

use board::DecodeError;
use thiserror::Error;

use crate::transport::TransportError;

/// A client could not be built, or a call to the REST API failed.
#[derive(Debug, Error)]
pub enum ClientError {
    /// The API token is empty or cannot be sent as a header.
    ///
    /// Produced at construction; no request is ever attempted.
    #[error("invalid token")]
    InvalidToken,

    /// The configured base URL is not an absolute URL.
    #[error("invalid base URL {url:?}: {source}")]
    InvalidBaseUrl {
        /// The configured value.
        url: String,
        /// Why it did not parse as a base URL.
        #[source]
        source: url::ParseError,
    },

    /// The HTTP client backing the default transport could not be initialised.
    #[error("failed to initialise HTTP client: {source}")]
    HttpClient {
        /// Underlying reqwest builder failure.
        #[source]
        source: TransportError,
    },

    /// The request URL could not be built.
    ///
    /// Only reachable for a configuration that bypassed validation; a client
    /// built through [`crate::Client`] constructors has a parseable base URL.
    #[error("failed to create request {url:?}: {source}")]
    Request {
        /// The URL string that failed to parse.
        url: String,
        /// Underlying parse error.
        #[source]
        source: url::ParseError,
    },

    /// Network, DNS, TLS, or body-read failure.
    #[error("failed to send request {url:?}: {source}")]
    Transport {
        /// Request URL.
        url: String,
        /// Underlying transport failure.
        #[source]
        source: TransportError,
    },

    /// The API answered with a non-2xx status.
    ///
    /// `body` is the raw response body, kept verbatim for diagnostics.
    #[error("failed to send request [{status}] {url:?} {body}")]
    Status {
        /// HTTP status code.
        status: u16,
        /// Request URL.
        url: String,
        /// Response body, lossily decoded as UTF-8.
        body: String,
    },

    /// The API answered 2xx but the body did not decode.
    #[error("failed to unmarshal payload {url:?} {body}: {source}")]
    Decode {
        /// Request URL.
        url: String,
        /// Response body, lossily decoded as UTF-8.
        body: String,
        /// Why decoding failed.
        #[source]
        source: DecodeError,
    },

    /// The caller cancelled the call before the response arrived.
    #[error("request cancelled {url:?}")]
    Cancelled {
        /// Request URL.
        url: String,
    },

    /// The call's deadline passed before the response arrived.
    #[error("request timed out {url:?}")]
    Timeout {
        /// Request URL.
        url: String,
    },
}

impl ClientError {
    /// Returns `true` for errors raised while building the client.
    pub fn is_configuration(&self) -> bool {
        matches!(
            self,
            Self::InvalidToken | Self::InvalidBaseUrl { .. } | Self::HttpClient { .. }
        )
    }

    /// Returns the HTTP status for [`ClientError::Status`].
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Status { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Returns the unrecognised tag when decoding failed on the event discriminator.
    pub fn unknown_event_type(&self) -> Option<&str> {
        match self {
            Self::Decode { source, .. } => source.unknown_event_type(),
            _ => None,
        }
    }
}
