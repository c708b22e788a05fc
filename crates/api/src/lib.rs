//! ZenHub REST API client.
//!
//! Fetches board state and issue-event history for a repository and decodes
//! them into the types defined in the [`board`] crate.
//!
//! ## Architectural Layer
//!
//! **Infrastructure.** URL building, authentication headers, status handling,
//! cancellation, and the reqwest transport all live here. Decoding is delegated
//! to [`board::decode_board`] and [`board::decode_events`].
//!
//! Each call issues exactly one GET. There is no retrying, caching, or
//! pagination; every failure comes back as a [`ClientError`].
//!
//! ```no_run
//! # async fn demo() -> Result<(), api::ClientError> {
//! use api::{Client, RequestContext};
//! use board::RepositoryId;
//!
//! let client = Client::new("my-token")?;
//! let board = client
//!     .get_board(&RequestContext::new(), RepositoryId::new(123))
//!     .await?;
//! println!("{} pipelines", board.pipelines.len());
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod config;
pub mod context;
pub mod errors;
pub mod transport;

pub use client::{Client, AUTH_HEADER};
pub use config::{ClientConfig, DEFAULT_BASE_URL};
pub use context::RequestContext;
pub use errors::ClientError;
pub use transport::{HttpResponse, HttpTransport, ReqwestTransport, TransportError};
