//! ZenHub board domain.
//!
//! This crate holds every domain concept the client works with: newtype
//! identifiers, the board value types, the closed event taxonomy, and the pure
//! decoders that turn REST response bodies into those types. The `api` and
//! `webhook` crates feed bytes in; nothing here performs I/O.
//!
//! ## Module Layout
//!
//! | Module | Contents |
//! |--------|----------|
//! | [`identifiers`] | Newtype identifiers (`RepositoryId`, `IssueNumber`, etc.) |
//! | [`types`] | Board value types (`Board`, `Pipeline`, `Issue`, `Estimate`, `Timestamp`) |
//! | [`events`] | The [`Event`] sum type and its [`EventType`] tags |
//! | [`history`] | Decoders for the board and event-history responses |
//! | [`errors`] | [`DecodeError`] |

pub mod errors;
pub mod events;
pub mod history;
pub mod identifiers;
pub mod types;

// Re-export everything at the crate root for ergonomic usage by downstream crates.
pub use errors::DecodeError;
pub use events::{
    EstimateIssueEvent, Event, EventType, IssueTransferWebhookEvent, TaggedEvent,
    TransferIssueEvent,
};
pub use history::{decode_board, decode_events};
pub use identifiers::{IssueNumber, PipelineId, RepositoryId, UserId};
pub use types::{Board, Estimate, Issue, Pipeline, Timestamp};
