//! Decode errors shared by the history and webhook decoders.
//!
//! Both decoders are all-or-nothing: a [`DecodeError`] means no events were
//! produced for the input, never a partial batch.

use thiserror::Error;

/// A payload could not be turned into typed board data.
#[derive(Debug, Error)]
pub enum DecodeError {
    /// The discriminator named an event kind outside the closed [`crate::EventType`] set.
    ///
    /// In a history batch this rejects the whole batch.
    #[error("unknown event type {tag:?}")]
    UnknownEventType {
        /// The offending tag, verbatim (may be empty).
        tag: String,
    },

    /// The body is not valid JSON or does not match the expected schema.
    #[error("invalid JSON payload: {source}")]
    Json {
        /// Underlying parser error, including line and column.
        #[from]
        source: serde_json::Error,
    },

    /// An event's `created_at` is not an RFC 3339 timestamp.
    #[error("invalid timestamp {value:?}: {source}")]
    Timestamp {
        /// The raw timestamp string from the payload.
        value: String,
        /// Underlying chrono parse error.
        #[source]
        source: chrono::ParseError,
    },

    /// A URL-encoded form body could not be parsed.
    #[error("failed to parse data: {reason}")]
    Form {
        /// What was wrong with the body.
        reason: String,
    },
}

impl DecodeError {
    /// Returns the offending tag if this is an [`DecodeError::UnknownEventType`].
    pub fn unknown_event_type(&self) -> Option<&str> {
        match self {
            Self::UnknownEventType { tag } => Some(tag),
            _ => None,
        }
    }
}
