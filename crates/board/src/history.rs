//! Decoders for the board and issue-event REST responses.
//!
//! The events endpoint returns a JSON array of envelopes. Each envelope has the
//! union of every event kind's fields and a string `type` naming which kind it
//! really is. ZenHub does not guarantee the unused fields are absent, so the
//! decoder copies only the fields that belong to the selected kind.

use tracing::{debug, warn};

use crate::{
    Board, DecodeError, Estimate, EstimateIssueEvent, Event, EventType, Pipeline, Timestamp,
    TransferIssueEvent, UserId,
};

/// Wire shape of one history entry: every field of every kind.
///
/// A missing or null `type` is kept as `None` so it surfaces as an unknown
/// event type with an empty tag rather than a schema error.
#[derive(Debug, serde::Deserialize)]
struct Envelope {
    user_id: UserId,
    #[serde(default, rename = "type")]
    kind: Option<String>,
    created_at: String,
    #[serde(default)]
    from_estimate: Option<Estimate>,
    #[serde(default)]
    to_estimate: Option<Estimate>,
    #[serde(default)]
    from_pipeline: Option<Pipeline>,
    #[serde(default)]
    to_pipeline: Option<Pipeline>,
}

impl Envelope {
    fn into_event(self) -> Result<Event, DecodeError> {
        let tag = self.kind.unwrap_or_default();

        match tag.parse::<EventType>() {
            Ok(EventType::EstimateIssue) => Ok(EstimateIssueEvent {
                user_id: self.user_id,
                created_at: parse_created_at(&self.created_at)?,
                from_estimate: self.from_estimate,
                to_estimate: self.to_estimate,
            }
            .into()),
            Ok(EventType::TransferIssue) => Ok(TransferIssueEvent {
                user_id: self.user_id,
                created_at: parse_created_at(&self.created_at)?,
                from_pipeline: self.from_pipeline,
                to_pipeline: self.to_pipeline,
            }
            .into()),
            // Webhook-only tag; never valid in a history response.
            Ok(EventType::IssueTransfer) | Err(_) => Err(DecodeError::UnknownEventType { tag }),
        }
    }
}

fn parse_created_at(value: &str) -> Result<Timestamp, DecodeError> {
    Timestamp::parse(value).map_err(|source| DecodeError::Timestamp {
        value: value.to_string(),
        source,
    })
}

/// Decodes an issue-event history response into typed events, preserving
/// order.
///
/// Any bad envelope (unknown `type`, unparsable `created_at`, schema mismatch)
/// rejects the whole batch.
pub fn decode_events(body: &[u8]) -> Result<Vec<Event>, DecodeError> {
    let envelopes: Vec<Envelope> = serde_json::from_slice(body)?;
    debug!(count = envelopes.len(), "decoding issue event history");

    envelopes
        .into_iter()
        .map(Envelope::into_event)
        .collect::<Result<Vec<_>, _>>()
        .inspect_err(|e| {
            if let Some(tag) = e.unknown_event_type() {
                warn!(tag, "rejecting event history with unknown event type");
            }
        })
}

/// Decodes a board response.
pub fn decode_board(body: &[u8]) -> Result<Board, DecodeError> {
    let board: Board = serde_json::from_slice(body)?;
    debug!(pipelines = board.pipelines.len(), "decoded board");
    Ok(board)
}

#[cfg(test)]
#[path = "history_tests.rs"]
mod tests;
