//! The closed event taxonomy.
//!
//! ZenHub reports two kinds of issue history (estimate changes and pipeline
//! transfers) and pushes one kind of webhook (issue transfer). Each kind is a
//! struct; [`Event`] is the closed sum over them. Every kind answers
//! [`TaggedEvent::event_type`] with exactly one [`EventType`], and no two kinds
//! share a tag.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::{DecodeError, Estimate, IssueNumber, Pipeline, Timestamp, UserId};

// ---------------------------------------------------------------------------
// Tags
// ---------------------------------------------------------------------------

/// The wire discriminator of an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EventType {
    /// An issue's estimate was set, changed or cleared.
    #[serde(rename = "estimateIssue")]
    EstimateIssue,
    /// An issue moved between pipelines (history API).
    #[serde(rename = "transferIssue")]
    TransferIssue,
    /// An issue moved between pipelines (webhook).
    #[serde(rename = "issue_transfer")]
    IssueTransfer,
}

impl EventType {
    /// Returns the tag exactly as it appears on the wire.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::EstimateIssue => "estimateIssue",
            Self::TransferIssue => "transferIssue",
            Self::IssueTransfer => "issue_transfer",
        }
    }
}

impl std::fmt::Display for EventType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EventType {
    type Err = DecodeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "estimateIssue" => Ok(Self::EstimateIssue),
            "transferIssue" => Ok(Self::TransferIssue),
            "issue_transfer" => Ok(Self::IssueTransfer),
            other => Err(DecodeError::UnknownEventType {
                tag: other.to_string(),
            }),
        }
    }
}

// ---------------------------------------------------------------------------

/// Anything that can report its [`EventType`].
///
/// Implemented by every event struct and by [`Event`] itself, so callers can
/// branch on the tag before matching on the concrete variant.
pub trait TaggedEvent {
    /// Returns the event's discriminator.
    fn event_type(&self) -> EventType;
}

// ---------------------------------------------------------------------------
// Event kinds
// ---------------------------------------------------------------------------

/// An issue had its estimate set, changed or unset.
///
/// `from_estimate` is `None` when the issue was previously unestimated;
/// `to_estimate` is `None` when the estimate was cleared.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EstimateIssueEvent {
    /// User who changed the estimate.
    pub user_id: UserId,
    /// When the change happened.
    pub created_at: Timestamp,
    /// Estimate before the change; `None` if the issue was unestimated.
    pub from_estimate: Option<Estimate>,
    /// Estimate after the change; `None` if it was cleared.
    pub to_estimate: Option<Estimate>,
}

impl TaggedEvent for EstimateIssueEvent {
    fn event_type(&self) -> EventType {
        EventType::EstimateIssue
    }
}

/// An issue moved from one pipeline to another.
///
/// `from_pipeline` is `None` when the issue was created directly into
/// `to_pipeline`. Both pipelines carry only a name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransferIssueEvent {
    /// User who moved the issue.
    pub user_id: UserId,
    /// When the move happened.
    pub created_at: Timestamp,
    /// Pipeline the issue left; `None` when it was created into `to_pipeline`.
    pub from_pipeline: Option<Pipeline>,
    /// Pipeline the issue entered.
    pub to_pipeline: Option<Pipeline>,
}

impl TaggedEvent for TransferIssueEvent {
    fn event_type(&self) -> EventType {
        EventType::TransferIssue
    }
}

/// A webhook notification that an issue moved between pipelines.
///
/// Every field is the raw string ZenHub posted; missing fields are empty.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IssueTransferWebhookEvent {
    /// Link to the issue on GitHub.
    pub github_url: String,
    /// GitHub organization owning the repository.
    pub organization: String,
    /// Repository name.
    pub repo: String,
    /// GitHub login of the user who moved the issue.
    pub user_name: String,
    /// Issue number as posted; see [`Self::parsed_issue_number`].
    pub issue_number: String,
    /// Issue title.
    pub issue_title: String,
    /// Pipeline the issue entered.
    pub to_pipeline_name: String,
    /// Pipeline the issue left.
    pub from_pipeline_name: String,
}

impl IssueTransferWebhookEvent {
    /// Interprets `issue_number` as an [`IssueNumber`], if it is one.
    pub fn parsed_issue_number(&self) -> Option<IssueNumber> {
        self.issue_number.parse::<u64>().ok().map(IssueNumber::new)
    }
}

impl TaggedEvent for IssueTransferWebhookEvent {
    fn event_type(&self) -> EventType {
        EventType::IssueTransfer
    }
}

// ---------------------------------------------------------------------------

/// One decoded event of any kind.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// From the history API, tag `estimateIssue`.
    EstimateIssue(EstimateIssueEvent),
    /// From the history API, tag `transferIssue`.
    TransferIssue(TransferIssueEvent),
    /// From a webhook, tag `issue_transfer`.
    IssueTransferWebhook(IssueTransferWebhookEvent),
}

impl Event {
    /// When the event happened. Webhook notifications carry no timestamp.
    pub fn created_at(&self) -> Option<Timestamp> {
        match self {
            Self::EstimateIssue(e) => Some(e.created_at),
            Self::TransferIssue(e) => Some(e.created_at),
            Self::IssueTransferWebhook(_) => None,
        }
    }
}

impl TaggedEvent for Event {
    fn event_type(&self) -> EventType {
        match self {
            Self::EstimateIssue(e) => e.event_type(),
            Self::TransferIssue(e) => e.event_type(),
            Self::IssueTransferWebhook(e) => e.event_type(),
        }
    }
}

impl From<EstimateIssueEvent> for Event {
    fn from(e: EstimateIssueEvent) -> Self {
        Self::EstimateIssue(e)
    }
}

impl From<TransferIssueEvent> for Event {
    fn from(e: TransferIssueEvent) -> Self {
        Self::TransferIssue(e)
    }
}

impl From<IssueTransferWebhookEvent> for Event {
    fn from(e: IssueTransferWebhookEvent) -> Self {
        Self::IssueTransferWebhook(e)
    }
}

#[cfg(test)]
#[path = "events_tests.rs"]
mod tests;
