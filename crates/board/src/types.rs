//! Board value types mirroring the ZenHub REST schema.
//!
//! These are plain data snapshots built once at decode time. Field names match
//! the wire format so a [`Board`] serialises back to the shape it was read
//! from, pipelines and issues in their original order.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

use crate::{IssueNumber, PipelineId};

// ---------------------------------------------------------------------------
// Estimates
// ---------------------------------------------------------------------------

/// The numeric size of an issue (story points or similar).
///
/// Always wrapped in `Option` where it appears: an issue or event without an
/// estimate is different from one estimated at zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Estimate {
    /// Estimate value as configured in ZenHub.
    pub value: u32,
}

impl Estimate {
    /// Creates an [`Estimate`] with the given value.
    pub fn new(value: u32) -> Self {
        Self { value }
    }
}

impl std::fmt::Display for Estimate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.value)
    }
}

// ---------------------------------------------------------------------------
// Board
// ---------------------------------------------------------------------------

/// An issue as placed on a board.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Issue {
    /// Issue number, unique within the repository.
    pub issue_number: IssueNumber,

    /// Estimate, if one has been set.
    #[serde(default)]
    pub estimate: Option<Estimate>,

    /// Zero-based ordering within the containing pipeline.
    #[serde(default, deserialize_with = "null_as_default")]
    pub position: u32,

    /// Whether the issue is an epic.
    #[serde(default, deserialize_with = "null_as_default")]
    pub is_epic: bool,
}

impl Issue {
    /// Returns the estimate value, or `None` when the issue is unestimated.
    pub fn estimate_value(&self) -> Option<u32> {
        self.estimate.map(|e| e.value)
    }
}

// ---------------------------------------------------------------------------

/// A named workflow column (e.g. `"Backlog"`, `"In Progress"`).
///
/// The same type serves two field-completeness contracts. On a [`Board`] the
/// `id` and `issues` are populated. Inside a transfer event ZenHub sends only
/// the `name`, so `id` is `None` and `issues` is empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pipeline {
    /// Pipeline id; absent on event payloads.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<PipelineId>,

    /// Display name of the pipeline.
    pub name: String,

    /// Issues in board order; empty on event payloads.
    #[serde(default, deserialize_with = "null_as_default")]
    pub issues: Vec<Issue>,
}

impl Pipeline {
    /// Creates a name-only pipeline, the shape carried by transfer events.
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            id: None,
            name: name.into(),
            issues: Vec::new(),
        }
    }
}

// ---------------------------------------------------------------------------

/// The board of a single repository: its pipelines in column order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    /// Pipelines in board column order.
    pub pipelines: Vec<Pipeline>,
}

impl Board {
    /// Returns the first pipeline with the given name.
    pub fn pipeline(&self, name: &str) -> Option<&Pipeline> {
        self.pipelines.iter().find(|p| p.name == name)
    }

    /// Locates an issue on the board, returning it with its pipeline.
    pub fn issue(&self, number: IssueNumber) -> Option<(&Pipeline, &Issue)> {
        self.pipelines.iter().find_map(|p| {
            p.issues
                .iter()
                .find(|i| i.issue_number == number)
                .map(|i| (p, i))
        })
    }
}

/// ZenHub sends `null` for some unset scalars and lists; treat it like an
/// absent key.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Option::unwrap_or_default)
}

// ---------------------------------------------------------------------------
// Time
// ---------------------------------------------------------------------------

/// A UTC wall-clock timestamp.
///
/// Wraps [`chrono::DateTime<Utc>`] so callers never depend on `chrono` types
/// directly; the underlying representation can change without affecting the
/// domain API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Timestamp(DateTime<Utc>);

impl Timestamp {
    /// Creates a [`Timestamp`] from a [`DateTime<Utc>`].
    pub fn from_utc(dt: DateTime<Utc>) -> Self {
        Self(dt)
    }

    /// Parses an RFC 3339 timestamp such as `2015-12-11T19:43:22.296Z`,
    /// normalising any offset to UTC.
    pub fn parse(value: &str) -> Result<Self, chrono::ParseError> {
        DateTime::parse_from_rfc3339(value).map(|dt| Self(dt.with_timezone(&Utc)))
    }

    /// Returns the underlying [`DateTime<Utc>`].
    pub fn as_datetime(self) -> DateTime<Utc> {
        self.0
    }
}

impl std::fmt::Display for Timestamp {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0.to_rfc3339())
    }
}

#[cfg(test)]
#[path = "types_tests.rs"]
mod tests;
