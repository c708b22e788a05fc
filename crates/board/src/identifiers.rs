//! Newtype domain identifiers.
//!
//! ZenHub addresses almost everything with a bare integer: repositories, issues
//! and users. Each one gets its own newtype so a [`RepositoryId`] can never be
//! passed where an [`IssueNumber`] is expected, even though both are `u64` on
//! the wire.

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Macro for u64-wrapped newtypes (GitHub/ZenHub-assigned integers).
// Generates: struct (Copy, transparent serde), new(), as_u64(), Display.
// ---------------------------------------------------------------------------
macro_rules! u64_id {
    (
        $(#[$attr:meta])*
        $name:ident
    ) => {
        $(#[$attr])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(u64);

        impl $name {
            /// Creates a new identifier from a raw integer.
            pub fn new(value: u64) -> Self {
                Self(value)
            }

            /// Returns the underlying integer value.
            pub fn as_u64(self) -> u64 {
                self.0
            }
        }

        impl From<u64> for $name {
            fn from(value: u64) -> Self {
                Self(value)
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.0)
            }
        }
    };
}

u64_id! {
    /// Identifies a GitHub repository by its numeric id.
    ///
    /// ZenHub's REST paths take the numeric repository id, not `"owner/repo"`.
    RepositoryId
}

u64_id! {
    /// The issue number within a repository (unique per repository).
    IssueNumber
}

u64_id! {
    /// Identifies the GitHub user who triggered an event.
    UserId
}

// ---------------------------------------------------------------------------

/// Identifies a pipeline (board column) within a workspace.
///
/// Only populated in board responses; pipelines embedded in events carry a
/// name but no id.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PipelineId(String);

impl PipelineId {
    /// Creates a new identifier, returning `None` if the value is empty.
    pub fn new(value: impl Into<String>) -> Option<Self> {
        let v = value.into();
        if v.is_empty() {
            None
        } else {
            Some(Self(v))
        }
    }

    /// Returns the identifier as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for PipelineId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
#[path = "identifiers_tests.rs"]
mod tests;
