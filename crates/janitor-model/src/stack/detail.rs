use serde::{Deserialize, Serialize};
use time::{Duration, OffsetDateTime};

use crate::Tags;

/// Minimal identifier returned by the list call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StackSummary {
    pub name: String,
}

impl StackSummary {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

/// Full stack description fetched once per stack during filtering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StackDetail {
    pub name: String,
    pub tags: Tags,
    pub created_at: OffsetDateTime,
}

impl StackDetail {
    pub fn new(name: impl Into<String>, tags: Tags, created_at: OffsetDateTime) -> Self {
        Self {
            name: name.into(),
            tags,
            created_at,
        }
    }

    /// Elapsed time between creation and `now`.
    ///
    /// Negative when the provider clock is ahead of ours.
    pub fn age_at(&self, now: OffsetDateTime) -> Duration {
        now - self.created_at
    }
}
