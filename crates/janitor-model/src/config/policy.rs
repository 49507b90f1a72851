use time::OffsetDateTime;

use crate::{MaxAge, StackDetail};

/// Tag key/value pair a stack must carry to be considered for cleanup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TagSelector {
    pub key: String,
    pub value: String,
}

impl TagSelector {
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }

    pub fn matches(&self, detail: &StackDetail) -> bool {
        detail.tags.contains(&self.key, &self.value)
    }
}

impl std::fmt::Display for TagSelector {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}", self.key, self.value)
    }
}

/// Filter criteria applied to every described stack.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CleanupPolicy {
    pub selector: TagSelector,
    pub max_age: MaxAge,
}

impl CleanupPolicy {
    pub fn new(selector: TagSelector, max_age: MaxAge) -> Self {
        Self { selector, max_age }
    }

    /// Returns `true` when the stack carries the selector tag and is at least `max_age` old.
    ///
    /// The age boundary is inclusive.
    pub fn admits(&self, detail: &StackDetail, now: OffsetDateTime) -> bool {
        self.selector.matches(detail) && detail.age_at(now) >= self.max_age.as_duration()
    }
}
