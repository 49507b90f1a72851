use std::fmt;

use serde::{Deserialize, Serialize};

/// Lifecycle states a stack can be listed in.
///
/// Only the stable states the cleanup cares about are modelled; stacks that are
/// mid-create, mid-update or already deleted are never requested.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum StackStatus {
    CreateComplete,
    CreateFailed,
    UpdateComplete,
    DeleteFailed,
}

/// Statuses requested by the lister: a delete issued against any of them is meaningful.
pub const CLEANUP_STATUSES: [StackStatus; 4] = [
    StackStatus::CreateComplete,
    StackStatus::CreateFailed,
    StackStatus::UpdateComplete,
    StackStatus::DeleteFailed,
];

impl StackStatus {
    /// Provider wire name, e.g. `CREATE_COMPLETE`.
    pub fn as_str(&self) -> &'static str {
        match self {
            StackStatus::CreateComplete => "CREATE_COMPLETE",
            StackStatus::CreateFailed => "CREATE_FAILED",
            StackStatus::UpdateComplete => "UPDATE_COMPLETE",
            StackStatus::DeleteFailed => "DELETE_FAILED",
        }
    }
}

impl fmt::Display for StackStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
