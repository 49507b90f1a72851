//! The three cleanup stages, run in order by [`crate::Janitor`].
//!
//! - [`list_stacks`]: fetch names of stacks in a cleanup-eligible status;
//! - [`filter_stacks`]: keep the ones carrying the selector tag that are old enough;
//! - [`delete_stacks`]: request deletion of each survivor, best-effort.
use std::fmt;

use serde::Serialize;

mod list;
pub use list::list_stacks;

mod filter;
pub use filter::{FilteredStacks, filter_stacks};

mod delete;
pub use delete::{DeleteFailure, DeleteReport, delete_stacks};

/// Stage that can abort a run, as named in logs, errors and metrics.
///
/// The delete stage never aborts, so it has no variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Stage {
    List,
    Filter,
}

impl Stage {
    #[inline]
    pub fn as_label(&self) -> &'static str {
        match self {
            Stage::List => "list",
            Stage::Filter => "filter",
        }
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_label())
    }
}

#[cfg(test)]
mod tests {
    use super::Stage;

    #[test]
    fn labels_match_serde_names() {
        for stage in [Stage::List, Stage::Filter] {
            let json = serde_json::to_string(&stage).unwrap();
            assert_eq!(json, format!("\"{}\"", stage.as_label()));
        }
    }
}
