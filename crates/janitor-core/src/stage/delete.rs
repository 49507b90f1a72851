use serde::Serialize;
use tracing::{error, info, instrument};

use crate::provider::StackProvider;

/// One stack whose delete request was rejected.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DeleteFailure {
    pub stack: String,
    pub reason: String,
}

/// Outcome of the delete stage.
///
/// `attempted == deleted + failures.len()` always holds.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct DeleteReport {
    pub attempted: usize,
    pub deleted: usize,
    pub failures: Vec<DeleteFailure>,
}

impl DeleteReport {
    pub fn failed(&self) -> usize {
        self.failures.len()
    }
}

/// Request deletion of every stack in `names`, one at a time.
///
/// A rejected request is logged and recorded; the loop moves on to the next name.
/// Only acknowledged requests count as deleted.
#[instrument(level = "debug", skip_all, fields(provider = provider.name(), stacks = names.len()))]
pub async fn delete_stacks(provider: &dyn StackProvider, names: &[String]) -> DeleteReport {
    info!("deleting stacks");

    let mut report = DeleteReport::default();
    for name in names {
        report.attempted += 1;
        match provider.delete_stack(name).await {
            Ok(()) => {
                report.deleted += 1;
                info!(stack = %name, "delete requested");
            }
            Err(e) => {
                error!(stack = %name, error = %e, "unable to delete stack");
                report.failures.push(DeleteFailure {
                    stack: name.clone(),
                    reason: e.to_string(),
                });
            }
        }
    }

    info!(
        attempted = report.attempted,
        deleted = report.deleted,
        failed = report.failed(),
        "deleted {} stacks",
        report.deleted,
    );
    report
}
