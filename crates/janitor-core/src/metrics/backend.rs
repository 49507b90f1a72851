use std::sync::Arc;

use crate::stage::Stage;

/// Result of a single delete request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeleteOutcome {
    Deleted,
    Failed,
}

impl DeleteOutcome {
    /// Return label value for metrics.
    #[inline]
    pub fn as_label(&self) -> &'static str {
        match self {
            DeleteOutcome::Deleted => "deleted",
            DeleteOutcome::Failed => "failed",
        }
    }
}

/// How a whole run ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunOutcome {
    /// All three stages ran (individual deletes may still have failed).
    Completed,
    /// A list or filter failure cut the run short.
    Aborted,
}

impl RunOutcome {
    #[inline]
    pub fn as_label(&self) -> &'static str {
        match self {
            RunOutcome::Completed => "completed",
            RunOutcome::Aborted => "aborted",
        }
    }
}

/// Backend metrics collection interface.
///
/// Called by [`crate::Janitor`] after each stage; implementations must be cheap and never fail.
pub trait MetricsBackend: Send + Sync + 'static {
    /// Record how many stacks the list stage returned.
    fn record_listed(&self, count: usize);
    /// Record how many stacks survived the filter stage.
    fn record_matched(&self, count: usize);
    /// Record one delete request and its outcome.
    fn record_delete(&self, outcome: DeleteOutcome);
    /// Record a stage failure that aborted the run.
    fn record_stage_failed(&self, stage: Stage);
    /// Record the end of a run with its wall time in milliseconds.
    fn record_run(&self, outcome: RunOutcome, duration_ms: u64);
}

/// Shared handle to metrics backend.
pub type MetricsHandle = Arc<dyn MetricsBackend>;
