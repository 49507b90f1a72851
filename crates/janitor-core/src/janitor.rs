//! Orchestration of one cleanup run: list, then filter, then delete.
use std::time::{Duration, Instant};

use serde::Serialize;
use tracing::{error, info, instrument};

use crate::{
    context::RunContext,
    error::CoreError,
    metrics::{DeleteOutcome, RunOutcome},
    provider::ProviderHandle,
    stage::{self, DeleteReport},
};

/// Summary of a completed run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RunReport {
    /// Stacks returned by the list stage.
    pub listed: usize,
    /// Stacks that passed the filter, in listing order.
    pub matched: Vec<String>,
    /// Outcome of the delete stage.
    pub delete: DeleteReport,
}

/// Runs the cleanup pipeline against a provider.
///
/// Holds no state between runs: every [`Janitor::run`] starts from a fresh listing.
pub struct Janitor {
    provider: ProviderHandle,
    ctx: RunContext,
}

impl Janitor {
    pub fn new(provider: ProviderHandle, ctx: RunContext) -> Self {
        Self { provider, ctx }
    }

    /// Execute one run.
    ///
    /// A list or filter failure is logged and returned without running later stages.
    /// Individual delete failures are not errors; they are reported in [`RunReport::delete`].
    #[instrument(level = "info", name = "cleanup", skip(self), fields(provider = self.provider.name()))]
    pub async fn run(&self) -> Result<RunReport, CoreError> {
        let started = Instant::now();
        let result = self.run_stages().await;
        let elapsed_ms = saturating_ms(started.elapsed());

        let metrics = self.ctx.metrics();
        match &result {
            Ok(report) => {
                metrics.record_run(RunOutcome::Completed, elapsed_ms);
                info!(
                    listed = report.listed,
                    matched = report.matched.len(),
                    deleted = report.delete.deleted,
                    failed = report.delete.failed(),
                    elapsed_ms,
                    "cleanup run finished"
                );
            }
            Err(e) => {
                metrics.record_stage_failed(e.stage());
                metrics.record_run(RunOutcome::Aborted, elapsed_ms);
                error!(stage = %e.stage(), error = %e, elapsed_ms, "cleanup run aborted");
            }
        }
        result
    }

    async fn run_stages(&self) -> Result<RunReport, CoreError> {
        let provider = self.provider.as_ref();
        let metrics = self.ctx.metrics();

        let names = stage::list_stacks(provider).await?;
        metrics.record_listed(names.len());

        let now = self.ctx.clock().now();
        let filtered = stage::filter_stacks(provider, &names, self.ctx.policy(), now).await?;
        metrics.record_matched(filtered.len());

        let delete = stage::delete_stacks(provider, filtered.names()).await;
        for _ in 0..delete.deleted {
            metrics.record_delete(DeleteOutcome::Deleted);
        }
        for _ in 0..delete.failed() {
            metrics.record_delete(DeleteOutcome::Failed);
        }

        Ok(RunReport {
            listed: names.len(),
            matched: filtered.into_names(),
            delete,
        })
    }
}

/// Whole milliseconds, clamped to `u64::MAX`.
fn saturating_ms(elapsed: Duration) -> u64 {
    u64::try_from(elapsed.as_millis()).unwrap_or(u64::MAX)
}
