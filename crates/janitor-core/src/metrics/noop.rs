use crate::metrics::backend::{DeleteOutcome, MetricsBackend, RunOutcome};
use crate::stage::Stage;

/// No-op metrics backend.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoOpMetrics;

impl MetricsBackend for NoOpMetrics {
    #[inline(always)]
    fn record_listed(&self, _: usize) {}

    #[inline(always)]
    fn record_matched(&self, _: usize) {}

    #[inline(always)]
    fn record_delete(&self, _: DeleteOutcome) {}

    #[inline(always)]
    fn record_stage_failed(&self, _: Stage) {}

    #[inline(always)]
    fn record_run(&self, _: RunOutcome, _: u64) {}
}
