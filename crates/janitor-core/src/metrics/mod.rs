//! Metrics collection abstraction for cleanup runs.
//!
//! Backends (prometheus, etc) implement [`MetricsBackend`] and are injected via [`crate::RunContext`].
mod backend;
pub use backend::{DeleteOutcome, MetricsBackend, MetricsHandle, RunOutcome};

mod noop;
pub use noop::NoOpMetrics;

use std::sync::Arc;

/// Create a no-op metrics handle.
#[inline]
pub fn noop_metrics() -> MetricsHandle {
    Arc::new(NoOpMetrics)
}
