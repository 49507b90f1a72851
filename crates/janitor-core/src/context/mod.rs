mod clock;
pub use clock::{Clock, ClockHandle, FixedClock, SystemClock};

use std::{fmt, sync::Arc};

use janitor_model::CleanupPolicy;

use crate::metrics::MetricsHandle;

/// Everything a run needs besides the provider.
#[derive(Clone)]
pub struct RunContext {
    policy: CleanupPolicy,
    metrics: MetricsHandle,
    clock: ClockHandle,
}

impl RunContext {
    /// Context with no-op metrics and the system clock.
    pub fn new(policy: CleanupPolicy) -> Self {
        Self {
            policy,
            metrics: crate::metrics::noop_metrics(),
            clock: Arc::new(SystemClock),
        }
    }

    pub fn policy(&self) -> &CleanupPolicy {
        &self.policy
    }

    /// Get a clonable handle to the metrics backend.
    pub fn metrics(&self) -> &MetricsHandle {
        &self.metrics
    }

    pub fn clock(&self) -> &ClockHandle {
        &self.clock
    }

    /// Replace the metrics backend and return updated context.
    pub fn with_metrics(mut self, metrics: MetricsHandle) -> Self {
        self.metrics = metrics;
        self
    }

    /// Replace the clock and return updated context.
    pub fn with_clock(mut self, clock: ClockHandle) -> Self {
        self.clock = clock;
        self
    }
}

impl fmt::Debug for RunContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RunContext")
            .field("policy", &self.policy)
            .field("metrics", &"<handle>")
            .field("clock", &"<handle>")
            .finish()
    }
}

impl fmt::Display for RunContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "RunContext(tag={}, max_age={})",
            self.policy.selector, self.policy.max_age
        )
    }
}
