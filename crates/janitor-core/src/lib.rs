pub mod context;
pub mod error;
pub mod janitor;
pub mod metrics;
pub mod provider;
pub mod stage;

#[cfg(test)]
mod testing;

pub use context::{Clock, ClockHandle, FixedClock, RunContext, SystemClock};
pub use error::CoreError;
pub use janitor::{Janitor, RunReport};
pub use metrics::{DeleteOutcome, MetricsBackend, MetricsHandle, NoOpMetrics, RunOutcome};
pub use provider::{ProviderError, ProviderHandle, StackProvider};
pub use stage::{DeleteFailure, DeleteReport, FilteredStacks, Stage};
