use std::sync::Arc;

use time::OffsetDateTime;

/// Source of "now" for age computations.
pub trait Clock: Send + Sync {
    fn now(&self) -> OffsetDateTime;
}

/// Shared handle to a clock.
pub type ClockHandle = Arc<dyn Clock>;

/// Wall clock in UTC.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> OffsetDateTime {
        OffsetDateTime::now_utc()
    }
}

/// Clock frozen at a given instant.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub OffsetDateTime);

impl Clock for FixedClock {
    fn now(&self) -> OffsetDateTime {
        self.0
    }
}
