mod logger;
pub use logger::*;

mod reporting;
pub use reporting::{ReportingGuard, init_reporting};
