//! Prometheus metrics backend for cleanup runs.
//!
//! [`PrometheusMetrics`] implements [`janitor_core::MetricsBackend`]. A Lambda
//! function has no scrape endpoint, so the registry is rendered in text format
//! with [`PrometheusMetrics::render`] and written to the log after each run.
//!
//! ## Example
//! ```rust
//! use std::sync::Arc;
//! use janitor_core::{MetricsBackend, RunOutcome};
//! use janitor_prometheus::PrometheusMetrics;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let metrics = PrometheusMetrics::new()?;
//! let handle: Arc<dyn MetricsBackend> = Arc::new(metrics.clone());
//!
//! handle.record_run(RunOutcome::Completed, 1_250);
//! assert!(metrics.render()?.contains("janitor_runs_total"));
//! # Ok(())
//! # }
//! ```
//!
//! ## Metrics
//! - `janitor_stacks_listed_total` - Counter
//! - `janitor_stacks_matched_total` - Counter
//! - `janitor_stack_deletes_total{outcome}` - Counter
//! - `janitor_stage_failures_total{stage}` - Counter
//! - `janitor_runs_total{outcome}` - Counter
//! - `janitor_run_duration_seconds` - Histogram
mod backend;
pub use backend::PrometheusMetrics;
