use std::sync::Arc;

use prometheus::{
    Counter, CounterVec, Histogram, HistogramOpts, Opts, Registry, TextEncoder,
};

use janitor_core::{DeleteOutcome, MetricsBackend, RunOutcome, Stage};

const NAMESPACE: &str = "janitor";

/// Prometheus metrics backend.
///
/// ## Label cardinality
/// All labels are bounded:
/// - `outcome` on deletes: "deleted", "failed"
/// - `outcome` on runs: "completed", "aborted"
/// - `stage`: "list", "filter"
#[derive(Clone)]
pub struct PrometheusMetrics {
    stacks_listed: Counter,
    stacks_matched: Counter,
    stack_deletes: CounterVec,
    stage_failures: CounterVec,
    runs: CounterVec,
    run_duration: Histogram,
    registry: Arc<Registry>,
}

impl PrometheusMetrics {
    /// Create a backend registering into `registry`.
    pub fn new_with_registry(registry: Arc<Registry>) -> Result<Self, prometheus::Error> {
        let stacks_listed = Counter::with_opts(
            Opts::new("stacks_listed_total", "Stacks returned by the list stage").namespace(NAMESPACE),
        )?;
        registry.register(Box::new(stacks_listed.clone()))?;

        let stacks_matched = Counter::with_opts(
            Opts::new("stacks_matched_total", "Stacks selected for deletion").namespace(NAMESPACE),
        )?;
        registry.register(Box::new(stacks_matched.clone()))?;

        let stack_deletes = CounterVec::new(
            Opts::new("stack_deletes_total", "Delete requests by outcome").namespace(NAMESPACE),
            &["outcome"],
        )?;
        registry.register(Box::new(stack_deletes.clone()))?;

        let stage_failures = CounterVec::new(
            Opts::new("stage_failures_total", "Stage failures that aborted a run").namespace(NAMESPACE),
            &["stage"],
        )?;
        registry.register(Box::new(stage_failures.clone()))?;

        let runs = CounterVec::new(
            Opts::new("runs_total", "Cleanup runs by outcome").namespace(NAMESPACE),
            &["outcome"],
        )?;
        registry.register(Box::new(runs.clone()))?;

        let run_duration = Histogram::with_opts(
            HistogramOpts::new("run_duration_seconds", "Cleanup run wall time in seconds")
                .namespace(NAMESPACE)
                .buckets(vec![0.1, 0.5, 1.0, 5.0, 10.0, 30.0, 60.0, 300.0, 900.0]),
        )?;
        registry.register(Box::new(run_duration.clone()))?;

        Ok(Self {
            stacks_listed,
            stacks_matched,
            stack_deletes,
            stage_failures,
            runs,
            run_duration,
            registry,
        })
    }

    /// Create a backend with its own registry.
    pub fn new() -> Result<Self, prometheus::Error> {
        Self::new_with_registry(Arc::new(Registry::new()))
    }

    /// Render every registered metric in the text exposition format.
    pub fn render(&self) -> Result<String, prometheus::Error> {
        TextEncoder::new().encode_to_string(&self.registry.gather())
    }
}

impl MetricsBackend for PrometheusMetrics {
    fn record_listed(&self, count: usize) {
        self.stacks_listed.inc_by(count as f64);
    }

    fn record_matched(&self, count: usize) {
        self.stacks_matched.inc_by(count as f64);
    }

    fn record_delete(&self, outcome: DeleteOutcome) {
        self.stack_deletes.with_label_values(&[outcome.as_label()]).inc();
    }

    fn record_stage_failed(&self, stage: Stage) {
        self.stage_failures.with_label_values(&[stage.as_label()]).inc();
    }

    fn record_run(&self, outcome: RunOutcome, duration_ms: u64) {
        self.runs.with_label_values(&[outcome.as_label()]).inc();
        self.run_duration.observe(duration_ms as f64 / 1000.0);
    }
}
