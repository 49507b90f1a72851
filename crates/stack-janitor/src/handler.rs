use lambda_runtime::LambdaEvent;
use serde::Serialize;
use tracing::{debug, info, warn};

use janitor_core::{CoreError, Janitor, RunReport};
use janitor_prometheus::PrometheusMetrics;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum InvocationStatus {
    Completed,
    Failed,
}

/// Response body of one invocation.
///
/// A failed run is still a successful invocation; the stage error is carried in `error`.
#[derive(Debug, Serialize)]
pub struct InvocationOutcome {
    pub status: InvocationStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub report: Option<RunReport>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl InvocationOutcome {
    fn completed(report: RunReport) -> Self {
        Self {
            status: InvocationStatus::Completed,
            report: Some(report),
            error: None,
        }
    }

    fn failed(err: &CoreError) -> Self {
        Self {
            status: InvocationStatus::Failed,
            report: None,
            error: Some(err.to_string()),
        }
    }
}

pub struct Handler {
    janitor: Janitor,
    metrics: PrometheusMetrics,
}

impl Handler {
    pub fn new(janitor: Janitor, metrics: PrometheusMetrics) -> Self {
        Self { janitor, metrics }
    }

    /// Run the pipeline once. Stage failures were already logged by the janitor.
    pub async fn run_once(&self) -> InvocationOutcome {
        let outcome = match self.janitor.run().await {
            Ok(report) => InvocationOutcome::completed(report),
            Err(e) => InvocationOutcome::failed(&e),
        };

        match self.metrics.render() {
            Ok(text) => debug!(metrics = %text, "run metrics"),
            Err(e) => warn!(error = %e, "unable to render metrics"),
        }
        outcome
    }

    /// Lambda entry point; the scheduled event payload is ignored.
    pub async fn on_event(
        &self,
        event: LambdaEvent<serde_json::Value>,
    ) -> Result<InvocationOutcome, lambda_runtime::Error> {
        info!(request_id = %event.context.request_id, "invocation received");
        Ok(self.run_once().await)
    }
}
