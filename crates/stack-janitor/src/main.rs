mod handler;

use std::{process::ExitCode, sync::Arc};

use anyhow::Context;
use lambda_runtime::{LambdaEvent, service_fn};
use tracing::{error, info};

use janitor_aws::CloudFormationProvider;
use janitor_core::{Janitor, RunContext};
use janitor_model::JanitorConfig;
use janitor_observe::{
    LoggerConfig, ReportingGuard, init_local_offset, init_logger, init_reporting,
};
use janitor_prometheus::PrometheusMetrics;

use crate::handler::Handler;

const GIT_SHA: &str = match option_env!("GIT_SHA") {
    Some(sha) => sha,
    None => "<not set>",
};

fn main() -> ExitCode {
    // 1) local offset, before any runtime thread exists
    init_local_offset();

    // 2) settings
    let (log_cfg, log_err) = match LoggerConfig::from_env() {
        Ok(cfg) => (cfg, None),
        Err(e) => (LoggerConfig::default(), Some(e)),
    };
    let started = start();

    // 3) logger, with the reporting layer when the client is up
    let reporting = matches!(started, Ok((_, Some(_))));
    if let Err(e) = init_logger(&log_cfg, reporting) {
        eprintln!("unable to initialize logger: {e}");
        return ExitCode::FAILURE;
    }

    let started = match log_err {
        Some(e) => Err(anyhow::Error::from(e).context("load logger config")),
        None => started,
    };
    let (config, _reporting) = match started {
        Ok(v) => v,
        Err(e) => {
            error!(error = %format!("{e:#}"), "unable to load config");
            return ExitCode::FAILURE;
        }
    };
    info!(version = env!("CARGO_PKG_VERSION"), git_sha = GIT_SHA, "current version");

    // 4) runtime
    let runtime = match tokio::runtime::Builder::new_multi_thread().enable_all().build() {
        Ok(rt) => rt,
        Err(e) => {
            error!(error = %e, "unable to start async runtime");
            return ExitCode::FAILURE;
        }
    };

    match runtime.block_on(serve(config)) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!(error = %format!("{e:#}"), "stack janitor stopped");
            ExitCode::FAILURE
        }
    }
}

/// Load the janitor config and start error reporting if it asks for it.
fn start() -> anyhow::Result<(JanitorConfig, Option<ReportingGuard>)> {
    let config = JanitorConfig::load().context("load janitor config")?;
    let release = format!("stack-janitor@{GIT_SHA}");
    let guard = init_reporting(
        &config.sentry,
        &config.environment,
        config.debug.is_enabled(),
        &release,
    )
    .context("start error reporting")?;
    Ok((config, guard))
}

async fn serve(config: JanitorConfig) -> anyhow::Result<()> {
    let metrics = PrometheusMetrics::new().context("register metrics")?;
    let provider = CloudFormationProvider::connect(&config.aws).await;

    let ctx = RunContext::new(config.policy()).with_metrics(Arc::new(metrics.clone()));
    info!(context = %ctx, environment = %config.environment, "janitor configured");

    let handler = Arc::new(Handler::new(Janitor::new(Arc::new(provider), ctx), metrics));

    if config.debug.is_enabled() {
        info!("debug enabled, running once");
        handler.run_once().await;
        return Ok(());
    }

    lambda_runtime::run(service_fn(move |event: LambdaEvent<serde_json::Value>| {
        let handler = handler.clone();
        async move { handler.on_event(event).await }
    }))
    .await
    .map_err(|e| anyhow::anyhow!(e))
}
