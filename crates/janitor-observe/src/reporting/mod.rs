//! Error-reporting sink (Sentry).
//!
//! The client is started here; events reach it through the layer that
//! [`crate::init_logger`] installs when called with `reporting = true`.
use std::{borrow::Cow, time::Duration};

use janitor_model::SentryConfig;
use sentry::{ClientInitGuard, ClientOptions, types::Dsn};

use crate::LoggerError;

/// Pending events are flushed for at most this long when the guard drops.
const SHUTDOWN_TIMEOUT: Duration = Duration::from_secs(5);

/// Keeps the reporting client alive; dropping it flushes queued events.
#[must_use = "dropping the guard shuts the reporting client down"]
pub struct ReportingGuard {
    client: ClientInitGuard,
}

impl std::fmt::Debug for ReportingGuard {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ReportingGuard")
            .field("enabled", &self.client.is_enabled())
            .finish()
    }
}

/// Start the reporting client when `cfg.enabled`.
///
/// Returns `Ok(None)` when reporting is disabled. Panics are captured once the
/// client is running.
pub fn init_reporting(
    cfg: &SentryConfig,
    environment: &str,
    debug: bool,
    release: &str,
) -> Result<Option<ReportingGuard>, LoggerError> {
    if !cfg.enabled {
        return Ok(None);
    }

    let options = client_options(cfg, environment, debug, release)?;
    Ok(Some(ReportingGuard {
        client: sentry::init(options),
    }))
}

fn client_options(
    cfg: &SentryConfig,
    environment: &str,
    debug: bool,
    release: &str,
) -> Result<ClientOptions, LoggerError> {
    let raw = cfg.dsn.as_deref().ok_or(LoggerError::MissingDsn)?;
    let dsn: Dsn = raw
        .parse()
        .map_err(|e: sentry::types::ParseDsnError| LoggerError::InvalidDsn(e.to_string()))?;

    Ok(ClientOptions {
        dsn: Some(dsn),
        release: Some(Cow::Owned(release.to_string())),
        environment: Some(Cow::Owned(environment.to_string())),
        debug,
        attach_stacktrace: true,
        shutdown_timeout: SHUTDOWN_TIMEOUT,
        ..Default::default()
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const DSN: &str = "https://public@sentry.example.com/42";

    fn enabled(dsn: Option<&str>) -> SentryConfig {
        SentryConfig {
            enabled: true,
            dsn: dsn.map(str::to_string),
        }
    }

    #[test]
    fn disabled_reporting_starts_nothing() {
        let guard = init_reporting(&SentryConfig::default(), "dev", false, "stack-janitor@abc").unwrap();
        assert!(guard.is_none());
    }

    #[test]
    fn options_carry_release_and_environment() {
        let opts = client_options(&enabled(Some(DSN)), "staging", true, "stack-janitor@abc").unwrap();

        assert_eq!(opts.release.as_deref(), Some("stack-janitor@abc"));
        assert_eq!(opts.environment.as_deref(), Some("staging"));
        assert!(opts.debug);
        assert!(opts.attach_stacktrace);
        assert_eq!(opts.shutdown_timeout, SHUTDOWN_TIMEOUT);
        assert_eq!(opts.dsn.map(|d| d.host().to_string()).as_deref(), Some("sentry.example.com"));
    }

    #[test]
    fn enabled_without_dsn_is_rejected() {
        let err = init_reporting(&enabled(None), "dev", false, "r").unwrap_err();
        assert!(matches!(err, LoggerError::MissingDsn));
    }

    #[test]
    fn malformed_dsn_is_rejected() {
        let err = client_options(&enabled(Some("not a dsn")), "dev", false, "r").unwrap_err();
        assert!(matches!(err, LoggerError::InvalidDsn(_)));
    }
}
