use serde::{Deserialize, Serialize};
use std::io::IsTerminal;

use crate::logger::{
    error::LoggerResult,
    object::{LoggerFormat, LoggerLevel, LoggerTimeZone},
};

/// Environment prefix for logger settings (`JANITOR_LOG_LEVEL`, ...).
pub const LOG_ENV_PREFIX: &str = "JANITOR_LOG_";

/// Logger configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggerConfig {
    /// Output format.
    pub format: LoggerFormat,
    /// Log level filter expression (e.g., "info", "janitor_core=debug,info").
    pub level: LoggerLevel,
    /// Timezone for timestamps.
    pub tz: LoggerTimeZone,
    /// Whether to include module/target names in log output.
    pub with_targets: bool,
    /// Whether to use colored output.
    pub use_color: bool,
}

impl Default for LoggerConfig {
    fn default() -> Self {
        Self {
            format: LoggerFormat::default(),
            level: LoggerLevel::default(),
            tz: LoggerTimeZone::default(),
            with_targets: true,
            use_color: true,
        }
    }
}

impl LoggerConfig {
    /// Read settings from `JANITOR_LOG_*` variables; unset ones keep their defaults.
    pub fn from_env() -> LoggerResult<Self> {
        Ok(envy::prefixed(LOG_ENV_PREFIX).from_env()?)
    }

    /// Same as [`LoggerConfig::from_env`] over an explicit set of variables.
    pub fn from_vars<I>(vars: I) -> LoggerResult<Self>
    where
        I: IntoIterator<Item = (String, String)>,
    {
        Ok(envy::prefixed(LOG_ENV_PREFIX).from_iter(vars)?)
    }

    /// Determines whether colored output should be used.
    ///
    /// Color is enabled only if `use_color` is set AND stdout is a terminal.
    /// Call this while building the subscriber, not while parsing config.
    pub fn should_use_color(&self) -> bool {
        self.use_color && std::io::stdout().is_terminal()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn vars(pairs: &[(&str, &str)]) -> Vec<(String, String)> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn default_values() {
        let config = LoggerConfig::default();

        assert_eq!(config.format, LoggerFormat::Text);
        assert_eq!(config.tz, LoggerTimeZone::Local);
        assert_eq!(config.level.as_str(), "info");
        assert!(config.with_targets);
        assert!(config.use_color);
    }

    #[test]
    fn env_without_logger_vars_uses_defaults() {
        let config = LoggerConfig::from_vars(vars(&[("JANITOR_TAG_KEY", "Env")])).unwrap();

        assert_eq!(config.format, LoggerFormat::Text);
        assert_eq!(config.level.as_str(), "info");
        assert_eq!(config.tz, LoggerTimeZone::Local);
    }

    #[test]
    fn env_overrides_every_field() {
        let config = LoggerConfig::from_vars(vars(&[
            ("JANITOR_LOG_FORMAT", "json"),
            ("JANITOR_LOG_LEVEL", "janitor_core=debug,info"),
            ("JANITOR_LOG_TZ", "UTC"),
            ("JANITOR_LOG_WITH_TARGETS", "false"),
            ("JANITOR_LOG_USE_COLOR", "false"),
        ]))
        .unwrap();

        assert_eq!(config.format, LoggerFormat::Json);
        assert_eq!(config.level.as_str(), "janitor_core=debug,info");
        assert_eq!(config.tz, LoggerTimeZone::Utc);
        assert!(!config.with_targets);
        assert!(!config.use_color);
    }

    #[test]
    fn env_rejects_unknown_format() {
        let err = LoggerConfig::from_vars(vars(&[("JANITOR_LOG_FORMAT", "journald")])).unwrap_err();
        assert!(err.to_string().contains("journald"), "{err}");
    }

    #[test]
    fn serde_uses_defaults_for_missing_fields() {
        let config: LoggerConfig = serde_json::from_str("{}").unwrap();

        assert_eq!(config.level.as_str(), LoggerLevel::default().as_str());
        assert_eq!(config.format, LoggerFormat::default());
        assert_eq!(config.tz, LoggerTimeZone::default());
        assert!(config.with_targets);
        assert!(config.use_color);
    }

    #[test]
    fn color_requires_opt_in() {
        let config = LoggerConfig {
            use_color: false,
            ..Default::default()
        };
        assert!(!config.should_use_color());
    }
}
