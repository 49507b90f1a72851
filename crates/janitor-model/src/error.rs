use thiserror::Error;

#[derive(Debug, Error)]
pub enum ModelError {
    #[error("invalid duration '{input}': {reason}")]
    InvalidDuration { input: String, reason: &'static str },
}

pub type ModelResult<T> = Result<T, ModelError>;

/// Startup configuration failures.
///
/// Any of these stops the process before the first provider call.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("tag key is required (set {prefix}TAG_KEY)", prefix = crate::ENV_PREFIX)]
    MissingTagKey,

    #[error("tag value is required (set {prefix}TAG_VALUE)", prefix = crate::ENV_PREFIX)]
    MissingTagValue,

    #[error("sentry is enabled but no DSN is configured (set {prefix}SENTRY_DSN)", prefix = crate::ENV_PREFIX)]
    MissingSentryDsn,

    #[error("invalid max expiration: {0}")]
    InvalidMaxAge(#[source] ModelError),

    #[error("config load: {0}")]
    Env(String),
}

impl From<envy::Error> for ConfigError {
    fn from(e: envy::Error) -> Self {
        ConfigError::Env(e.to_string())
    }
}
