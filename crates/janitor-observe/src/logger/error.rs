use thiserror::Error;

#[derive(Debug, Error)]
pub enum LoggerError {
    #[error("Invalid log format: {0} (expected: text|json)")]
    InvalidFormat(String),

    #[error("Logger already initialized")]
    AlreadyInitialized,

    #[error("Invalid timezone: {0}")]
    InvalidTimeZone(String),

    #[error("Invalid log level: {0}")]
    InvalidLevel(String),

    #[error("Invalid logger environment: {0}")]
    Env(String),

    #[error("Error reporting enabled without a DSN")]
    MissingDsn,

    #[error("Invalid error reporting DSN: {0}")]
    InvalidDsn(String),
}

impl From<envy::Error> for LoggerError {
    fn from(e: envy::Error) -> Self {
        LoggerError::Env(e.to_string())
    }
}

pub type LoggerResult<T> = Result<T, LoggerError>;
