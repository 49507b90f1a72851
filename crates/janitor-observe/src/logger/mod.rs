mod config;
mod error;
mod log;
mod object;

pub use config::{LOG_ENV_PREFIX, LoggerConfig};
pub use error::{LoggerError, LoggerResult};
pub use object::LoggerFormat;
pub use object::LoggerLevel;
pub use object::{LoggerTimeZone, init_local_offset};

/// Initializes the global tracing subscriber with the given configuration.
///
/// When `reporting` is true an error-reporting layer is stacked on top of the
/// formatter: error events are sent as reports, info and warn events become
/// breadcrumbs. Start the client with [`crate::init_reporting`] first, otherwise
/// the layer has nowhere to send to.
///
/// # Important: Local Timezone
/// For using `LoggerTimeZone::Local`, you **must** call [`init_local_offset`]
/// in `main()` before the async runtime spawns its worker threads.
///
/// # Examples
/// ```rust
/// use janitor_observe::{LoggerConfig, init_logger};
///
/// fn main() {
///     let config = LoggerConfig::default();
///     init_logger(&config, false).expect("Failed to initialize logger");
///
///     tracing::info!("Logger initialized successfully");
/// }
/// ```
pub fn init_logger(cfg: &LoggerConfig, reporting: bool) -> Result<(), LoggerError> {
    match cfg.format {
        LoggerFormat::Text => log::logger_text(cfg, reporting),
        LoggerFormat::Json => log::logger_json(cfg, reporting),
    }
}
