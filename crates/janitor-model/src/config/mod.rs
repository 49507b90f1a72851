//! Process configuration read once at startup from `JANITOR_*` environment variables.
//!
//! The resulting [`JanitorConfig`] is immutable and passed explicitly to whatever needs it.
mod max_age;
pub use max_age::MaxAge;

mod policy;
pub use policy::{CleanupPolicy, TagSelector};

use serde::Deserialize;

use crate::{ConfigError, Flag};

/// Prefix shared by every configuration variable.
pub const ENV_PREFIX: &str = "JANITOR_";

/// Error-reporting sink settings.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SentryConfig {
    pub enabled: bool,
    pub dsn: Option<String>,
}

/// Optional overrides for the AWS client; unset fields fall back to the SDK default chain.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AwsConfig {
    pub region: Option<String>,
    pub endpoint_url: Option<String>,
}

/// Validated runtime configuration.
#[derive(Debug, Clone)]
pub struct JanitorConfig {
    /// Run the pipeline once and exit instead of serving the hosting runtime.
    pub debug: Flag,
    /// Deployment environment name reported to the error sink.
    pub environment: String,
    /// Tag a stack must carry to be cleaned up.
    pub selector: TagSelector,
    /// Minimum stack age before deletion.
    pub max_age: MaxAge,
    pub sentry: SentryConfig,
    pub aws: AwsConfig,
}

/// Raw shape of the environment, before validation.
#[derive(Debug, Deserialize)]
struct RawConfig {
    #[serde(default)]
    debug: Flag,
    #[serde(default = "default_environment")]
    environment: String,
    #[serde(default)]
    tag_key: String,
    #[serde(default)]
    tag_value: String,
    #[serde(default)]
    max_expiration_hours: Option<String>,
    #[serde(default = "Flag::disabled")]
    sentry_enabled: Flag,
    #[serde(default)]
    sentry_dsn: Option<String>,
    #[serde(default)]
    aws_region: Option<String>,
    #[serde(default)]
    aws_endpoint_url: Option<String>,
}

fn default_environment() -> String {
    "dev".to_string()
}

/// Treat empty and whitespace-only values like unset ones.
fn non_blank(v: Option<String>) -> Option<String> {
    v.filter(|s| !s.trim().is_empty())
}

impl JanitorConfig {
    /// Load and validate configuration from the process environment.
    pub fn load() -> Result<Self, ConfigError> {
        let raw: RawConfig = envy::prefixed(ENV_PREFIX).from_env()?;
        raw.validate()
    }

    /// Load and validate configuration from explicit `(NAME, value)` pairs.
    ///
    /// Names carry the [`ENV_PREFIX`]; unrelated variables are ignored.
    pub fn load_from<I>(vars: I) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = (String, String)>,
    {
        let raw: RawConfig = envy::prefixed(ENV_PREFIX).from_iter(vars)?;
        raw.validate()
    }

    /// Filter criteria for the cleanup stages.
    pub fn policy(&self) -> CleanupPolicy {
        CleanupPolicy::new(self.selector.clone(), self.max_age)
    }
}

impl RawConfig {
    fn validate(self) -> Result<JanitorConfig, ConfigError> {
        if self.tag_key.trim().is_empty() {
            return Err(ConfigError::MissingTagKey);
        }
        if self.tag_value.trim().is_empty() {
            return Err(ConfigError::MissingTagValue);
        }

        let max_age = match non_blank(self.max_expiration_hours) {
            Some(s) => s.parse().map_err(ConfigError::InvalidMaxAge)?,
            None => MaxAge::default(),
        };

        let sentry = SentryConfig {
            enabled: self.sentry_enabled.is_enabled(),
            dsn: non_blank(self.sentry_dsn),
        };
        if sentry.enabled && sentry.dsn.is_none() {
            return Err(ConfigError::MissingSentryDsn);
        }

        Ok(JanitorConfig {
            debug: self.debug,
            environment: self.environment,
            selector: TagSelector::new(self.tag_key, self.tag_value),
            max_age,
            sentry,
            aws: AwsConfig {
                region: non_blank(self.aws_region),
                endpoint_url: non_blank(self.aws_endpoint_url),
            },
        })
    }
}
