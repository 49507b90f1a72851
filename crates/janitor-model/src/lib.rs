mod domain;
pub use domain::{Flag, Tag, Tags};

mod error;
pub use error::{ConfigError, ModelError};

mod stack;
pub use stack::{CLEANUP_STATUSES, StackDetail, StackStatus, StackSummary};

mod config;
pub use config::{AwsConfig, CleanupPolicy, ENV_PREFIX, JanitorConfig, MaxAge, SentryConfig, TagSelector};
