//! CloudFormation-backed [`janitor_core::StackProvider`].
mod error;
pub use error::AwsError;

mod config;
pub use config::connect;

mod convert;

mod provider;
pub use provider::CloudFormationProvider;
