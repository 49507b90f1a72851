use janitor_core::ProviderError;
use thiserror::Error;

/// A CloudFormation response that could not be turned into a domain value.
#[derive(Debug, Error)]
pub enum AwsError {
    #[error("missing field '{field}' in {shape}")]
    MissingField {
        shape: &'static str,
        field: &'static str,
    },

    #[error("timestamp out of range: {0}")]
    Timestamp(String),

    #[error("stack '{0}' not present in describe response")]
    StackNotReturned(String),
}

impl From<AwsError> for ProviderError {
    fn from(e: AwsError) -> Self {
        ProviderError::InvalidResponse(e.to_string())
    }
}
