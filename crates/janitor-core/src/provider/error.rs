use thiserror::Error;

/// Failure talking to the stack-management collaborator.
#[derive(Debug, Error)]
pub enum ProviderError {
    #[error("list stacks: {0}")]
    List(String),

    #[error("describe stack '{stack}': {reason}")]
    Describe { stack: String, reason: String },

    #[error("delete stack '{stack}': {reason}")]
    Delete { stack: String, reason: String },

    #[error("invalid provider response: {0}")]
    InvalidResponse(String),
}
