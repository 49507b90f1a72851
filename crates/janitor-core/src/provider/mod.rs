//! Capability interface over the cloud stack-management API.
//!
//! The pipeline only ever talks to a [`StackProvider`]; production wires the
//! CloudFormation client, tests wire an in-memory fake.
mod error;
pub use error::ProviderError;

use std::sync::Arc;

use async_trait::async_trait;
use janitor_model::{StackDetail, StackStatus, StackSummary};

/// Narrow view of the stack-management API used by the cleanup stages.
#[async_trait]
pub trait StackProvider: Send + Sync {
    /// Provider name used in logs and diagnostics.
    fn name(&self) -> &'static str;

    /// List stacks currently in one of `statuses`, in provider order.
    ///
    /// A single request: whatever the provider returns in one page is the result.
    async fn list_stacks(&self, statuses: &[StackStatus]) -> Result<Vec<StackSummary>, ProviderError>;

    /// Fetch tags and creation time for one stack.
    async fn describe_stack(&self, name: &str) -> Result<StackDetail, ProviderError>;

    /// Request deletion of one stack.
    ///
    /// Returns once the provider acknowledged the request; completion is not awaited.
    async fn delete_stack(&self, name: &str) -> Result<(), ProviderError>;
}

/// Shared handle to a provider.
pub type ProviderHandle = Arc<dyn StackProvider>;
