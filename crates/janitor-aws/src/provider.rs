use async_trait::async_trait;
use aws_sdk_cloudformation::{Client, error::DisplayErrorContext};
use janitor_core::{ProviderError, StackProvider};
use janitor_model::{AwsConfig, StackDetail, StackStatus, StackSummary};
use tracing::{debug, instrument, trace};

use crate::{AwsError, convert};

/// [`StackProvider`] over the CloudFormation API.
#[derive(Debug, Clone)]
pub struct CloudFormationProvider {
    client: Client,
}

impl CloudFormationProvider {
    pub fn new(client: Client) -> Self {
        Self { client }
    }

    /// Resolve credentials and region, then build the provider.
    pub async fn connect(cfg: &AwsConfig) -> Self {
        Self::new(crate::connect(cfg).await)
    }
}

#[async_trait]
impl StackProvider for CloudFormationProvider {
    fn name(&self) -> &'static str {
        "cloudformation"
    }

    #[instrument(level = "debug", skip_all, fields(statuses = statuses.len()))]
    async fn list_stacks(&self, statuses: &[StackStatus]) -> Result<Vec<StackSummary>, ProviderError> {
        let filter = statuses.iter().copied().map(convert::sdk_status).collect();

        let output = self
            .client
            .list_stacks()
            .set_stack_status_filter(Some(filter))
            .send()
            .await
            .map_err(|e| ProviderError::List(DisplayErrorContext(e).to_string()))?;

        if output.next_token().is_some() {
            debug!("list response has more pages; only the first is used");
        }

        output
            .stack_summaries()
            .iter()
            .map(|s| convert::summary(s).map_err(ProviderError::from))
            .collect()
    }

    #[instrument(level = "debug", skip(self))]
    async fn describe_stack(&self, name: &str) -> Result<StackDetail, ProviderError> {
        let output = self
            .client
            .describe_stacks()
            .stack_name(name)
            .send()
            .await
            .map_err(|e| ProviderError::Describe {
                stack: name.to_string(),
                reason: DisplayErrorContext(e).to_string(),
            })?;

        let stack = output
            .stacks()
            .first()
            .ok_or_else(|| AwsError::StackNotReturned(name.to_string()))?;
        let detail = convert::detail(stack)?;
        trace!(tags = detail.tags.len(), created_at = %detail.created_at, "stack described");
        Ok(detail)
    }

    #[instrument(level = "debug", skip(self))]
    async fn delete_stack(&self, name: &str) -> Result<(), ProviderError> {
        self.client
            .delete_stack()
            .stack_name(name)
            .send()
            .await
            .map_err(|e| ProviderError::Delete {
                stack: name.to_string(),
                reason: DisplayErrorContext(e).to_string(),
            })?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn connect_applies_overrides() {
        let cfg = AwsConfig {
            region: Some("eu-west-1".into()),
            endpoint_url: Some("http://localhost:4566".into()),
        };

        let provider = CloudFormationProvider::connect(&cfg).await;

        assert_eq!(provider.name(), "cloudformation");
        assert_eq!(
            provider.client.config().region().map(|r| r.as_ref()),
            Some("eu-west-1")
        );
    }
}
