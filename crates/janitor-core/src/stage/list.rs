use janitor_model::CLEANUP_STATUSES;
use tracing::{debug, info, instrument};

use crate::{error::CoreError, provider::StackProvider, stage::Stage};

/// Names of all stacks in one of [`CLEANUP_STATUSES`], in provider order.
#[instrument(level = "debug", skip_all, fields(provider = provider.name()))]
pub async fn list_stacks(provider: &dyn StackProvider) -> Result<Vec<String>, CoreError> {
    info!("collecting stacks");

    let summaries = provider
        .list_stacks(&CLEANUP_STATUSES)
        .await
        .map_err(CoreError::at(Stage::List))?;

    let names: Vec<String> = summaries.into_iter().map(|s| s.name).collect();
    debug!(count = names.len(), "stacks listed");
    Ok(names)
}
