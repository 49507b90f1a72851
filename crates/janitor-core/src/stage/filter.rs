use janitor_model::CleanupPolicy;
use serde::Serialize;
use time::OffsetDateTime;
use tracing::{debug, info, instrument};

use crate::{error::CoreError, provider::StackProvider, stage::Stage};

/// Stack names that passed the filter, in listing order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct FilteredStacks(Vec<String>);

impl FilteredStacks {
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn names(&self) -> &[String] {
        &self.0
    }

    pub fn into_names(self) -> Vec<String> {
        self.0
    }
}

/// Describe each stack and keep those admitted by `policy` at `now`.
///
/// One describe call per name, sequentially. The first failing describe aborts the
/// whole pass: a partial result is never returned.
#[instrument(level = "debug", skip_all, fields(provider = provider.name(), candidates = names.len()))]
pub async fn filter_stacks(
    provider: &dyn StackProvider,
    names: &[String],
    policy: &CleanupPolicy,
    now: OffsetDateTime,
) -> Result<FilteredStacks, CoreError> {
    info!("filtering stacks");

    let mut kept = Vec::new();
    for name in names {
        let detail = provider
            .describe_stack(name)
            .await
            .map_err(CoreError::at(Stage::Filter))?;

        if policy.admits(&detail, now) {
            kept.push(detail.name);
        } else {
            debug!(stack = %name, created_at = %detail.created_at, "stack skipped");
        }
    }

    let filtered = FilteredStacks(kept);
    info!(
        count = filtered.len(),
        tag = %policy.selector,
        max_age = %policy.max_age,
        stacks = ?filtered.names(),
        "found {} stacks with the provided tag",
        filtered.len(),
    );
    Ok(filtered)
}
