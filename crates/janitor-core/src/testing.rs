//! In-memory provider used by the stage and orchestrator tests.
use std::{collections::HashSet, sync::Mutex};

use async_trait::async_trait;
use janitor_model::{StackDetail, StackStatus, StackSummary, Tags};
use time::{Duration, OffsetDateTime};

use crate::provider::{ProviderError, StackProvider};

pub(crate) fn fixed_now() -> OffsetDateTime {
    OffsetDateTime::from_unix_timestamp(1_700_000_000).unwrap()
}

#[derive(Default)]
struct Calls {
    lists: usize,
    statuses: Vec<StackStatus>,
    described: Vec<String>,
    deleted: Vec<String>,
}

#[derive(Default)]
pub(crate) struct FakeProvider {
    stacks: Vec<StackDetail>,
    fail_list: bool,
    fail_describe: HashSet<String>,
    fail_delete: HashSet<String>,
    calls: Mutex<Calls>,
}

impl FakeProvider {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Add a stack created `age_hours` before [`fixed_now`].
    pub(crate) fn with_stack(mut self, name: &str, tags: &[(&str, &str)], age_hours: i64) -> Self {
        self.stacks.push(StackDetail::new(
            name,
            tags.iter().copied().collect::<Tags>(),
            fixed_now() - Duration::hours(age_hours),
        ));
        self
    }

    pub(crate) fn failing_list(mut self) -> Self {
        self.fail_list = true;
        self
    }

    pub(crate) fn failing_describe(mut self, name: &str) -> Self {
        self.fail_describe.insert(name.to_string());
        self
    }

    pub(crate) fn failing_delete(mut self, name: &str) -> Self {
        self.fail_delete.insert(name.to_string());
        self
    }

    pub(crate) fn list_calls(&self) -> usize {
        self.calls.lock().unwrap().lists
    }

    pub(crate) fn listed_statuses(&self) -> Vec<StackStatus> {
        self.calls.lock().unwrap().statuses.clone()
    }

    pub(crate) fn described(&self) -> Vec<String> {
        self.calls.lock().unwrap().described.clone()
    }

    pub(crate) fn deleted(&self) -> Vec<String> {
        self.calls.lock().unwrap().deleted.clone()
    }
}

#[async_trait]
impl StackProvider for FakeProvider {
    fn name(&self) -> &'static str {
        "fake"
    }

    async fn list_stacks(&self, statuses: &[StackStatus]) -> Result<Vec<StackSummary>, ProviderError> {
        {
            let mut calls = self.calls.lock().unwrap();
            calls.lists += 1;
            calls.statuses = statuses.to_vec();
        }
        if self.fail_list {
            return Err(ProviderError::List("connection reset by peer".into()));
        }
        Ok(self
            .stacks
            .iter()
            .map(|s| StackSummary::new(s.name.clone()))
            .collect())
    }

    async fn describe_stack(&self, name: &str) -> Result<StackDetail, ProviderError> {
        self.calls.lock().unwrap().described.push(name.to_string());
        if self.fail_describe.contains(name) {
            return Err(ProviderError::Describe {
                stack: name.to_string(),
                reason: "throttled".into(),
            });
        }
        self.stacks
            .iter()
            .find(|s| s.name == name)
            .cloned()
            .ok_or_else(|| ProviderError::Describe {
                stack: name.to_string(),
                reason: "stack does not exist".into(),
            })
    }

    async fn delete_stack(&self, name: &str) -> Result<(), ProviderError> {
        self.calls.lock().unwrap().deleted.push(name.to_string());
        if self.fail_delete.contains(name) {
            return Err(ProviderError::Delete {
                stack: name.to_string(),
                reason: "access denied".into(),
            });
        }
        Ok(())
    }
}
