use thiserror::Error;

use crate::{provider::ProviderError, stage::Stage};

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("{stage} stage failed: {source}")]
    Stage {
        stage: Stage,
        #[source]
        source: ProviderError,
    },
}

impl CoreError {
    pub(crate) fn at(stage: Stage) -> impl FnOnce(ProviderError) -> CoreError {
        move |source| CoreError::Stage { stage, source }
    }

    /// Pipeline stage the error originated from.
    pub fn stage(&self) -> Stage {
        match self {
            CoreError::Stage { stage, .. } => *stage,
        }
    }
}
