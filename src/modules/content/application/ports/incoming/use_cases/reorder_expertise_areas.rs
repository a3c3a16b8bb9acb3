use async_trait::async_trait;

use crate::{
    auth::application::domain::entities::UserId,
    content::application::domain::entities::ExpertiseArea,
};

#[derive(Debug, Clone, Copy)]
pub struct ReorderExpertiseAreasCommand {
    pub editor: UserId,
    pub source_index: usize,
    pub target_index: usize,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum ReorderExpertiseAreasError {
    #[error("Source index {index} is out of bounds for list of length {len}")]
    SourceOutOfBounds { index: usize, len: usize },

    #[error("Target index {index} is out of bounds for list of length {len}")]
    TargetOutOfBounds { index: usize, len: usize },

    #[error("Content was modified by another writer")]
    RevisionConflict,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait ReorderExpertiseAreasUseCase: Send + Sync {
    async fn execute(
        &self,
        command: ReorderExpertiseAreasCommand,
    ) -> Result<Vec<ExpertiseArea>, ReorderExpertiseAreasError>;
}
