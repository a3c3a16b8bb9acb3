use async_trait::async_trait;

use crate::{
    auth::application::domain::entities::UserId,
    content::application::domain::entities::ExpertiseArea,
};

#[derive(Debug, Clone, thiserror::Error)]
pub enum RemoveExpertiseAreaError {
    #[error("Index {index} is out of bounds for list of length {len}")]
    IndexOutOfBounds { index: usize, len: usize },

    #[error("Content was modified by another writer")]
    RevisionConflict,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait RemoveExpertiseAreaUseCase: Send + Sync {
    /// Removes the area at `index` and returns the remaining list.
    async fn execute(
        &self,
        editor: UserId,
        index: usize,
    ) -> Result<Vec<ExpertiseArea>, RemoveExpertiseAreaError>;
}
