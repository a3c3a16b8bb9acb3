use async_trait::async_trait;

use crate::{
    auth::application::domain::entities::UserId,
    content::application::{
        domain::entities::{ContentKind, ExpertiseArea},
        ports::{
            incoming::use_cases::{RemoveExpertiseAreaError, RemoveExpertiseAreaUseCase},
            outgoing::{ContentRepository, ContentRepositoryError},
        },
    },
};

pub struct RemoveExpertiseAreaService<R>
where
    R: ContentRepository + Send + Sync,
{
    repository: R,
}

impl<R> RemoveExpertiseAreaService<R>
where
    R: ContentRepository + Send + Sync,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

fn map_repo_err(e: ContentRepositoryError) -> RemoveExpertiseAreaError {
    match e {
        ContentRepositoryError::RevisionConflict => RemoveExpertiseAreaError::RevisionConflict,
        other => RemoveExpertiseAreaError::RepositoryError(other.to_string()),
    }
}

#[async_trait]
impl<R> RemoveExpertiseAreaUseCase for RemoveExpertiseAreaService<R>
where
    R: ContentRepository + Send + Sync,
{
    async fn execute(
        &self,
        editor: UserId,
        index: usize,
    ) -> Result<Vec<ExpertiseArea>, RemoveExpertiseAreaError> {
        let record = self
            .repository
            .load(ContentKind::ExpertiseAreas)
            .await
            .map_err(map_repo_err)?;

        let mut areas: Vec<ExpertiseArea> = serde_json::from_value(record.content)
            .map_err(|e| RemoveExpertiseAreaError::RepositoryError(e.to_string()))?;

        if index >= areas.len() {
            return Err(RemoveExpertiseAreaError::IndexOutOfBounds {
                index,
                len: areas.len(),
            });
        }

        areas.remove(index);

        let payload = serde_json::to_value(&areas)
            .map_err(|e| RemoveExpertiseAreaError::RepositoryError(e.to_string()))?;

        self.repository
            .save(ContentKind::ExpertiseAreas, payload, record.revision, editor)
            .await
            .map_err(map_repo_err)?;

        Ok(areas)
    }
}
