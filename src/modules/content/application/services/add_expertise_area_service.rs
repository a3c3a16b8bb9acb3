use async_trait::async_trait;

use crate::content::application::{
    domain::entities::{ContentKind, ExpertiseArea},
    ports::{
        incoming::use_cases::{
            AddExpertiseAreaCommand, AddExpertiseAreaError, AddExpertiseAreaUseCase,
        },
        outgoing::{ContentRepository, ContentRepositoryError},
    },
};

pub struct AddExpertiseAreaService<R>
where
    R: ContentRepository + Send + Sync,
{
    repository: R,
}

impl<R> AddExpertiseAreaService<R>
where
    R: ContentRepository + Send + Sync,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

fn map_repo_err(e: ContentRepositoryError) -> AddExpertiseAreaError {
    match e {
        ContentRepositoryError::RevisionConflict => AddExpertiseAreaError::RevisionConflict,
        other => AddExpertiseAreaError::RepositoryError(other.to_string()),
    }
}

#[async_trait]
impl<R> AddExpertiseAreaUseCase for AddExpertiseAreaService<R>
where
    R: ContentRepository + Send + Sync,
{
    async fn execute(
        &self,
        command: AddExpertiseAreaCommand,
    ) -> Result<Vec<ExpertiseArea>, AddExpertiseAreaError> {
        let record = self
            .repository
            .load(ContentKind::ExpertiseAreas)
            .await
            .map_err(map_repo_err)?;

        let mut areas: Vec<ExpertiseArea> = serde_json::from_value(record.content)
            .map_err(|e| AddExpertiseAreaError::RepositoryError(e.to_string()))?;

        areas.push(ExpertiseArea {
            title: command.title().to_string(),
            description: command.description().to_string(),
        });

        let payload = serde_json::to_value(&areas)
            .map_err(|e| AddExpertiseAreaError::RepositoryError(e.to_string()))?;

        self.repository
            .save(
                ContentKind::ExpertiseAreas,
                payload,
                record.revision,
                command.editor(),
            )
            .await
            .map_err(map_repo_err)?;

        Ok(areas)
    }
}
