use async_trait::async_trait;

use crate::{
    content::application::{
        domain::entities::{ContentKind, ExpertiseArea},
        ports::{
            incoming::use_cases::{
                ReorderExpertiseAreasCommand, ReorderExpertiseAreasError,
                ReorderExpertiseAreasUseCase,
            },
            outgoing::{ContentRepository, ContentRepositoryError},
        },
    },
    shared::ordering::{self, ReorderError},
};

pub struct ReorderExpertiseAreasService<R>
where
    R: ContentRepository + Send + Sync,
{
    repository: R,
}

impl<R> ReorderExpertiseAreasService<R>
where
    R: ContentRepository + Send + Sync,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

fn map_repo_err(e: ContentRepositoryError) -> ReorderExpertiseAreasError {
    match e {
        ContentRepositoryError::RevisionConflict => ReorderExpertiseAreasError::RevisionConflict,
        other => ReorderExpertiseAreasError::RepositoryError(other.to_string()),
    }
}

#[async_trait]
impl<R> ReorderExpertiseAreasUseCase for ReorderExpertiseAreasService<R>
where
    R: ContentRepository + Send + Sync,
{
    async fn execute(
        &self,
        command: ReorderExpertiseAreasCommand,
    ) -> Result<Vec<ExpertiseArea>, ReorderExpertiseAreasError> {
        let record = self
            .repository
            .load(ContentKind::ExpertiseAreas)
            .await
            .map_err(map_repo_err)?;

        let mut areas: Vec<ExpertiseArea> = serde_json::from_value(record.content)
            .map_err(|e| ReorderExpertiseAreasError::RepositoryError(e.to_string()))?;

        let moved = ordering::move_item(&mut areas, command.source_index, command.target_index)
            .map_err(|e| match e {
                ReorderError::SourceOutOfBounds { index, len } => {
                    ReorderExpertiseAreasError::SourceOutOfBounds { index, len }
                }
                ReorderError::TargetOutOfBounds { index, len } => {
                    ReorderExpertiseAreasError::TargetOutOfBounds { index, len }
                }
            })?;

        if !moved {
            return Ok(areas);
        }

        let payload = serde_json::to_value(&areas)
            .map_err(|e| ReorderExpertiseAreasError::RepositoryError(e.to_string()))?;

        self.repository
            .save(
                ContentKind::ExpertiseAreas,
                payload,
                record.revision,
                command.editor,
            )
            .await
            .map_err(map_repo_err)?;

        Ok(areas)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::application::domain::entities::UserId;
    use crate::content::application::ports::outgoing::ContentRecord;
    use serde_json::json;
    use std::sync::Mutex;
    use uuid::Uuid;

    struct InMemoryContentRepository {
        record: Mutex<ContentRecord>,
        saves: Mutex<u32>,
    }

    impl InMemoryContentRepository {
        fn with_areas(titles: &[&str]) -> Self {
            let areas: Vec<serde_json::Value> = titles
                .iter()
                .map(|t| json!({"title": t, "description": ""}))
                .collect();
            Self {
                record: Mutex::new(ContentRecord {
                    kind: ContentKind::ExpertiseAreas,
                    content: json!(areas),
                    revision: 0,
                }),
                saves: Mutex::new(0),
            }
        }
    }

    #[async_trait]
    impl ContentRepository for InMemoryContentRepository {
        async fn load(&self, _kind: ContentKind) -> Result<ContentRecord, ContentRepositoryError> {
            Ok(self.record.lock().unwrap().clone())
        }

        async fn save(
            &self,
            kind: ContentKind,
            content: serde_json::Value,
            expected_revision: i64,
            _editor: UserId,
        ) -> Result<ContentRecord, ContentRepositoryError> {
            let mut record = self.record.lock().unwrap();
            if record.revision != expected_revision {
                return Err(ContentRepositoryError::RevisionConflict);
            }
            *record = ContentRecord {
                kind,
                content,
                revision: expected_revision + 1,
            };
            *self.saves.lock().unwrap() += 1;
            Ok(record.clone())
        }
    }

    fn command(source: usize, target: usize) -> ReorderExpertiseAreasCommand {
        ReorderExpertiseAreasCommand {
            editor: UserId::from(Uuid::new_v4()),
            source_index: source,
            target_index: target,
        }
    }

    #[actix_web::test]
    async fn moves_an_area_and_persists_the_new_order() {
        let service = ReorderExpertiseAreasService::new(
            InMemoryContentRepository::with_areas(&["A", "B", "C"]),
        );

        let areas = service.execute(command(2, 0)).await.unwrap();

        let titles: Vec<&str> = areas.iter().map(|a| a.title.as_str()).collect();
        assert_eq!(titles, vec!["C", "A", "B"]);
        assert_eq!(*service.repository.saves.lock().unwrap(), 1);
    }

    #[actix_web::test]
    async fn same_source_and_target_skips_the_write() {
        let service = ReorderExpertiseAreasService::new(
            InMemoryContentRepository::with_areas(&["A", "B"]),
        );

        let areas = service.execute(command(1, 1)).await.unwrap();

        assert_eq!(areas.len(), 2);
        assert_eq!(*service.repository.saves.lock().unwrap(), 0);
    }

    #[actix_web::test]
    async fn source_out_of_bounds_is_rejected() {
        let service = ReorderExpertiseAreasService::new(
            InMemoryContentRepository::with_areas(&["A", "B"]),
        );

        let result = service.execute(command(5, 0)).await;

        assert!(matches!(
            result,
            Err(ReorderExpertiseAreasError::SourceOutOfBounds { index: 5, len: 2 })
        ));
    }
}
