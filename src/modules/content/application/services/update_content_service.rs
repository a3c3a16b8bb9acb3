use async_trait::async_trait;

use crate::content::application::{
    domain::entities::validate_payload,
    ports::{
        incoming::use_cases::{UpdateContentCommand, UpdateContentError, UpdateContentUseCase},
        outgoing::{ContentRecord, ContentRepository, ContentRepositoryError},
    },
};

pub struct UpdateContentService<R>
where
    R: ContentRepository + Send + Sync,
{
    repository: R,
}

impl<R> UpdateContentService<R>
where
    R: ContentRepository + Send + Sync,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> UpdateContentUseCase for UpdateContentService<R>
where
    R: ContentRepository + Send + Sync,
{
    async fn execute(
        &self,
        command: UpdateContentCommand,
    ) -> Result<ContentRecord, UpdateContentError> {
        validate_payload(command.kind, &command.content)
            .map_err(|reason| UpdateContentError::InvalidPayload(command.kind.as_str(), reason))?;

        self.repository
            .save(command.kind, command.content, command.revision, command.editor)
            .await
            .map_err(|e| match e {
                ContentRepositoryError::ContentNotFound => UpdateContentError::ContentNotFound,
                ContentRepositoryError::RevisionConflict => UpdateContentError::RevisionConflict,
                other => UpdateContentError::RepositoryError(other.to_string()),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::application::domain::entities::UserId;
    use crate::content::application::domain::entities::ContentKind;
    use serde_json::json;
    use std::sync::Mutex;
    use uuid::Uuid;

    struct InMemoryContentRepository {
        record: Mutex<ContentRecord>,
    }

    impl InMemoryContentRepository {
        fn new(kind: ContentKind, content: serde_json::Value, revision: i64) -> Self {
            Self {
                record: Mutex::new(ContentRecord {
                    kind,
                    content,
                    revision,
                }),
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
            Ok(record.clone())
        }
    }

    fn hero_payload() -> serde_json::Value {
        json!({
            "title": "Strategy consultant",
            "subtitle": "I help teams ship",
            "features": []
        })
    }

    #[actix_web::test]
    async fn save_at_current_revision_bumps_it() {
        let repository =
            InMemoryContentRepository::new(ContentKind::Hero, hero_payload(), 3);
        let service = UpdateContentService::new(repository);

        let updated = service
            .execute(UpdateContentCommand {
                kind: ContentKind::Hero,
                content: hero_payload(),
                revision: 3,
                editor: UserId::from(Uuid::new_v4()),
            })
            .await
            .unwrap();

        assert_eq!(updated.revision, 4);
    }

    #[actix_web::test]
    async fn stale_revision_is_rejected() {
        let repository =
            InMemoryContentRepository::new(ContentKind::Hero, hero_payload(), 5);
        let service = UpdateContentService::new(repository);

        let result = service
            .execute(UpdateContentCommand {
                kind: ContentKind::Hero,
                content: hero_payload(),
                revision: 4,
                editor: UserId::from(Uuid::new_v4()),
            })
            .await;

        assert!(matches!(result, Err(UpdateContentError::RevisionConflict)));
    }

    #[actix_web::test]
    async fn malformed_payload_never_reaches_the_repository() {
        let repository =
            InMemoryContentRepository::new(ContentKind::Hero, hero_payload(), 0);
        let service = UpdateContentService::new(repository);

        let result = service
            .execute(UpdateContentCommand {
                kind: ContentKind::Hero,
                content: json!({"subtitle": "missing title"}),
                revision: 0,
                editor: UserId::from(Uuid::new_v4()),
            })
            .await;

        assert!(matches!(
            result,
            Err(UpdateContentError::InvalidPayload("hero_content", _))
        ));
    }
}
