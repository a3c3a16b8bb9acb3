use async_trait::async_trait;
use sea_orm::{
    sea_query::Expr, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter,
};
use std::sync::Arc;

use crate::{
    auth::application::domain::entities::UserId,
    content::application::{
        domain::entities::ContentKind,
        ports::outgoing::{ContentRecord, ContentRepository, ContentRepositoryError},
    },
};

use super::sea_orm_entity::{Column, Entity};

#[derive(Debug, Clone)]
pub struct ContentRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl ContentRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

fn map_db_err(e: DbErr) -> ContentRepositoryError {
    ContentRepositoryError::DatabaseError(e.to_string())
}

#[async_trait]
impl ContentRepository for ContentRepositoryPostgres {
    async fn load(&self, kind: ContentKind) -> Result<ContentRecord, ContentRepositoryError> {
        let row = Entity::find()
            .filter(Column::ContentType.eq(kind.as_str()))
            .one(&*self.db)
            .await
            .map_err(map_db_err)?;

        match row {
            Some(model) => Ok(model.to_record(kind)),
            None => Err(ContentRepositoryError::ContentNotFound),
        }
    }

    async fn save(
        &self,
        kind: ContentKind,
        content: serde_json::Value,
        expected_revision: i64,
        editor: UserId,
    ) -> Result<ContentRecord, ContentRepositoryError> {
        // Single-statement compare-and-swap: the revision filter makes
        // the update a no-op when another writer got there first.
        let result = Entity::update_many()
            .col_expr(Column::Content, Expr::value(content.clone()))
            .col_expr(Column::Revision, Expr::value(expected_revision + 1))
            .col_expr(Column::UserId, Expr::value(Some(editor.value())))
            .filter(Column::ContentType.eq(kind.as_str()))
            .filter(Column::Revision.eq(expected_revision))
            .exec(&*self.db)
            .await
            .map_err(map_db_err)?;

        if result.rows_affected == 0 {
            // Distinguish a missing row from a lost race.
            let exists = Entity::find()
                .filter(Column::ContentType.eq(kind.as_str()))
                .one(&*self.db)
                .await
                .map_err(map_db_err)?;

            return Err(match exists {
                Some(_) => ContentRepositoryError::RevisionConflict,
                None => ContentRepositoryError::ContentNotFound,
            });
        }

        Ok(ContentRecord {
            kind,
            content,
            revision: expected_revision + 1,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::adapter::outgoing::sea_orm_entity::Model;
    use chrono::Utc;
    use sea_orm::{DatabaseBackend, MockDatabase, MockExecResult};
    use serde_json::json;
    use uuid::Uuid;

    fn content_row(kind: ContentKind, revision: i64) -> Model {
        let now = Utc::now().fixed_offset();

        Model {
            id: Uuid::new_v4(),
            content_type: kind.as_str().to_string(),
            content: json!({"title": "Hello"}),
            revision,
            user_id: None,
            created_at: now,
            updated_at: now,
        }
    }

    #[actix_web::test]
    async fn load_returns_the_row_for_the_kind() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([vec![content_row(ContentKind::Hero, 7)]])
            .into_connection();

        let repository = ContentRepositoryPostgres::new(Arc::new(db));

        let record = repository.load(ContentKind::Hero).await.unwrap();

        assert_eq!(record.revision, 7);
    }

    #[actix_web::test]
    async fn load_maps_missing_row_to_not_found() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([Vec::<Model>::new()])
            .into_connection();

        let repository = ContentRepositoryPostgres::new(Arc::new(db));

        let result = repository.load(ContentKind::About).await;

        assert!(matches!(result, Err(ContentRepositoryError::ContentNotFound)));
    }

    #[actix_web::test]
    async fn save_with_matching_revision_reports_the_bumped_one() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_exec_results([MockExecResult {
                last_insert_id: 0,
                rows_affected: 1,
            }])
            .into_connection();

        let repository = ContentRepositoryPostgres::new(Arc::new(db));

        let record = repository
            .save(
                ContentKind::Hero,
                json!({"title": "New"}),
                7,
                UserId::from(Uuid::new_v4()),
            )
            .await
            .unwrap();

        assert_eq!(record.revision, 8);
    }

    #[actix_web::test]
    async fn save_against_a_moved_revision_conflicts() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_exec_results([MockExecResult {
                last_insert_id: 0,
                rows_affected: 0,
            }])
            .append_query_results([vec![content_row(ContentKind::Hero, 8)]])
            .into_connection();

        let repository = ContentRepositoryPostgres::new(Arc::new(db));

        let result = repository
            .save(
                ContentKind::Hero,
                json!({"title": "Stale"}),
                7,
                UserId::from(Uuid::new_v4()),
            )
            .await;

        assert!(matches!(
            result,
            Err(ContentRepositoryError::RevisionConflict)
        ));
    }
}
