use async_trait::async_trait;
use sea_orm::{
    sea_query::Expr, ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter, QueryOrder, Set, TransactionTrait,
};
use std::sync::Arc;
use uuid::Uuid;

use crate::portfolio::application::ports::outgoing::{
    CreatePortfolioItemData, PortfolioItemRecord, PortfolioRepository, PortfolioRepositoryError,
    UpdatePortfolioItemData,
};

use super::sea_orm_entity::{ActiveModel, Column, Entity, Model};

#[derive(Debug, Clone)]
pub struct PortfolioRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl PortfolioRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

fn map_db_err(e: DbErr) -> PortfolioRepositoryError {
    match e {
        DbErr::RecordNotFound(_) => PortfolioRepositoryError::ItemNotFound,
        other => PortfolioRepositoryError::DatabaseError(other.to_string()),
    }
}

#[async_trait]
impl PortfolioRepository for PortfolioRepositoryPostgres {
    async fn insert_item(
        &self,
        data: CreatePortfolioItemData,
    ) -> Result<PortfolioItemRecord, PortfolioRepositoryError> {
        let active = ActiveModel {
            id: Set(Uuid::new_v4()),
            header: Set(data.header),
            description: Set(data.description),
            link: Set(data.link),
            image_url: Set(data.image_url),
            sort_order: Set(data.sort_order),
            user_id: Set(Some(data.owner.into())),
            ..Default::default()
        };

        let inserted: Model = active.insert(&*self.db).await.map_err(map_db_err)?;

        Ok(inserted.to_record())
    }

    async fn update_item(
        &self,
        item_id: Uuid,
        data: UpdatePortfolioItemData,
    ) -> Result<PortfolioItemRecord, PortfolioRepositoryError> {
        let active = ActiveModel {
            id: Set(item_id),
            header: Set(data.header),
            description: Set(data.description),
            link: Set(data.link),
            image_url: Set(data.image_url),
            user_id: Set(Some(data.owner.into())),
            ..Default::default()
        };

        let updated: Model = active.update(&*self.db).await.map_err(map_db_err)?;

        Ok(updated.to_record())
    }

    async fn delete_item(&self, item_id: Uuid) -> Result<(), PortfolioRepositoryError> {
        self.db
            .transaction::<_, (), DbErr>(|txn| {
                Box::pin(async move {
                    let deleted = Entity::delete_by_id(item_id).exec(txn).await?;

                    if deleted.rows_affected == 0 {
                        return Err(DbErr::RecordNotFound(format!(
                            "portfolio card {item_id} not found"
                        )));
                    }

                    // Close the gap so sort_order stays dense.
                    let remaining = Entity::find()
                        .order_by_asc(Column::SortOrder)
                        .all(txn)
                        .await?;

                    for (index, row) in remaining.into_iter().enumerate() {
                        let expected = index as i32;
                        if row.sort_order != expected {
                            let mut active: ActiveModel = row.into();
                            active.sort_order = Set(expected);
                            active.update(txn).await?;
                        }
                    }

                    Ok(())
                })
            })
            .await
            .map_err(|e| match e {
                sea_orm::TransactionError::Connection(err) => map_db_err(err),
                sea_orm::TransactionError::Transaction(err) => map_db_err(err),
            })
    }

    async fn save_order(
        &self,
        order: Vec<(Uuid, i32)>,
    ) -> Result<(), PortfolioRepositoryError> {
        self.db
            .transaction::<_, (), DbErr>(|txn| {
                Box::pin(async move {
                    for (item_id, sort_order) in order {
                        Entity::update_many()
                            .col_expr(Column::SortOrder, Expr::value(sort_order))
                            .filter(Column::Id.eq(item_id))
                            .exec(txn)
                            .await?;
                    }

                    Ok(())
                })
            })
            .await
            .map_err(|e| match e {
                sea_orm::TransactionError::Connection(err) => map_db_err(err),
                sea_orm::TransactionError::Transaction(err) => map_db_err(err),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::application::domain::entities::UserId;
    use chrono::Utc;
    use sea_orm::{DatabaseBackend, MockDatabase, MockExecResult, RuntimeErr};

    fn card_model(id: Uuid, header: &str, sort_order: i32) -> Model {
        let now = Utc::now().fixed_offset();

        Model {
            id,
            header: header.to_string(),
            description: "desc".to_string(),
            link: String::new(),
            image_url: None,
            sort_order,
            user_id: Some(Uuid::new_v4()),
            created_at: now,
            updated_at: now,
        }
    }

    #[tokio::test]
    async fn insert_item_returns_inserted_record() {
        let id = Uuid::new_v4();
        let owner = UserId::from(Uuid::new_v4());
        let inserted = card_model(id, "New Project", 2);

        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![inserted.clone()]])
            .into_connection();

        let repo = PortfolioRepositoryPostgres::new(Arc::new(db));

        let record = repo
            .insert_item(CreatePortfolioItemData {
                header: "New Project".to_string(),
                description: "desc".to_string(),
                link: String::new(),
                image_url: None,
                sort_order: 2,
                owner,
            })
            .await
            .unwrap();

        assert_eq!(record.id, id);
        assert_eq!(record.header, "New Project");
        assert_eq!(record.sort_order, 2);
    }

    #[tokio::test]
    async fn insert_item_database_error_is_mapped() {
        let owner = UserId::from(Uuid::new_v4());

        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_exec_errors(vec![DbErr::Query(RuntimeErr::Internal(
                "insert failed".into(),
            ))])
            .into_connection();

        let repo = PortfolioRepositoryPostgres::new(Arc::new(db));

        let result = repo
            .insert_item(CreatePortfolioItemData {
                header: "x".to_string(),
                description: String::new(),
                link: String::new(),
                image_url: None,
                sort_order: 0,
                owner,
            })
            .await;

        assert!(matches!(
            result,
            Err(PortfolioRepositoryError::DatabaseError(_))
        ));
    }

    #[tokio::test]
    async fn save_order_updates_each_row_in_one_transaction() {
        let first = Uuid::new_v4();
        let second = Uuid::new_v4();

        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_exec_results(vec![
                MockExecResult {
                    last_insert_id: 0,
                    rows_affected: 1,
                },
                MockExecResult {
                    last_insert_id: 0,
                    rows_affected: 1,
                },
            ])
            .into_connection();

        let repo = PortfolioRepositoryPostgres::new(Arc::new(db));

        let result = repo.save_order(vec![(first, 0), (second, 1)]).await;

        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn delete_missing_item_is_not_found() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_exec_results(vec![MockExecResult {
                last_insert_id: 0,
                rows_affected: 0,
            }])
            .into_connection();

        let repo = PortfolioRepositoryPostgres::new(Arc::new(db));

        let result = repo.delete_item(Uuid::new_v4()).await;

        assert!(matches!(result, Err(PortfolioRepositoryError::ItemNotFound)));
    }
}
