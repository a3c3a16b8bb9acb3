use async_trait::async_trait;
use sea_orm::{
    sea_query::Expr, ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter, Set, TransactionTrait,
};
use std::sync::Arc;
use uuid::Uuid;

use crate::analytics::application::ports::outgoing::{
    VisitRecord, VisitRepository, VisitRepositoryError,
};

use super::visit_sea_orm_entity::{ActiveModel, Column, Entity, Model};

#[derive(Debug, Clone)]
pub struct VisitRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl VisitRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl VisitRepository for VisitRepositoryPostgres {
    async fn record_visit(&self, app_url: String) -> Result<VisitRecord, VisitRepositoryError> {
        let record = self
            .db
            .transaction::<_, VisitRecord, DbErr>(|txn| {
                Box::pin(async move {
                    let updated = Entity::update_many()
                        .col_expr(
                            Column::VisitCount,
                            Expr::col(Column::VisitCount).add(1),
                        )
                        .filter(Column::AppUrl.eq(app_url.clone()))
                        .exec(txn)
                        .await?;

                    if updated.rows_affected == 0 {
                        let active = ActiveModel {
                            id: Set(Uuid::new_v4()),
                            app_url: Set(app_url),
                            visit_count: Set(1),
                            ..Default::default()
                        };

                        let inserted: Model = active.insert(txn).await?;
                        return Ok(inserted.to_record());
                    }

                    let row = Entity::find()
                        .filter(Column::AppUrl.eq(app_url.clone()))
                        .one(txn)
                        .await?
                        .ok_or_else(|| {
                            DbErr::RecordNotFound(format!("visit row for {app_url} vanished"))
                        })?;

                    Ok(row.to_record())
                })
            })
            .await
            .map_err(|e| match e {
                sea_orm::TransactionError::Connection(err) => {
                    VisitRepositoryError::DatabaseError(err.to_string())
                }
                sea_orm::TransactionError::Transaction(err) => {
                    VisitRepositoryError::DatabaseError(err.to_string())
                }
            })?;

        Ok(record)
    }
}
