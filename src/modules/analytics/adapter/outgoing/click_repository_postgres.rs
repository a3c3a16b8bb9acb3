use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, PaginatorTrait, QueryFilter,
    QueryOrder, QuerySelect, Set,
};
use std::sync::Arc;
use uuid::Uuid;

use crate::analytics::application::ports::outgoing::{
    ClickRecord, ClickRepository, ClickRepositoryError,
};

use super::click_sea_orm_entity::{ActiveModel, Column, Entity, Model};

#[derive(Debug, Clone)]
pub struct ClickRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl ClickRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

fn map_db_err(e: sea_orm::DbErr) -> ClickRepositoryError {
    ClickRepositoryError::DatabaseError(e.to_string())
}

#[async_trait]
impl ClickRepository for ClickRepositoryPostgres {
    async fn insert_click(
        &self,
        project_title: String,
    ) -> Result<ClickRecord, ClickRepositoryError> {
        let active = ActiveModel {
            id: Set(Uuid::new_v4()),
            project_title: Set(project_title),
            clicked_at: Set(Utc::now().into()),
        };

        let inserted: Model = active.insert(&*self.db).await.map_err(map_db_err)?;

        Ok(inserted.to_record())
    }

    async fn count_clicks(&self) -> Result<u64, ClickRepositoryError> {
        Entity::find().count(&*self.db).await.map_err(map_db_err)
    }

    async fn recent_clicks(&self, limit: u64) -> Result<Vec<ClickRecord>, ClickRepositoryError> {
        let rows = Entity::find()
            .order_by_desc(Column::ClickedAt)
            .limit(limit)
            .all(&*self.db)
            .await
            .map_err(map_db_err)?;

        Ok(rows.iter().map(|row| row.to_record()).collect())
    }

    async fn clicks_since(
        &self,
        from: DateTime<Utc>,
    ) -> Result<Vec<DateTime<Utc>>, ClickRepositoryError> {
        let rows = Entity::find()
            .filter(Column::ClickedAt.gte(from))
            .all(&*self.db)
            .await
            .map_err(map_db_err)?;

        Ok(rows.iter().map(|row| row.clicked_at.into()).collect())
    }

    async fn click_titles(&self) -> Result<Vec<String>, ClickRepositoryError> {
        let rows = Entity::find()
            .order_by_asc(Column::ClickedAt)
            .all(&*self.db)
            .await
            .map_err(map_db_err)?;

        Ok(rows.into_iter().map(|row| row.project_title).collect())
    }
}
