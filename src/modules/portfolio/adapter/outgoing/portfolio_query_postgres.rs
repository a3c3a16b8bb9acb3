use async_trait::async_trait;
use sea_orm::{DatabaseConnection, EntityTrait, PaginatorTrait, QueryOrder};
use std::sync::Arc;

use crate::portfolio::application::ports::outgoing::{
    PortfolioItemRecord, PortfolioQuery, PortfolioQueryError,
};

use super::sea_orm_entity::{Column, Entity};

#[derive(Debug, Clone)]
pub struct PortfolioQueryPostgres {
    db: Arc<DatabaseConnection>,
}

impl PortfolioQueryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl PortfolioQuery for PortfolioQueryPostgres {
    async fn list_items(&self) -> Result<Vec<PortfolioItemRecord>, PortfolioQueryError> {
        let rows = Entity::find()
            .order_by_asc(Column::SortOrder)
            .all(&*self.db)
            .await
            .map_err(|e| PortfolioQueryError::DatabaseError(e.to_string()))?;

        Ok(rows.iter().map(|row| row.to_record()).collect())
    }

    async fn count_items(&self) -> Result<u64, PortfolioQueryError> {
        Entity::find()
            .count(&*self.db)
            .await
            .map_err(|e| PortfolioQueryError::DatabaseError(e.to_string()))
    }
}
