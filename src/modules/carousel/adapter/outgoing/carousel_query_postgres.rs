use async_trait::async_trait;
use sea_orm::{DatabaseConnection, EntityTrait, PaginatorTrait, QueryOrder};
use std::sync::Arc;

use crate::carousel::application::ports::outgoing::{
    CarouselImageRecord, CarouselQuery, CarouselQueryError,
};

use super::sea_orm_entity::{Column, Entity};

#[derive(Debug, Clone)]
pub struct CarouselQueryPostgres {
    db: Arc<DatabaseConnection>,
}

impl CarouselQueryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl CarouselQuery for CarouselQueryPostgres {
    async fn list_images(&self) -> Result<Vec<CarouselImageRecord>, CarouselQueryError> {
        let rows = Entity::find()
            .order_by_asc(Column::SortOrder)
            .all(&*self.db)
            .await
            .map_err(|e| CarouselQueryError::DatabaseError(e.to_string()))?;

        Ok(rows.iter().map(|row| row.to_record()).collect())
    }

    async fn count_images(&self) -> Result<u64, CarouselQueryError> {
        Entity::find()
            .count(&*self.db)
            .await
            .map_err(|e| CarouselQueryError::DatabaseError(e.to_string()))
    }
}
