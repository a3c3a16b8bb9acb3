use async_trait::async_trait;
use sea_orm::{DatabaseConnection, EntityTrait, PaginatorTrait, QueryOrder, QuerySelect};
use std::sync::Arc;

use crate::message::application::ports::outgoing::{
    MessageQuery, MessageQueryError, MessageRecord,
};

use super::sea_orm_entity::{Column, Entity};

#[derive(Debug, Clone)]
pub struct MessageQueryPostgres {
    db: Arc<DatabaseConnection>,
}

impl MessageQueryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl MessageQuery for MessageQueryPostgres {
    async fn latest_messages(&self, limit: u64) -> Result<Vec<MessageRecord>, MessageQueryError> {
        let rows = Entity::find()
            .order_by_desc(Column::CreatedAt)
            .limit(limit)
            .all(&*self.db)
            .await
            .map_err(|e| MessageQueryError::DatabaseError(e.to_string()))?;

        Ok(rows.iter().map(|row| row.to_record()).collect())
    }

    async fn count_messages(&self) -> Result<u64, MessageQueryError> {
        Entity::find()
            .count(&*self.db)
            .await
            .map_err(|e| MessageQueryError::DatabaseError(e.to_string()))
    }
}
