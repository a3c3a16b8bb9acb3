use async_trait::async_trait;
use sea_orm::{ActiveModelTrait, DatabaseConnection, EntityTrait, Set};
use std::sync::Arc;
use uuid::Uuid;

use crate::message::application::ports::outgoing::{
    CreateMessageData, MessageRecord, MessageRepository, MessageRepositoryError,
};

use super::sea_orm_entity::{ActiveModel, Entity, Model};

#[derive(Debug, Clone)]
pub struct MessageRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl MessageRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl MessageRepository for MessageRepositoryPostgres {
    async fn insert_message(
        &self,
        data: CreateMessageData,
    ) -> Result<MessageRecord, MessageRepositoryError> {
        let active = ActiveModel {
            id: Set(Uuid::new_v4()),
            name: Set(data.name),
            email: Set(data.email),
            message: Set(data.message),
            status: Set("unread".to_string()),
            ..Default::default()
        };

        let inserted: Model = active
            .insert(&*self.db)
            .await
            .map_err(|e| MessageRepositoryError::DatabaseError(e.to_string()))?;

        Ok(inserted.to_record())
    }

    async fn delete_message(&self, message_id: Uuid) -> Result<(), MessageRepositoryError> {
        let deleted = Entity::delete_by_id(message_id)
            .exec(&*self.db)
            .await
            .map_err(|e| MessageRepositoryError::DatabaseError(e.to_string()))?;

        if deleted.rows_affected == 0 {
            return Err(MessageRepositoryError::MessageNotFound);
        }

        Ok(())
    }
}
