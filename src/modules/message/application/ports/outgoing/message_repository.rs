use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MessageRecord {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub message: String,
    pub status: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct CreateMessageData {
    pub name: String,
    pub email: String,
    pub message: String,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum MessageRepositoryError {
    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Message not found")]
    MessageNotFound,
}

#[async_trait]
pub trait MessageRepository: Send + Sync {
    /// Inserts with status `unread`; rows are never updated afterwards.
    async fn insert_message(
        &self,
        data: CreateMessageData,
    ) -> Result<MessageRecord, MessageRepositoryError>;

    async fn delete_message(&self, message_id: Uuid) -> Result<(), MessageRepositoryError>;
}
