use async_trait::async_trait;

use super::message_repository::MessageRecord;

#[derive(Debug, Clone, thiserror::Error)]
pub enum MessageQueryError {
    #[error("Database error: {0}")]
    DatabaseError(String),
}

/// Read side consumed by the dashboard aggregation.
#[async_trait]
pub trait MessageQuery: Send + Sync {
    /// The `limit` most recent messages, newest first.
    async fn latest_messages(&self, limit: u64) -> Result<Vec<MessageRecord>, MessageQueryError>;

    async fn count_messages(&self) -> Result<u64, MessageQueryError>;
}
