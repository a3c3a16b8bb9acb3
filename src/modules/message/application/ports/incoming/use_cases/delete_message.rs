use async_trait::async_trait;
use uuid::Uuid;

#[derive(Debug, Clone, thiserror::Error)]
pub enum DeleteMessageError {
    #[error("Message not found")]
    MessageNotFound,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait DeleteMessageUseCase: Send + Sync {
    async fn execute(&self, message_id: Uuid) -> Result<(), DeleteMessageError>;
}
