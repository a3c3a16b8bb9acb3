use async_trait::async_trait;
use uuid::Uuid;

use crate::message::application::ports::{
    incoming::use_cases::{DeleteMessageError, DeleteMessageUseCase},
    outgoing::{MessageRepository, MessageRepositoryError},
};

pub struct DeleteMessageService<R>
where
    R: MessageRepository + Send + Sync,
{
    repository: R,
}

impl<R> DeleteMessageService<R>
where
    R: MessageRepository + Send + Sync,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> DeleteMessageUseCase for DeleteMessageService<R>
where
    R: MessageRepository + Send + Sync,
{
    async fn execute(&self, message_id: Uuid) -> Result<(), DeleteMessageError> {
        self.repository
            .delete_message(message_id)
            .await
            .map_err(|e| match e {
                MessageRepositoryError::MessageNotFound => DeleteMessageError::MessageNotFound,
                other => DeleteMessageError::RepositoryError(other.to_string()),
            })
    }
}
