use async_trait::async_trait;

use crate::message::application::ports::{
    incoming::use_cases::{SubmitMessageCommand, SubmitMessageError, SubmitMessageUseCase},
    outgoing::{CreateMessageData, MessageRecord, MessageRepository},
};

pub struct SubmitMessageService<R>
where
    R: MessageRepository + Send + Sync,
{
    repository: R,
}

impl<R> SubmitMessageService<R>
where
    R: MessageRepository + Send + Sync,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> SubmitMessageUseCase for SubmitMessageService<R>
where
    R: MessageRepository + Send + Sync,
{
    async fn execute(
        &self,
        command: SubmitMessageCommand,
    ) -> Result<MessageRecord, SubmitMessageError> {
        self.repository
            .insert_message(CreateMessageData {
                name: command.name().to_string(),
                email: command.email().to_string(),
                message: command.message().to_string(),
            })
            .await
            .map_err(|e| SubmitMessageError::RepositoryError(e.to_string()))
    }
}
