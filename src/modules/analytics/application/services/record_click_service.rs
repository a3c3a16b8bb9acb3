use async_trait::async_trait;

use crate::analytics::application::ports::{
    incoming::use_cases::{RecordClickCommand, RecordClickError, RecordClickUseCase},
    outgoing::{ClickRecord, ClickRepository},
};

pub struct RecordClickService<R>
where
    R: ClickRepository + Send + Sync,
{
    repository: R,
}

impl<R> RecordClickService<R>
where
    R: ClickRepository + Send + Sync,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> RecordClickUseCase for RecordClickService<R>
where
    R: ClickRepository + Send + Sync,
{
    async fn execute(&self, command: RecordClickCommand) -> Result<ClickRecord, RecordClickError> {
        self.repository
            .insert_click(command.project_title().to_string())
            .await
            .map_err(|e| RecordClickError::RepositoryError(e.to_string()))
    }
}
