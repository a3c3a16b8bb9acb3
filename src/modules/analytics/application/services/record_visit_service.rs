use async_trait::async_trait;

use crate::analytics::application::ports::{
    incoming::use_cases::{RecordVisitCommand, RecordVisitError, RecordVisitUseCase},
    outgoing::{VisitRecord, VisitRepository},
};

pub struct RecordVisitService<R>
where
    R: VisitRepository + Send + Sync,
{
    repository: R,
}

impl<R> RecordVisitService<R>
where
    R: VisitRepository + Send + Sync,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> RecordVisitUseCase for RecordVisitService<R>
where
    R: VisitRepository + Send + Sync,
{
    async fn execute(&self, command: RecordVisitCommand) -> Result<VisitRecord, RecordVisitError> {
        self.repository
            .record_visit(command.app_url().to_string())
            .await
            .map_err(|e| RecordVisitError::RepositoryError(e.to_string()))
    }
}
