use async_trait::async_trait;

use crate::analytics::application::ports::outgoing::VisitRecord;

#[derive(Debug, Clone)]
pub struct RecordVisitCommand {
    app_url: String,
}

#[derive(Debug, thiserror::Error)]
pub enum RecordVisitCommandError {
    #[error("App URL cannot be empty")]
    EmptyAppUrl,
}

impl RecordVisitCommand {
    pub fn new(app_url: String) -> Result<Self, RecordVisitCommandError> {
        let app_url = app_url.trim();

        if app_url.is_empty() {
            return Err(RecordVisitCommandError::EmptyAppUrl);
        }

        Ok(Self {
            app_url: app_url.to_string(),
        })
    }

    pub fn app_url(&self) -> &str {
        &self.app_url
    }
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum RecordVisitError {
    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait RecordVisitUseCase: Send + Sync {
    async fn execute(&self, command: RecordVisitCommand) -> Result<VisitRecord, RecordVisitError>;
}
