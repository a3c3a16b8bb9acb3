use async_trait::async_trait;

use crate::analytics::application::ports::outgoing::ClickRecord;

#[derive(Debug, Clone)]
pub struct RecordClickCommand {
    project_title: String,
}

#[derive(Debug, thiserror::Error)]
pub enum RecordClickCommandError {
    #[error("Project title cannot be empty")]
    EmptyProjectTitle,
}

impl RecordClickCommand {
    pub fn new(project_title: String) -> Result<Self, RecordClickCommandError> {
        let project_title = project_title.trim();

        if project_title.is_empty() {
            return Err(RecordClickCommandError::EmptyProjectTitle);
        }

        Ok(Self {
            project_title: project_title.to_string(),
        })
    }

    pub fn project_title(&self) -> &str {
        &self.project_title
    }
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum RecordClickError {
    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait RecordClickUseCase: Send + Sync {
    async fn execute(&self, command: RecordClickCommand) -> Result<ClickRecord, RecordClickError>;
}
