use async_trait::async_trait;

use crate::{
    auth::application::domain::entities::UserId,
    content::application::domain::entities::ExpertiseArea,
};

#[derive(Debug, Clone)]
pub struct AddExpertiseAreaCommand {
    editor: UserId,
    title: String,
    description: String,
}

#[derive(Debug, thiserror::Error)]
pub enum AddExpertiseAreaCommandError {
    #[error("Title cannot be empty")]
    EmptyTitle,
}

impl AddExpertiseAreaCommand {
    pub fn new(
        editor: UserId,
        title: String,
        description: String,
    ) -> Result<Self, AddExpertiseAreaCommandError> {
        let title = title.trim();

        if title.is_empty() {
            return Err(AddExpertiseAreaCommandError::EmptyTitle);
        }

        Ok(Self {
            editor,
            title: title.to_string(),
            description,
        })
    }

    pub fn editor(&self) -> UserId {
        self.editor
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn description(&self) -> &str {
        &self.description
    }
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum AddExpertiseAreaError {
    #[error("Content was modified by another writer")]
    RevisionConflict,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait AddExpertiseAreaUseCase: Send + Sync {
    /// Returns the full list with the new area appended.
    async fn execute(
        &self,
        command: AddExpertiseAreaCommand,
    ) -> Result<Vec<ExpertiseArea>, AddExpertiseAreaError>;
}
