use async_trait::async_trait;

use crate::{
    auth::application::domain::entities::UserId,
    content::application::{domain::entities::ContentKind, ports::outgoing::ContentRecord},
};

/// A full replacement of one section's blob, carrying the revision the
/// editor loaded so a concurrent edit is detected instead of overwritten.
#[derive(Debug, Clone)]
pub struct UpdateContentCommand {
    pub kind: ContentKind,
    pub content: serde_json::Value,
    pub revision: i64,
    pub editor: UserId,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum UpdateContentError {
    #[error("Content not found")]
    ContentNotFound,

    #[error("Payload does not match the {0} shape: {1}")]
    InvalidPayload(&'static str, String),

    #[error("Content was modified by another writer")]
    RevisionConflict,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait UpdateContentUseCase: Send + Sync {
    async fn execute(&self, command: UpdateContentCommand)
        -> Result<ContentRecord, UpdateContentError>;
}
