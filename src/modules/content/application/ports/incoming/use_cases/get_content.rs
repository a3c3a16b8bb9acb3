use async_trait::async_trait;

use crate::content::application::{
    domain::entities::ContentKind, ports::outgoing::ContentRecord,
};

#[derive(Debug, Clone, thiserror::Error)]
pub enum GetContentError {
    #[error("Content not found")]
    ContentNotFound,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait GetContentUseCase: Send + Sync {
    async fn execute(&self, kind: ContentKind) -> Result<ContentRecord, GetContentError>;
}
