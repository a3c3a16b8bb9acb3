use async_trait::async_trait;

use crate::content::application::{
    domain::entities::ContentKind,
    ports::{
        incoming::use_cases::{GetContentError, GetContentUseCase},
        outgoing::{ContentRecord, ContentRepository, ContentRepositoryError},
    },
};

pub struct GetContentService<R>
where
    R: ContentRepository + Send + Sync,
{
    repository: R,
}

impl<R> GetContentService<R>
where
    R: ContentRepository + Send + Sync,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> GetContentUseCase for GetContentService<R>
where
    R: ContentRepository + Send + Sync,
{
    async fn execute(&self, kind: ContentKind) -> Result<ContentRecord, GetContentError> {
        self.repository.load(kind).await.map_err(|e| match e {
            ContentRepositoryError::ContentNotFound => GetContentError::ContentNotFound,
            other => GetContentError::RepositoryError(other.to_string()),
        })
    }
}
