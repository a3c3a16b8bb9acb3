use async_trait::async_trait;
use uuid::Uuid;

#[derive(Debug, Clone, thiserror::Error)]
pub enum DeleteCarouselImageError {
    #[error("Carousel image not found")]
    ImageNotFound,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait DeleteCarouselImageUseCase: Send + Sync {
    async fn execute(&self, image_id: Uuid) -> Result<(), DeleteCarouselImageError>;
}
