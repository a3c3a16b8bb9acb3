use async_trait::async_trait;

use crate::carousel::application::ports::outgoing::CarouselImageRecord;

#[derive(Debug, Clone, thiserror::Error)]
pub enum GetCarouselImagesError {
    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait GetCarouselImagesUseCase: Send + Sync {
    async fn execute(&self) -> Result<Vec<CarouselImageRecord>, GetCarouselImagesError>;
}
