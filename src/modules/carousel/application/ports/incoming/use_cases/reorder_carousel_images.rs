use async_trait::async_trait;

use crate::carousel::application::ports::outgoing::CarouselImageRecord;

#[derive(Debug, Clone, Copy)]
pub struct ReorderCarouselImagesCommand {
    pub source_index: usize,
    pub target_index: usize,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum ReorderCarouselImagesError {
    #[error("Source index {index} is out of bounds for list of length {len}")]
    SourceOutOfBounds { index: usize, len: usize },

    #[error("Target index {index} is out of bounds for list of length {len}")]
    TargetOutOfBounds { index: usize, len: usize },

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait ReorderCarouselImagesUseCase: Send + Sync {
    async fn execute(
        &self,
        command: ReorderCarouselImagesCommand,
    ) -> Result<Vec<CarouselImageRecord>, ReorderCarouselImagesError>;
}
