use async_trait::async_trait;
use uuid::Uuid;

use crate::carousel::application::ports::{
    incoming::use_cases::{DeleteCarouselImageError, DeleteCarouselImageUseCase},
    outgoing::{CarouselRepository, CarouselRepositoryError},
};

#[derive(Debug, Clone)]
pub struct DeleteCarouselImageService<R>
where
    R: CarouselRepository + Send + Sync,
{
    repository: R,
}

impl<R> DeleteCarouselImageService<R>
where
    R: CarouselRepository + Send + Sync,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> DeleteCarouselImageUseCase for DeleteCarouselImageService<R>
where
    R: CarouselRepository + Send + Sync,
{
    async fn execute(&self, image_id: Uuid) -> Result<(), DeleteCarouselImageError> {
        self.repository
            .delete_image(image_id)
            .await
            .map_err(|e| match e {
                CarouselRepositoryError::ImageNotFound => DeleteCarouselImageError::ImageNotFound,
                other => DeleteCarouselImageError::RepositoryError(other.to_string()),
            })
    }
}
