use async_trait::async_trait;

use crate::carousel::application::ports::{
    incoming::use_cases::{
        UpdateCarouselImageCommand, UpdateCarouselImageError, UpdateCarouselImageUseCase,
    },
    outgoing::{
        CarouselImageRecord, CarouselRepository, CarouselRepositoryError, UpdateCarouselImageData,
    },
};

#[derive(Debug, Clone)]
pub struct UpdateCarouselImageService<R>
where
    R: CarouselRepository + Send + Sync,
{
    repository: R,
}

impl<R> UpdateCarouselImageService<R>
where
    R: CarouselRepository + Send + Sync,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> UpdateCarouselImageUseCase for UpdateCarouselImageService<R>
where
    R: CarouselRepository + Send + Sync,
{
    async fn execute(
        &self,
        command: UpdateCarouselImageCommand,
    ) -> Result<CarouselImageRecord, UpdateCarouselImageError> {
        let data = UpdateCarouselImageData {
            image_url: command.image_url().to_string(),
            caption: command.caption().cloned(),
        };

        self.repository
            .update_image(command.image_id(), data)
            .await
            .map_err(|e| match e {
                CarouselRepositoryError::ImageNotFound => UpdateCarouselImageError::ImageNotFound,
                other => UpdateCarouselImageError::RepositoryError(other.to_string()),
            })
    }
}
