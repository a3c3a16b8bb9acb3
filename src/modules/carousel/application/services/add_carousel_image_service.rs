use async_trait::async_trait;

use crate::carousel::application::ports::{
    incoming::use_cases::{AddCarouselImageCommand, AddCarouselImageError, AddCarouselImageUseCase},
    outgoing::{CarouselImageRecord, CarouselQuery, CarouselRepository, CreateCarouselImageData},
};

#[derive(Debug, Clone)]
pub struct AddCarouselImageService<R, Q>
where
    R: CarouselRepository + Send + Sync,
    Q: CarouselQuery + Send + Sync,
{
    repository: R,
    query: Q,
}

impl<R, Q> AddCarouselImageService<R, Q>
where
    R: CarouselRepository + Send + Sync,
    Q: CarouselQuery + Send + Sync,
{
    pub fn new(repository: R, query: Q) -> Self {
        Self { repository, query }
    }
}

#[async_trait]
impl<R, Q> AddCarouselImageUseCase for AddCarouselImageService<R, Q>
where
    R: CarouselRepository + Send + Sync,
    Q: CarouselQuery + Send + Sync,
{
    async fn execute(
        &self,
        command: AddCarouselImageCommand,
    ) -> Result<CarouselImageRecord, AddCarouselImageError> {
        // New slides append at the end of the sequence.
        let next_slot = self
            .query
            .count_images()
            .await
            .map_err(|e| AddCarouselImageError::RepositoryError(e.to_string()))?;

        let data = CreateCarouselImageData {
            image_url: command.image_url().to_string(),
            caption: command.caption().cloned(),
            sort_order: next_slot as i32,
        };

        self.repository
            .insert_image(data)
            .await
            .map_err(|e| AddCarouselImageError::RepositoryError(e.to_string()))
    }
}
