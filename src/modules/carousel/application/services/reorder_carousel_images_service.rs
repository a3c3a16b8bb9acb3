use async_trait::async_trait;

use crate::carousel::application::ports::{
    incoming::use_cases::{
        ReorderCarouselImagesCommand, ReorderCarouselImagesError, ReorderCarouselImagesUseCase,
    },
    outgoing::{CarouselImageRecord, CarouselQuery, CarouselRepository},
};
use crate::shared::ordering::{self, ReorderError};

#[derive(Debug, Clone)]
pub struct ReorderCarouselImagesService<R, Q>
where
    R: CarouselRepository + Send + Sync,
    Q: CarouselQuery + Send + Sync,
{
    repository: R,
    query: Q,
}

impl<R, Q> ReorderCarouselImagesService<R, Q>
where
    R: CarouselRepository + Send + Sync,
    Q: CarouselQuery + Send + Sync,
{
    pub fn new(repository: R, query: Q) -> Self {
        Self { repository, query }
    }
}

#[async_trait]
impl<R, Q> ReorderCarouselImagesUseCase for ReorderCarouselImagesService<R, Q>
where
    R: CarouselRepository + Send + Sync,
    Q: CarouselQuery + Send + Sync,
{
    async fn execute(
        &self,
        command: ReorderCarouselImagesCommand,
    ) -> Result<Vec<CarouselImageRecord>, ReorderCarouselImagesError> {
        let mut images = self
            .query
            .list_images()
            .await
            .map_err(|e| ReorderCarouselImagesError::RepositoryError(e.to_string()))?;

        let changed = ordering::move_item(&mut images, command.source_index, command.target_index)
            .map_err(|e| match e {
                ReorderError::SourceOutOfBounds { index, len } => {
                    ReorderCarouselImagesError::SourceOutOfBounds { index, len }
                }
                ReorderError::TargetOutOfBounds { index, len } => {
                    ReorderCarouselImagesError::TargetOutOfBounds { index, len }
                }
            })?;

        if !changed {
            return Ok(images);
        }

        let mut slots: Vec<i32> = images.iter().map(|image| image.sort_order).collect();
        let dirty = ordering::resequence(&mut slots);

        for (image, slot) in images.iter_mut().zip(slots.iter()) {
            image.sort_order = *slot;
        }

        let updates: Vec<_> = dirty
            .iter()
            .map(|&index| (images[index].id, images[index].sort_order))
            .collect();

        self.repository
            .save_order(updates)
            .await
            .map_err(|e| ReorderCarouselImagesError::RepositoryError(e.to_string()))?;

        Ok(images)
    }
}
