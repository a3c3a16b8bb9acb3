use async_trait::async_trait;

use crate::carousel::application::ports::{
    incoming::use_cases::{GetCarouselImagesError, GetCarouselImagesUseCase},
    outgoing::{CarouselImageRecord, CarouselQuery},
};

#[derive(Debug, Clone)]
pub struct GetCarouselImagesService<Q>
where
    Q: CarouselQuery + Send + Sync,
{
    query: Q,
}

impl<Q> GetCarouselImagesService<Q>
where
    Q: CarouselQuery + Send + Sync,
{
    pub fn new(query: Q) -> Self {
        Self { query }
    }
}

#[async_trait]
impl<Q> GetCarouselImagesUseCase for GetCarouselImagesService<Q>
where
    Q: CarouselQuery + Send + Sync,
{
    async fn execute(&self) -> Result<Vec<CarouselImageRecord>, GetCarouselImagesError> {
        self.query
            .list_images()
            .await
            .map_err(|e| GetCarouselImagesError::RepositoryError(e.to_string()))
    }
}
