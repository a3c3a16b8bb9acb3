use async_trait::async_trait;

use super::carousel_repository::CarouselImageRecord;

#[derive(Debug, Clone, thiserror::Error)]
pub enum CarouselQueryError {
    #[error("Database error: {0}")]
    DatabaseError(String),
}

#[async_trait]
pub trait CarouselQuery: Send + Sync {
    /// All slides ordered by `sort_order` ascending.
    async fn list_images(&self) -> Result<Vec<CarouselImageRecord>, CarouselQueryError>;

    async fn count_images(&self) -> Result<u64, CarouselQueryError>;
}
