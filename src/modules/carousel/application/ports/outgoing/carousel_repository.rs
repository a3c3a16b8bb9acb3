use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

/// One slide of the gallery carousel.
#[derive(Debug, Clone, Serialize)]
pub struct CarouselImageRecord {
    pub id: Uuid,
    pub image_url: String,
    pub caption: Option<String>,
    pub sort_order: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct CreateCarouselImageData {
    pub image_url: String,
    pub caption: Option<String>,
    pub sort_order: i32,
}

#[derive(Debug, Clone)]
pub struct UpdateCarouselImageData {
    pub image_url: String,
    pub caption: Option<String>,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum CarouselRepositoryError {
    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Carousel image not found")]
    ImageNotFound,
}

#[async_trait]
pub trait CarouselRepository: Send + Sync {
    async fn insert_image(
        &self,
        data: CreateCarouselImageData,
    ) -> Result<CarouselImageRecord, CarouselRepositoryError>;

    async fn update_image(
        &self,
        image_id: Uuid,
        data: UpdateCarouselImageData,
    ) -> Result<CarouselImageRecord, CarouselRepositoryError>;

    /// Deletes the slide and resequences the rest inside one transaction.
    async fn delete_image(&self, image_id: Uuid) -> Result<(), CarouselRepositoryError>;

    /// Transactional batch rewrite of `sort_order` values.
    async fn save_order(&self, order: Vec<(Uuid, i32)>) -> Result<(), CarouselRepositoryError>;
}
