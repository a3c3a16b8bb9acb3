use async_trait::async_trait;
use uuid::Uuid;

use crate::carousel::application::ports::outgoing::CarouselImageRecord;

#[derive(Debug, Clone)]
pub struct UpdateCarouselImageCommand {
    image_id: Uuid,
    image_url: String,
    caption: Option<String>,
}

#[derive(Debug, thiserror::Error)]
pub enum UpdateCarouselImageCommandError {
    #[error("Image URL cannot be empty")]
    EmptyImageUrl,
}

impl UpdateCarouselImageCommand {
    pub fn new(
        image_id: Uuid,
        image_url: String,
        caption: Option<String>,
    ) -> Result<Self, UpdateCarouselImageCommandError> {
        let image_url = image_url.trim();

        if image_url.is_empty() {
            return Err(UpdateCarouselImageCommandError::EmptyImageUrl);
        }

        Ok(Self {
            image_id,
            image_url: image_url.to_string(),
            caption: caption.filter(|c| !c.trim().is_empty()),
        })
    }

    pub fn image_id(&self) -> Uuid {
        self.image_id
    }

    pub fn image_url(&self) -> &str {
        &self.image_url
    }

    pub fn caption(&self) -> Option<&String> {
        self.caption.as_ref()
    }
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum UpdateCarouselImageError {
    #[error("Carousel image not found")]
    ImageNotFound,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait UpdateCarouselImageUseCase: Send + Sync {
    async fn execute(
        &self,
        command: UpdateCarouselImageCommand,
    ) -> Result<CarouselImageRecord, UpdateCarouselImageError>;
}
