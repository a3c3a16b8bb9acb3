use async_trait::async_trait;

use crate::carousel::application::ports::outgoing::CarouselImageRecord;

#[derive(Debug, Clone)]
pub struct AddCarouselImageCommand {
    image_url: String,
    caption: Option<String>,
}

#[derive(Debug, thiserror::Error)]
pub enum AddCarouselImageCommandError {
    #[error("Image URL cannot be empty")]
    EmptyImageUrl,
}

impl AddCarouselImageCommand {
    pub fn new(
        image_url: String,
        caption: Option<String>,
    ) -> Result<Self, AddCarouselImageCommandError> {
        let image_url = image_url.trim();

        if image_url.is_empty() {
            return Err(AddCarouselImageCommandError::EmptyImageUrl);
        }

        Ok(Self {
            image_url: image_url.to_string(),
            caption: caption.filter(|c| !c.trim().is_empty()),
        })
    }

    pub fn image_url(&self) -> &str {
        &self.image_url
    }

    pub fn caption(&self) -> Option<&String> {
        self.caption.as_ref()
    }
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum AddCarouselImageError {
    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait AddCarouselImageUseCase: Send + Sync {
    async fn execute(
        &self,
        command: AddCarouselImageCommand,
    ) -> Result<CarouselImageRecord, AddCarouselImageError>;
}
