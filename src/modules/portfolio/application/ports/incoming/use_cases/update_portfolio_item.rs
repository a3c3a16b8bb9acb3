use async_trait::async_trait;
use uuid::Uuid;

use crate::{
    auth::application::domain::entities::UserId,
    portfolio::application::ports::outgoing::PortfolioItemRecord,
};

#[derive(Debug, Clone)]
pub struct UpdatePortfolioItemCommand {
    item_id: Uuid,
    owner: UserId,
    header: String,
    description: String,
    link: String,
    image_url: Option<String>,
}

#[derive(Debug, thiserror::Error)]
pub enum UpdatePortfolioItemCommandError {
    #[error("Header cannot be empty")]
    EmptyHeader,

    #[error("Header too long")]
    HeaderTooLong,
}

impl UpdatePortfolioItemCommand {
    pub fn new(
        item_id: Uuid,
        owner: UserId,
        header: String,
        description: String,
        link: String,
        image_url: Option<String>,
    ) -> Result<Self, UpdatePortfolioItemCommandError> {
        let header = header.trim();

        if header.is_empty() {
            return Err(UpdatePortfolioItemCommandError::EmptyHeader);
        }

        if header.len() > 150 {
            return Err(UpdatePortfolioItemCommandError::HeaderTooLong);
        }

        Ok(Self {
            item_id,
            owner,
            header: header.to_string(),
            description,
            link,
            image_url,
        })
    }

    pub fn item_id(&self) -> Uuid {
        self.item_id
    }

    pub fn owner(&self) -> UserId {
        self.owner
    }

    pub fn header(&self) -> &str {
        &self.header
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn link(&self) -> &str {
        &self.link
    }

    pub fn image_url(&self) -> Option<&String> {
        self.image_url.as_ref()
    }
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum UpdatePortfolioItemError {
    #[error("Portfolio item not found")]
    ItemNotFound,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait UpdatePortfolioItemUseCase: Send + Sync {
    async fn execute(
        &self,
        command: UpdatePortfolioItemCommand,
    ) -> Result<PortfolioItemRecord, UpdatePortfolioItemError>;
}
