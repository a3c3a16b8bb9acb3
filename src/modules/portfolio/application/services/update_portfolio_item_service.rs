use async_trait::async_trait;

use crate::portfolio::application::ports::{
    incoming::use_cases::{
        UpdatePortfolioItemCommand, UpdatePortfolioItemError, UpdatePortfolioItemUseCase,
    },
    outgoing::{
        PortfolioItemRecord, PortfolioRepository, PortfolioRepositoryError,
        UpdatePortfolioItemData,
    },
};

#[derive(Debug, Clone)]
pub struct UpdatePortfolioItemService<R>
where
    R: PortfolioRepository + Send + Sync,
{
    repository: R,
}

impl<R> UpdatePortfolioItemService<R>
where
    R: PortfolioRepository + Send + Sync,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> UpdatePortfolioItemUseCase for UpdatePortfolioItemService<R>
where
    R: PortfolioRepository + Send + Sync,
{
    async fn execute(
        &self,
        command: UpdatePortfolioItemCommand,
    ) -> Result<PortfolioItemRecord, UpdatePortfolioItemError> {
        let data = UpdatePortfolioItemData {
            header: command.header().to_string(),
            description: command.description().to_string(),
            link: command.link().to_string(),
            image_url: command.image_url().cloned(),
            owner: command.owner(),
        };

        self.repository
            .update_item(command.item_id(), data)
            .await
            .map_err(|e| match e {
                PortfolioRepositoryError::ItemNotFound => UpdatePortfolioItemError::ItemNotFound,
                other => UpdatePortfolioItemError::RepositoryError(other.to_string()),
            })
    }
}
