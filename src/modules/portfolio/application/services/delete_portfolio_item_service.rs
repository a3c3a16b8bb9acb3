use async_trait::async_trait;
use uuid::Uuid;

use crate::portfolio::application::ports::{
    incoming::use_cases::{DeletePortfolioItemError, DeletePortfolioItemUseCase},
    outgoing::{PortfolioRepository, PortfolioRepositoryError},
};

#[derive(Debug, Clone)]
pub struct DeletePortfolioItemService<R>
where
    R: PortfolioRepository + Send + Sync,
{
    repository: R,
}

impl<R> DeletePortfolioItemService<R>
where
    R: PortfolioRepository + Send + Sync,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> DeletePortfolioItemUseCase for DeletePortfolioItemService<R>
where
    R: PortfolioRepository + Send + Sync,
{
    async fn execute(&self, item_id: Uuid) -> Result<(), DeletePortfolioItemError> {
        // Gap-closing happens inside the repository transaction.
        self.repository
            .delete_item(item_id)
            .await
            .map_err(|e| match e {
                PortfolioRepositoryError::ItemNotFound => DeletePortfolioItemError::ItemNotFound,
                other => DeletePortfolioItemError::RepositoryError(other.to_string()),
            })
    }
}
