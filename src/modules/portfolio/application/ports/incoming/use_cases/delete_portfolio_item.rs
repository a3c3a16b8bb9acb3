use async_trait::async_trait;
use uuid::Uuid;

#[derive(Debug, Clone, thiserror::Error)]
pub enum DeletePortfolioItemError {
    #[error("Portfolio item not found")]
    ItemNotFound,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait DeletePortfolioItemUseCase: Send + Sync {
    async fn execute(&self, item_id: Uuid) -> Result<(), DeletePortfolioItemError>;
}
