use async_trait::async_trait;

use crate::portfolio::application::ports::outgoing::PortfolioItemRecord;

#[derive(Debug, Clone, thiserror::Error)]
pub enum GetPortfolioItemsError {
    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait GetPortfolioItemsUseCase: Send + Sync {
    async fn execute(&self) -> Result<Vec<PortfolioItemRecord>, GetPortfolioItemsError>;
}
