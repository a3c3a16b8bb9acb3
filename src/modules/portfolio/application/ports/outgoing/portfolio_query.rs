use async_trait::async_trait;

use super::portfolio_repository::PortfolioItemRecord;

#[derive(Debug, Clone, thiserror::Error)]
pub enum PortfolioQueryError {
    #[error("Database error: {0}")]
    DatabaseError(String),
}

#[async_trait]
pub trait PortfolioQuery: Send + Sync {
    /// All cards ordered by `sort_order` ascending.
    async fn list_items(&self) -> Result<Vec<PortfolioItemRecord>, PortfolioQueryError>;

    async fn count_items(&self) -> Result<u64, PortfolioQueryError>;
}
