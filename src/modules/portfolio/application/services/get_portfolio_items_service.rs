use async_trait::async_trait;

use crate::portfolio::application::ports::{
    incoming::use_cases::{GetPortfolioItemsError, GetPortfolioItemsUseCase},
    outgoing::{PortfolioItemRecord, PortfolioQuery},
};

#[derive(Debug, Clone)]
pub struct GetPortfolioItemsService<Q>
where
    Q: PortfolioQuery + Send + Sync,
{
    query: Q,
}

impl<Q> GetPortfolioItemsService<Q>
where
    Q: PortfolioQuery + Send + Sync,
{
    pub fn new(query: Q) -> Self {
        Self { query }
    }
}

#[async_trait]
impl<Q> GetPortfolioItemsUseCase for GetPortfolioItemsService<Q>
where
    Q: PortfolioQuery + Send + Sync,
{
    async fn execute(&self) -> Result<Vec<PortfolioItemRecord>, GetPortfolioItemsError> {
        self.query
            .list_items()
            .await
            .map_err(|e| GetPortfolioItemsError::RepositoryError(e.to_string()))
    }
}
