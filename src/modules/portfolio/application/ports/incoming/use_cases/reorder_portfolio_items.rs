use async_trait::async_trait;

use crate::portfolio::application::ports::outgoing::PortfolioItemRecord;

/// A drag-and-drop move: the card at `source_index` lands at
/// `target_index`. Indices refer to the current display order.
#[derive(Debug, Clone, Copy)]
pub struct ReorderPortfolioItemsCommand {
    pub source_index: usize,
    pub target_index: usize,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum ReorderPortfolioItemsError {
    #[error("Source index {index} is out of bounds for list of length {len}")]
    SourceOutOfBounds { index: usize, len: usize },

    #[error("Target index {index} is out of bounds for list of length {len}")]
    TargetOutOfBounds { index: usize, len: usize },

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait ReorderPortfolioItemsUseCase: Send + Sync {
    /// Returns the full list in its new order with `sort_order` already
    /// rewritten to `0..N-1`.
    async fn execute(
        &self,
        command: ReorderPortfolioItemsCommand,
    ) -> Result<Vec<PortfolioItemRecord>, ReorderPortfolioItemsError>;
}
