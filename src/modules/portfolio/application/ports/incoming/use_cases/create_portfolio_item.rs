use async_trait::async_trait;

use crate::{
    auth::application::domain::entities::UserId,
    portfolio::application::ports::outgoing::PortfolioItemRecord,
};

/// A freshly created card starts with placeholder text the owner then
/// edits in place, appended at the end of the list.
#[derive(Debug, Clone)]
pub struct CreatePortfolioItemCommand {
    owner: UserId,
}

impl CreatePortfolioItemCommand {
    pub fn new(owner: UserId) -> Self {
        Self { owner }
    }

    pub fn owner(&self) -> UserId {
        self.owner
    }
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum CreatePortfolioItemError {
    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait CreatePortfolioItemUseCase: Send + Sync {
    async fn execute(
        &self,
        command: CreatePortfolioItemCommand,
    ) -> Result<PortfolioItemRecord, CreatePortfolioItemError>;
}
