use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

use crate::auth::application::domain::entities::UserId;

/// A portfolio card as stored, with its position in the display sequence.
#[derive(Debug, Clone, Serialize)]
pub struct PortfolioItemRecord {
    pub id: Uuid,
    pub header: String,
    pub description: String,
    pub link: String,
    pub image_url: Option<String>,
    pub sort_order: i32,
    pub user_id: Option<UserId>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct CreatePortfolioItemData {
    pub header: String,
    pub description: String,
    pub link: String,
    pub image_url: Option<String>,
    pub sort_order: i32,
    pub owner: UserId,
}

#[derive(Debug, Clone)]
pub struct UpdatePortfolioItemData {
    pub header: String,
    pub description: String,
    pub link: String,
    pub image_url: Option<String>,
    pub owner: UserId,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum PortfolioRepositoryError {
    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Portfolio item not found")]
    ItemNotFound,
}

#[async_trait]
pub trait PortfolioRepository: Send + Sync {
    async fn insert_item(
        &self,
        data: CreatePortfolioItemData,
    ) -> Result<PortfolioItemRecord, PortfolioRepositoryError>;

    async fn update_item(
        &self,
        item_id: Uuid,
        data: UpdatePortfolioItemData,
    ) -> Result<PortfolioItemRecord, PortfolioRepositoryError>;

    /// Deletes the item and closes the gap it leaves: remaining rows are
    /// rewritten to the dense `0..N-1` sequence inside one transaction.
    async fn delete_item(&self, item_id: Uuid) -> Result<(), PortfolioRepositoryError>;

    /// Persists new `sort_order` values for the given rows in one
    /// transaction, so a failure leaves the stored order untouched.
    async fn save_order(&self, order: Vec<(Uuid, i32)>) -> Result<(), PortfolioRepositoryError>;
}
