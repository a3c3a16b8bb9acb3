use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ClickRecord {
    pub id: Uuid,
    pub project_title: String,
    pub clicked_at: DateTime<Utc>,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum ClickRepositoryError {
    #[error("Database error: {0}")]
    DatabaseError(String),
}

/// Append-only click log plus the reads the dashboard needs.
#[async_trait]
pub trait ClickRepository: Send + Sync {
    /// Appends a click with the server-side timestamp.
    async fn insert_click(&self, project_title: String)
        -> Result<ClickRecord, ClickRepositoryError>;

    async fn count_clicks(&self) -> Result<u64, ClickRepositoryError>;

    /// The `limit` most recent clicks, newest first.
    async fn recent_clicks(&self, limit: u64) -> Result<Vec<ClickRecord>, ClickRepositoryError>;

    /// Timestamps of clicks at or after `from`, for daily bucketing.
    async fn clicks_since(
        &self,
        from: DateTime<Utc>,
    ) -> Result<Vec<DateTime<Utc>>, ClickRepositoryError>;

    /// Every click's title in chronological order; feeds the popularity
    /// ranking, which tie-breaks by first appearance.
    async fn click_titles(&self) -> Result<Vec<String>, ClickRepositoryError>;
}
