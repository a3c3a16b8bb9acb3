use async_trait::async_trait;
use serde::Serialize;
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct VisitRecord {
    pub id: Uuid,
    pub app_url: String,
    pub visit_count: i64,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum VisitRepositoryError {
    #[error("Database error: {0}")]
    DatabaseError(String),
}

#[async_trait]
pub trait VisitRepository: Send + Sync {
    /// Upsert on `app_url`: first visit inserts a row with count 1,
    /// later visits increment it.
    async fn record_visit(&self, app_url: String) -> Result<VisitRecord, VisitRepositoryError>;
}
