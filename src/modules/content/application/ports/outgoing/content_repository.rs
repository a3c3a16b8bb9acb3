use async_trait::async_trait;
use serde::Serialize;

use crate::auth::application::domain::entities::UserId;
use crate::content::application::domain::entities::ContentKind;

/// A content blob together with the revision a writer must present to
/// replace it.
#[derive(Debug, Clone, Serialize)]
pub struct ContentRecord {
    #[serde(skip)]
    pub kind: ContentKind,
    pub content: serde_json::Value,
    pub revision: i64,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum ContentRepositoryError {
    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Content not found")]
    ContentNotFound,

    #[error("Revision mismatch: content was modified by another writer")]
    RevisionConflict,
}

#[async_trait]
pub trait ContentRepository: Send + Sync {
    async fn load(&self, kind: ContentKind) -> Result<ContentRecord, ContentRepositoryError>;

    /// Compare-and-swap write: persists `content` only when the stored
    /// revision still equals `expected_revision`, bumping it by one.
    /// Two dashboards editing the same section concurrently cannot
    /// silently overwrite each other; the slower writer gets
    /// `RevisionConflict`.
    async fn save(
        &self,
        kind: ContentKind,
        content: serde_json::Value,
        expected_revision: i64,
        editor: UserId,
    ) -> Result<ContentRecord, ContentRepositoryError>;
}
