pub mod content_repository;

pub use content_repository::{ContentRecord, ContentRepository, ContentRepositoryError};
