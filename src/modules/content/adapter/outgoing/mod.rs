pub mod content_repository_postgres;
pub mod sea_orm_entity;

pub use content_repository_postgres::ContentRepositoryPostgres;
