pub mod click_repository_postgres;
pub mod click_sea_orm_entity;
pub mod visit_repository_postgres;
pub mod visit_sea_orm_entity;

pub use click_repository_postgres::ClickRepositoryPostgres;
pub use visit_repository_postgres::VisitRepositoryPostgres;
