pub mod carousel_query_postgres;
pub mod carousel_repository_postgres;
pub mod sea_orm_entity;

pub use carousel_query_postgres::CarouselQueryPostgres;
pub use carousel_repository_postgres::CarouselRepositoryPostgres;
