pub mod click_repository;
pub mod visit_repository;

pub use click_repository::{ClickRecord, ClickRepository, ClickRepositoryError};
pub use visit_repository::{VisitRecord, VisitRepository, VisitRepositoryError};
