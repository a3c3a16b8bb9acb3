pub mod carousel_query;
pub mod carousel_repository;

pub use carousel_query::{CarouselQuery, CarouselQueryError};
pub use carousel_repository::{
    CarouselImageRecord, CarouselRepository, CarouselRepositoryError, CreateCarouselImageData,
    UpdateCarouselImageData,
};
