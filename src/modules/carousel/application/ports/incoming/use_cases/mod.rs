pub mod add_carousel_image;
pub mod delete_carousel_image;
pub mod get_carousel_images;
pub mod reorder_carousel_images;
pub mod update_carousel_image;

pub use add_carousel_image::{
    AddCarouselImageCommand, AddCarouselImageCommandError, AddCarouselImageError,
    AddCarouselImageUseCase,
};
pub use delete_carousel_image::{DeleteCarouselImageError, DeleteCarouselImageUseCase};
pub use get_carousel_images::{GetCarouselImagesError, GetCarouselImagesUseCase};
pub use reorder_carousel_images::{
    ReorderCarouselImagesCommand, ReorderCarouselImagesError, ReorderCarouselImagesUseCase,
};
pub use update_carousel_image::{
    UpdateCarouselImageCommand, UpdateCarouselImageCommandError, UpdateCarouselImageError,
    UpdateCarouselImageUseCase,
};
