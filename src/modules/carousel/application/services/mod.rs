pub mod add_carousel_image_service;
pub mod delete_carousel_image_service;
pub mod get_carousel_images_service;
pub mod reorder_carousel_images_service;
pub mod update_carousel_image_service;

pub use add_carousel_image_service::AddCarouselImageService;
pub use delete_carousel_image_service::DeleteCarouselImageService;
pub use get_carousel_images_service::GetCarouselImagesService;
pub use reorder_carousel_images_service::ReorderCarouselImagesService;
pub use update_carousel_image_service::UpdateCarouselImageService;
