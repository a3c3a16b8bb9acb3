pub mod add_carousel_image;
pub mod delete_carousel_image;
pub mod get_carousel_images;
pub mod reorder_carousel_images;
pub mod update_carousel_image;

pub use add_carousel_image::add_carousel_image_handler;
pub use delete_carousel_image::delete_carousel_image_handler;
pub use get_carousel_images::get_carousel_images_handler;
pub use reorder_carousel_images::reorder_carousel_images_handler;
pub use update_carousel_image::update_carousel_image_handler;
