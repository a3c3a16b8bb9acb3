use actix_web::{get, web, Responder};

use crate::{
    carousel::application::ports::incoming::use_cases::GetCarouselImagesError,
    shared::api::ApiResponse, AppState,
};

/// Public gallery listing in display order.
#[get("/api/carousel-images")]
pub async fn get_carousel_images_handler(data: web::Data<AppState>) -> impl Responder {
    match data.carousel.get_list.execute().await {
        Ok(images) => ApiResponse::success(images),
        Err(GetCarouselImagesError::RepositoryError(msg)) => {
            tracing::error!("Failed to list carousel images: {}", msg);
            ApiResponse::internal_error()
        }
    }
}
