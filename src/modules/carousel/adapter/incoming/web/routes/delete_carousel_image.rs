use actix_web::{delete, web, Responder};
use uuid::Uuid;

use crate::{
    auth::adapter::incoming::web::extractors::auth::AuthenticatedUser,
    carousel::application::ports::incoming::use_cases::DeleteCarouselImageError,
    shared::api::ApiResponse,
    AppState,
};

#[delete("/api/carousel-images/{id}")]
pub async fn delete_carousel_image_handler(
    _user: AuthenticatedUser,
    data: web::Data<AppState>,
    path: web::Path<Uuid>,
) -> impl Responder {
    match data.carousel.delete.execute(path.into_inner()).await {
        Ok(()) => ApiResponse::no_content(),
        Err(DeleteCarouselImageError::ImageNotFound) => {
            ApiResponse::not_found("IMAGE_NOT_FOUND", "Carousel image not found")
        }
        Err(DeleteCarouselImageError::RepositoryError(msg)) => {
            tracing::error!("Failed to delete carousel image: {}", msg);
            ApiResponse::internal_error()
        }
    }
}
