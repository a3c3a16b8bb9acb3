use actix_web::{put, web, Responder};
use serde::Deserialize;
use uuid::Uuid;

use crate::{
    auth::adapter::incoming::web::extractors::auth::AuthenticatedUser,
    carousel::application::ports::incoming::use_cases::{
        UpdateCarouselImageCommand, UpdateCarouselImageCommandError, UpdateCarouselImageError,
    },
    shared::api::ApiResponse,
    AppState,
};

#[derive(Debug, Deserialize)]
struct UpdateCarouselImageRequest {
    pub image_url: String,
    pub caption: Option<String>,
}

#[put("/api/carousel-images/{id}")]
pub async fn update_carousel_image_handler(
    _user: AuthenticatedUser,
    data: web::Data<AppState>,
    path: web::Path<Uuid>,
    payload: web::Json<UpdateCarouselImageRequest>,
) -> impl Responder {
    let payload = payload.into_inner();

    let command =
        match UpdateCarouselImageCommand::new(path.into_inner(), payload.image_url, payload.caption)
        {
            Ok(cmd) => cmd,
            Err(UpdateCarouselImageCommandError::EmptyImageUrl) => {
                return ApiResponse::bad_request("EMPTY_IMAGE_URL", "Image URL cannot be empty");
            }
        };

    match data.carousel.update.execute(command).await {
        Ok(image) => ApiResponse::success(image),
        Err(UpdateCarouselImageError::ImageNotFound) => {
            ApiResponse::not_found("IMAGE_NOT_FOUND", "Carousel image not found")
        }
        Err(UpdateCarouselImageError::RepositoryError(msg)) => {
            tracing::error!("Failed to update carousel image: {}", msg);
            ApiResponse::internal_error()
        }
    }
}
