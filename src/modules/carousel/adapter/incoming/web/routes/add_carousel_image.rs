use actix_web::{post, web, Responder};
use serde::Deserialize;

use crate::{
    auth::adapter::incoming::web::extractors::auth::AuthenticatedUser,
    carousel::application::ports::incoming::use_cases::{
        AddCarouselImageCommand, AddCarouselImageCommandError, AddCarouselImageError,
    },
    shared::api::ApiResponse,
    AppState,
};

#[derive(Debug, Deserialize)]
struct AddCarouselImageRequest {
    pub image_url: String,
    pub caption: Option<String>,
}

#[post("/api/carousel-images")]
pub async fn add_carousel_image_handler(
    _user: AuthenticatedUser,
    data: web::Data<AppState>,
    payload: web::Json<AddCarouselImageRequest>,
) -> impl Responder {
    let payload = payload.into_inner();

    let command = match AddCarouselImageCommand::new(payload.image_url, payload.caption) {
        Ok(cmd) => cmd,
        Err(AddCarouselImageCommandError::EmptyImageUrl) => {
            return ApiResponse::bad_request("EMPTY_IMAGE_URL", "Image URL cannot be empty");
        }
    };

    match data.carousel.add.execute(command).await {
        Ok(image) => ApiResponse::created(image),
        Err(AddCarouselImageError::RepositoryError(msg)) => {
            tracing::error!("Failed to add carousel image: {}", msg);
            ApiResponse::internal_error()
        }
    }
}
