use actix_web::{post, web, Responder};
use serde::Deserialize;

use crate::{
    auth::adapter::incoming::web::extractors::auth::AuthenticatedUser,
    carousel::application::ports::incoming::use_cases::{
        ReorderCarouselImagesCommand, ReorderCarouselImagesError,
    },
    shared::api::ApiResponse,
    AppState,
};

#[derive(Debug, Deserialize)]
struct ReorderRequest {
    pub source_index: usize,
    pub target_index: usize,
}

#[post("/api/carousel-images/reorder")]
pub async fn reorder_carousel_images_handler(
    _user: AuthenticatedUser,
    data: web::Data<AppState>,
    payload: web::Json<ReorderRequest>,
) -> impl Responder {
    let command = ReorderCarouselImagesCommand {
        source_index: payload.source_index,
        target_index: payload.target_index,
    };

    match data.carousel.reorder.execute(command).await {
        Ok(images) => ApiResponse::success(images),
        Err(
            err @ (ReorderCarouselImagesError::SourceOutOfBounds { .. }
            | ReorderCarouselImagesError::TargetOutOfBounds { .. }),
        ) => ApiResponse::bad_request("INDEX_OUT_OF_BOUNDS", &err.to_string()),
        Err(ReorderCarouselImagesError::RepositoryError(msg)) => {
            tracing::error!("Failed to reorder carousel images: {}", msg);
            ApiResponse::internal_error()
        }
    }
}
