use actix_web::{get, web, Responder};

use crate::{
    content::application::{
        domain::entities::ContentKind,
        ports::incoming::use_cases::GetContentError,
    },
    shared::api::ApiResponse,
    AppState,
};

/// Public read of one section blob. The revision in the response is what
/// an editor later presents when saving.
#[get("/api/content/{kind}")]
pub async fn get_content_handler(
    data: web::Data<AppState>,
    path: web::Path<String>,
) -> impl Responder {
    let slug = path.into_inner();

    let kind = match ContentKind::from_slug(&slug) {
        Some(kind) => kind,
        None => {
            return ApiResponse::not_found(
                "UNKNOWN_CONTENT_KIND",
                &format!("No content section named '{slug}'"),
            )
        }
    };

    match data.content.get.execute(kind).await {
        Ok(record) => ApiResponse::success(record),
        Err(GetContentError::ContentNotFound) => {
            ApiResponse::not_found("CONTENT_NOT_FOUND", "Content section not found")
        }
        Err(GetContentError::RepositoryError(msg)) => {
            tracing::error!("Failed to load content: {}", msg);
            ApiResponse::internal_error()
        }
    }
}
