use actix_web::{delete, web, Responder};

use crate::{
    auth::{
        adapter::incoming::web::extractors::auth::AuthenticatedUser,
        application::domain::entities::UserId,
    },
    content::application::ports::incoming::use_cases::RemoveExpertiseAreaError,
    shared::api::ApiResponse,
    AppState,
};

#[delete("/api/expertise-areas/{index}")]
pub async fn remove_expertise_area_handler(
    user: AuthenticatedUser,
    data: web::Data<AppState>,
    path: web::Path<usize>,
) -> impl Responder {
    let index = path.into_inner();

    match data
        .content
        .remove_expertise
        .execute(UserId::from(user.user_id), index)
        .await
    {
        Ok(areas) => ApiResponse::success(areas),
        Err(err) => map_remove_error(err),
    }
}

fn map_remove_error(err: RemoveExpertiseAreaError) -> actix_web::HttpResponse {
    match err {
        RemoveExpertiseAreaError::IndexOutOfBounds { .. } => {
            ApiResponse::bad_request("INDEX_OUT_OF_BOUNDS", &err.to_string())
        }
        RemoveExpertiseAreaError::RevisionConflict => ApiResponse::conflict(
            "REVISION_CONFLICT",
            "Expertise list was modified by another writer; retry",
        ),
        RemoveExpertiseAreaError::RepositoryError(msg) => {
            tracing::error!("Failed to remove expertise area: {}", msg);
            ApiResponse::internal_error()
        }
    }
}
