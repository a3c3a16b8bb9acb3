use actix_web::{post, web, Responder};
use serde::Deserialize;

use crate::{
    auth::{
        adapter::incoming::web::extractors::auth::AuthenticatedUser,
        application::domain::entities::UserId,
    },
    content::application::ports::incoming::use_cases::{
        ReorderExpertiseAreasCommand, ReorderExpertiseAreasError,
    },
    shared::api::ApiResponse,
    AppState,
};

#[derive(Debug, Deserialize)]
struct ReorderRequest {
    pub source_index: usize,
    pub target_index: usize,
}

#[post("/api/expertise-areas/reorder")]
pub async fn reorder_expertise_areas_handler(
    user: AuthenticatedUser,
    data: web::Data<AppState>,
    payload: web::Json<ReorderRequest>,
) -> impl Responder {
    let command = ReorderExpertiseAreasCommand {
        editor: UserId::from(user.user_id),
        source_index: payload.source_index,
        target_index: payload.target_index,
    };

    match data.content.reorder_expertise.execute(command).await {
        Ok(areas) => ApiResponse::success(areas),
        Err(err) => map_reorder_error(err),
    }
}

fn map_reorder_error(err: ReorderExpertiseAreasError) -> actix_web::HttpResponse {
    match err {
        ReorderExpertiseAreasError::SourceOutOfBounds { .. }
        | ReorderExpertiseAreasError::TargetOutOfBounds { .. } => {
            ApiResponse::bad_request("INDEX_OUT_OF_BOUNDS", &err.to_string())
        }
        ReorderExpertiseAreasError::RevisionConflict => ApiResponse::conflict(
            "REVISION_CONFLICT",
            "Expertise list was modified by another writer; retry",
        ),
        ReorderExpertiseAreasError::RepositoryError(msg) => {
            tracing::error!("Failed to reorder expertise areas: {}", msg);
            ApiResponse::internal_error()
        }
    }
}
