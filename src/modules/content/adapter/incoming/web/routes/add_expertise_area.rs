use actix_web::{post, web, Responder};
use serde::Deserialize;

use crate::{
    auth::{
        adapter::incoming::web::extractors::auth::AuthenticatedUser,
        application::domain::entities::UserId,
    },
    content::application::ports::incoming::use_cases::{
        AddExpertiseAreaCommand, AddExpertiseAreaCommandError, AddExpertiseAreaError,
    },
    shared::api::ApiResponse,
    AppState,
};

#[derive(Debug, Deserialize)]
struct AddExpertiseAreaRequest {
    pub title: String,
    #[serde(default)]
    pub description: String,
}

#[post("/api/expertise-areas")]
pub async fn add_expertise_area_handler(
    user: AuthenticatedUser,
    data: web::Data<AppState>,
    payload: web::Json<AddExpertiseAreaRequest>,
) -> impl Responder {
    let payload = payload.into_inner();

    let command = match AddExpertiseAreaCommand::new(
        UserId::from(user.user_id),
        payload.title,
        payload.description,
    ) {
        Ok(cmd) => cmd,
        Err(AddExpertiseAreaCommandError::EmptyTitle) => {
            return ApiResponse::bad_request("EMPTY_TITLE", "Title cannot be empty")
        }
    };

    match data.content.add_expertise.execute(command).await {
        Ok(areas) => ApiResponse::created(areas),
        Err(err) => map_add_error(err),
    }
}

fn map_add_error(err: AddExpertiseAreaError) -> actix_web::HttpResponse {
    match err {
        AddExpertiseAreaError::RevisionConflict => ApiResponse::conflict(
            "REVISION_CONFLICT",
            "Expertise list was modified by another writer; retry",
        ),
        AddExpertiseAreaError::RepositoryError(msg) => {
            tracing::error!("Failed to add expertise area: {}", msg);
            ApiResponse::internal_error()
        }
    }
}
