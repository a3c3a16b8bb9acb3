use actix_web::{put, web, Responder};
use serde::Deserialize;

use crate::{
    auth::{
        adapter::incoming::web::extractors::auth::AuthenticatedUser,
        application::domain::entities::UserId,
    },
    content::application::{
        domain::entities::ContentKind,
        ports::incoming::use_cases::{UpdateContentCommand, UpdateContentError},
    },
    shared::api::ApiResponse,
    AppState,
};

#[derive(Debug, Deserialize)]
struct UpdateContentRequest {
    pub content: serde_json::Value,
    pub revision: i64,
}

/// Full replacement of one section blob at a known revision. A stale
/// revision means someone else saved in between; the caller reloads and
/// retries instead of overwriting their edit.
#[put("/api/content/{kind}")]
pub async fn update_content_handler(
    user: AuthenticatedUser,
    data: web::Data<AppState>,
    path: web::Path<String>,
    payload: web::Json<UpdateContentRequest>,
) -> impl Responder {
    let slug = path.into_inner();
    let payload = payload.into_inner();

    let kind = match ContentKind::from_slug(&slug) {
        Some(kind) => kind,
        None => {
            return ApiResponse::not_found(
                "UNKNOWN_CONTENT_KIND",
                &format!("No content section named '{slug}'"),
            )
        }
    };

    let command = UpdateContentCommand {
        kind,
        content: payload.content,
        revision: payload.revision,
        editor: UserId::from(user.user_id),
    };

    match data.content.update.execute(command).await {
        Ok(record) => ApiResponse::success(record),
        Err(err) => map_update_error(err),
    }
}

fn map_update_error(err: UpdateContentError) -> actix_web::HttpResponse {
    match err {
        UpdateContentError::ContentNotFound => {
            ApiResponse::not_found("CONTENT_NOT_FOUND", "Content section not found")
        }
        UpdateContentError::InvalidPayload(_, _) => {
            ApiResponse::bad_request("INVALID_PAYLOAD", &err.to_string())
        }
        UpdateContentError::RevisionConflict => ApiResponse::conflict(
            "REVISION_CONFLICT",
            "Content was modified by another writer; reload and retry",
        ),
        UpdateContentError::RepositoryError(msg) => {
            tracing::error!("Failed to update content: {}", msg);
            ApiResponse::internal_error()
        }
    }
}
