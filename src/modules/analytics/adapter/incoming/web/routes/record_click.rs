use actix_web::{post, web, Responder};
use serde::Deserialize;

use crate::{
    analytics::application::ports::incoming::use_cases::{
        RecordClickCommand, RecordClickCommandError, RecordClickError,
    },
    shared::api::ApiResponse,
    AppState,
};

#[derive(Debug, Deserialize)]
struct RecordClickRequest {
    pub project_title: String,
}

/// Fire-and-forget click tracking from the public page.
#[post("/api/clicks")]
pub async fn record_click_handler(
    data: web::Data<AppState>,
    payload: web::Json<RecordClickRequest>,
) -> impl Responder {
    let command = match RecordClickCommand::new(payload.into_inner().project_title) {
        Ok(cmd) => cmd,
        Err(RecordClickCommandError::EmptyProjectTitle) => {
            return ApiResponse::bad_request("EMPTY_PROJECT_TITLE", "Project title cannot be empty")
        }
    };

    match data.analytics.record_click.execute(command).await {
        Ok(record) => ApiResponse::created(record),
        Err(RecordClickError::RepositoryError(msg)) => {
            tracing::error!("Failed to record click: {}", msg);
            ApiResponse::internal_error()
        }
    }
}
