use actix_web::{post, web, Responder};
use serde::Deserialize;

use crate::{
    analytics::application::ports::incoming::use_cases::{
        RecordVisitCommand, RecordVisitCommandError, RecordVisitError,
    },
    shared::api::ApiResponse,
    AppState,
};

#[derive(Debug, Deserialize)]
struct RecordVisitRequest {
    pub app_url: String,
}

#[post("/api/visits")]
pub async fn record_visit_handler(
    data: web::Data<AppState>,
    payload: web::Json<RecordVisitRequest>,
) -> impl Responder {
    let command = match RecordVisitCommand::new(payload.into_inner().app_url) {
        Ok(cmd) => cmd,
        Err(RecordVisitCommandError::EmptyAppUrl) => {
            return ApiResponse::bad_request("EMPTY_APP_URL", "App URL cannot be empty")
        }
    };

    match data.analytics.record_visit.execute(command).await {
        Ok(record) => ApiResponse::success(record),
        Err(RecordVisitError::RepositoryError(msg)) => {
            tracing::error!("Failed to record visit: {}", msg);
            ApiResponse::internal_error()
        }
    }
}
