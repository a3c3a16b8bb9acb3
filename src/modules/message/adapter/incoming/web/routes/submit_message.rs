use actix_web::{post, web, Responder};
use serde::Deserialize;

use crate::{
    message::application::ports::incoming::use_cases::{
        SubmitMessageCommand, SubmitMessageCommandError, SubmitMessageError,
    },
    shared::api::ApiResponse,
    AppState,
};

#[derive(Debug, Deserialize)]
struct SubmitMessageRequest {
    pub name: String,
    pub email: String,
    pub message: String,
}

/// Public contact form endpoint; no token required.
#[post("/api/messages")]
pub async fn submit_message_handler(
    data: web::Data<AppState>,
    payload: web::Json<SubmitMessageRequest>,
) -> impl Responder {
    let payload = payload.into_inner();

    let command =
        match SubmitMessageCommand::new(payload.name, payload.email, payload.message) {
            Ok(cmd) => cmd,
            Err(err) => return map_command_error(err),
        };

    match data.message.submit.execute(command).await {
        Ok(record) => ApiResponse::created(record),
        Err(SubmitMessageError::RepositoryError(msg)) => {
            tracing::error!("Failed to store contact message: {}", msg);
            ApiResponse::internal_error()
        }
    }
}

fn map_command_error(err: SubmitMessageCommandError) -> actix_web::HttpResponse {
    match err {
        SubmitMessageCommandError::EmptyName => {
            ApiResponse::bad_request("EMPTY_NAME", "Name cannot be empty")
        }
        SubmitMessageCommandError::EmptyMessage => {
            ApiResponse::bad_request("EMPTY_MESSAGE", "Message cannot be empty")
        }
        SubmitMessageCommandError::InvalidEmail(_) => {
            ApiResponse::bad_request("INVALID_EMAIL", &err.to_string())
        }
    }
}
