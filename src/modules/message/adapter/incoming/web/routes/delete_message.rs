use actix_web::{delete, web, Responder};
use uuid::Uuid;

use crate::{
    auth::adapter::incoming::web::extractors::auth::AuthenticatedUser,
    message::application::ports::incoming::use_cases::DeleteMessageError,
    shared::api::ApiResponse,
    AppState,
};

#[delete("/api/messages/{id}")]
pub async fn delete_message_handler(
    _user: AuthenticatedUser,
    data: web::Data<AppState>,
    path: web::Path<Uuid>,
) -> impl Responder {
    let message_id = path.into_inner();

    match data.message.delete.execute(message_id).await {
        Ok(()) => ApiResponse::no_content(),
        Err(DeleteMessageError::MessageNotFound) => {
            ApiResponse::not_found("MESSAGE_NOT_FOUND", "Message not found")
        }
        Err(DeleteMessageError::RepositoryError(msg)) => {
            tracing::error!("Failed to delete message: {}", msg);
            ApiResponse::internal_error()
        }
    }
}
