use actix_web::{put, web, Responder};
use serde::Deserialize;
use uuid::Uuid;

use crate::{
    auth::{
        adapter::incoming::web::extractors::auth::AuthenticatedUser,
        application::domain::entities::UserId,
    },
    portfolio::application::ports::incoming::use_cases::{
        UpdatePortfolioItemCommand, UpdatePortfolioItemCommandError, UpdatePortfolioItemError,
    },
    shared::api::ApiResponse,
    AppState,
};

#[derive(Debug, Deserialize)]
struct UpdatePortfolioItemRequest {
    pub header: String,
    pub description: String,
    pub link: String,
    pub image_url: Option<String>,
}

#[put("/api/portfolio-items/{id}")]
pub async fn update_portfolio_item_handler(
    user: AuthenticatedUser,
    data: web::Data<AppState>,
    path: web::Path<Uuid>,
    payload: web::Json<UpdatePortfolioItemRequest>,
) -> impl Responder {
    let item_id = path.into_inner();
    let payload = payload.into_inner();

    let command = match UpdatePortfolioItemCommand::new(
        item_id,
        UserId::from(user.user_id),
        payload.header,
        payload.description,
        payload.link,
        payload.image_url,
    ) {
        Ok(cmd) => cmd,
        Err(err) => return map_command_error(err),
    };

    match data.portfolio.update.execute(command).await {
        Ok(item) => ApiResponse::success(item),
        Err(err) => map_update_error(err),
    }
}

fn map_command_error(err: UpdatePortfolioItemCommandError) -> actix_web::HttpResponse {
    match err {
        UpdatePortfolioItemCommandError::EmptyHeader => {
            ApiResponse::bad_request("EMPTY_HEADER", "Header cannot be empty")
        }
        UpdatePortfolioItemCommandError::HeaderTooLong => {
            ApiResponse::bad_request("HEADER_TOO_LONG", "Header must not exceed 150 characters")
        }
    }
}

fn map_update_error(err: UpdatePortfolioItemError) -> actix_web::HttpResponse {
    match err {
        UpdatePortfolioItemError::ItemNotFound => {
            ApiResponse::not_found("ITEM_NOT_FOUND", "Portfolio item not found")
        }
        UpdatePortfolioItemError::RepositoryError(msg) => {
            tracing::error!("Failed to update portfolio item: {}", msg);
            ApiResponse::internal_error()
        }
    }
}
