use actix_web::{post, web, Responder};

use crate::{
    auth::{
        adapter::incoming::web::extractors::auth::AuthenticatedUser,
        application::domain::entities::UserId,
    },
    portfolio::application::ports::incoming::use_cases::{
        CreatePortfolioItemCommand, CreatePortfolioItemError,
    },
    shared::api::ApiResponse,
    AppState,
};

/// Appends a placeholder card the owner edits afterwards. No body.
#[post("/api/portfolio-items")]
pub async fn create_portfolio_item_handler(
    user: AuthenticatedUser,
    data: web::Data<AppState>,
) -> impl Responder {
    let command = CreatePortfolioItemCommand::new(UserId::from(user.user_id));

    match data.portfolio.create.execute(command).await {
        Ok(item) => ApiResponse::created(item),
        Err(CreatePortfolioItemError::RepositoryError(msg)) => {
            tracing::error!("Failed to create portfolio item: {}", msg);
            ApiResponse::internal_error()
        }
    }
}
