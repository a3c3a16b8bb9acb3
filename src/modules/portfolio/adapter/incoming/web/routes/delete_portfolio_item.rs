use actix_web::{delete, web, Responder};
use uuid::Uuid;

use crate::{
    auth::adapter::incoming::web::extractors::auth::AuthenticatedUser,
    portfolio::application::ports::incoming::use_cases::DeletePortfolioItemError,
    shared::api::ApiResponse,
    AppState,
};

#[delete("/api/portfolio-items/{id}")]
pub async fn delete_portfolio_item_handler(
    _user: AuthenticatedUser,
    data: web::Data<AppState>,
    path: web::Path<Uuid>,
) -> impl Responder {
    match data.portfolio.delete.execute(path.into_inner()).await {
        Ok(()) => ApiResponse::no_content(),
        Err(DeletePortfolioItemError::ItemNotFound) => {
            ApiResponse::not_found("ITEM_NOT_FOUND", "Portfolio item not found")
        }
        Err(DeletePortfolioItemError::RepositoryError(msg)) => {
            tracing::error!("Failed to delete portfolio item: {}", msg);
            ApiResponse::internal_error()
        }
    }
}
