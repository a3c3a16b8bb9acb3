use actix_web::{post, web, Responder};
use serde::Deserialize;

use crate::{
    auth::adapter::incoming::web::extractors::auth::AuthenticatedUser,
    portfolio::application::ports::incoming::use_cases::{
        ReorderPortfolioItemsCommand, ReorderPortfolioItemsError,
    },
    shared::api::ApiResponse,
    AppState,
};

#[derive(Debug, Deserialize)]
struct ReorderRequest {
    pub source_index: usize,
    pub target_index: usize,
}

/// Persists a drag-and-drop move and returns the full list in its new
/// order, `sort_order` rewritten to `0..N-1`.
#[post("/api/portfolio-items/reorder")]
pub async fn reorder_portfolio_items_handler(
    _user: AuthenticatedUser,
    data: web::Data<AppState>,
    payload: web::Json<ReorderRequest>,
) -> impl Responder {
    let command = ReorderPortfolioItemsCommand {
        source_index: payload.source_index,
        target_index: payload.target_index,
    };

    match data.portfolio.reorder.execute(command).await {
        Ok(items) => ApiResponse::success(items),
        Err(err) => map_reorder_error(err),
    }
}

fn map_reorder_error(err: ReorderPortfolioItemsError) -> actix_web::HttpResponse {
    match err {
        ReorderPortfolioItemsError::SourceOutOfBounds { .. }
        | ReorderPortfolioItemsError::TargetOutOfBounds { .. } => {
            ApiResponse::bad_request("INDEX_OUT_OF_BOUNDS", &err.to_string())
        }
        ReorderPortfolioItemsError::RepositoryError(msg) => {
            tracing::error!("Failed to reorder portfolio items: {}", msg);
            ApiResponse::internal_error()
        }
    }
}
