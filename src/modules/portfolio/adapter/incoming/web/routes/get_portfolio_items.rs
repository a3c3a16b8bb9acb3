use actix_web::{get, web, Responder};

use crate::{
    portfolio::application::ports::incoming::use_cases::GetPortfolioItemsError,
    shared::api::ApiResponse, AppState,
};

/// Public listing in display order. No session required.
#[get("/api/portfolio-items")]
pub async fn get_portfolio_items_handler(data: web::Data<AppState>) -> impl Responder {
    match data.portfolio.get_list.execute().await {
        Ok(items) => ApiResponse::success(items),
        Err(GetPortfolioItemsError::RepositoryError(msg)) => {
            tracing::error!("Failed to list portfolio items: {}", msg);
            ApiResponse::internal_error()
        }
    }
}
