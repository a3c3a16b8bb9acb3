use actix_web::{get, web, Responder};

use crate::{
    auth::adapter::incoming::web::extractors::auth::AuthenticatedUser,
    analytics::application::ports::incoming::use_cases::GetDashboardStatsError,
    shared::api::ApiResponse,
    AppState,
};

#[get("/api/dashboard/stats")]
pub async fn get_dashboard_stats_handler(
    _user: AuthenticatedUser,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.analytics.dashboard_stats.execute().await {
        Ok(stats) => ApiResponse::success(stats),
        Err(GetDashboardStatsError::RepositoryError(msg)) => {
            tracing::error!("Failed to assemble dashboard stats: {}", msg);
            ApiResponse::internal_error()
        }
    }
}
