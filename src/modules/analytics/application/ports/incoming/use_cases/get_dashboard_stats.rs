use async_trait::async_trait;
use serde::Serialize;

use crate::{
    analytics::application::{
        domain::aggregation::{DailyClicks, PopularCard},
        ports::outgoing::ClickRecord,
    },
    message::application::ports::outgoing::MessageRecord,
};

/// Everything the dashboard renders, fetched in one call.
#[derive(Debug, Clone, Serialize)]
pub struct DashboardStats {
    pub total_clicks: u64,
    pub total_messages: u64,
    pub latest_messages: Vec<MessageRecord>,
    pub raw_clicks: Vec<ClickRecord>,
    pub daily_clicks: Vec<DailyClicks>,
    pub popular_cards: Vec<PopularCard>,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum GetDashboardStatsError {
    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait GetDashboardStatsUseCase: Send + Sync {
    async fn execute(&self) -> Result<DashboardStats, GetDashboardStatsError>;
}
