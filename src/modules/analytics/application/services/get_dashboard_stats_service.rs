use async_trait::async_trait;
use chrono::{Days, NaiveTime, Utc};

use crate::{
    analytics::application::{
        domain::aggregation::{daily_click_buckets, popular_cards},
        ports::{
            incoming::use_cases::{
                DashboardStats, GetDashboardStatsError, GetDashboardStatsUseCase,
            },
            outgoing::ClickRepository,
        },
    },
    message::application::ports::outgoing::MessageQuery,
};

const LATEST_MESSAGES_LIMIT: u64 = 5;
const RAW_CLICKS_LIMIT: u64 = 50;
const POPULAR_CARDS_TOP_N: usize = 5;

pub struct GetDashboardStatsService<C, M>
where
    C: ClickRepository + Send + Sync,
    M: MessageQuery + Send + Sync,
{
    clicks: C,
    messages: M,
}

impl<C, M> GetDashboardStatsService<C, M>
where
    C: ClickRepository + Send + Sync,
    M: MessageQuery + Send + Sync,
{
    pub fn new(clicks: C, messages: M) -> Self {
        Self { clicks, messages }
    }
}

#[async_trait]
impl<C, M> GetDashboardStatsUseCase for GetDashboardStatsService<C, M>
where
    C: ClickRepository + Send + Sync,
    M: MessageQuery + Send + Sync,
{
    async fn execute(&self) -> Result<DashboardStats, GetDashboardStatsError> {
        let map_err = |msg: String| GetDashboardStatsError::RepositoryError(msg);

        let total_clicks = self
            .clicks
            .count_clicks()
            .await
            .map_err(|e| map_err(e.to_string()))?;

        let total_messages = self
            .messages
            .count_messages()
            .await
            .map_err(|e| map_err(e.to_string()))?;

        let latest_messages = self
            .messages
            .latest_messages(LATEST_MESSAGES_LIMIT)
            .await
            .map_err(|e| map_err(e.to_string()))?;

        let raw_clicks = self
            .clicks
            .recent_clicks(RAW_CLICKS_LIMIT)
            .await
            .map_err(|e| map_err(e.to_string()))?;

        let today = Utc::now().date_naive();
        let window_start = today
            .checked_sub_days(Days::new(6))
            .unwrap_or(today)
            .and_time(NaiveTime::MIN)
            .and_utc();

        let window_clicks = self
            .clicks
            .clicks_since(window_start)
            .await
            .map_err(|e| map_err(e.to_string()))?;

        let titles = self
            .clicks
            .click_titles()
            .await
            .map_err(|e| map_err(e.to_string()))?;

        Ok(DashboardStats {
            total_clicks,
            total_messages,
            latest_messages,
            raw_clicks,
            daily_clicks: daily_click_buckets(today, &window_clicks),
            popular_cards: popular_cards(&titles, POPULAR_CARDS_TOP_N),
        })
    }
}
