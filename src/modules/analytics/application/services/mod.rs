pub mod get_dashboard_stats_service;
pub mod record_click_service;
pub mod record_visit_service;

pub use get_dashboard_stats_service::GetDashboardStatsService;
pub use record_click_service::RecordClickService;
pub use record_visit_service::RecordVisitService;
