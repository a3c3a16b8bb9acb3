pub mod get_dashboard_stats;
pub mod record_click;
pub mod record_visit;

pub use get_dashboard_stats::{DashboardStats, GetDashboardStatsError, GetDashboardStatsUseCase};
pub use record_click::{
    RecordClickCommand, RecordClickCommandError, RecordClickError, RecordClickUseCase,
};
pub use record_visit::{
    RecordVisitCommand, RecordVisitCommandError, RecordVisitError, RecordVisitUseCase,
};
