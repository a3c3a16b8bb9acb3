pub mod get_dashboard_stats;
pub mod record_click;
pub mod record_visit;

pub use get_dashboard_stats::get_dashboard_stats_handler;
pub use record_click::record_click_handler;
pub use record_visit::record_visit_handler;
