pub mod add_expertise_area;
pub mod get_content;
pub mod remove_expertise_area;
pub mod reorder_expertise_areas;
pub mod update_content;

pub use add_expertise_area::add_expertise_area_handler;
pub use get_content::get_content_handler;
pub use remove_expertise_area::remove_expertise_area_handler;
pub use reorder_expertise_areas::reorder_expertise_areas_handler;
pub use update_content::update_content_handler;
