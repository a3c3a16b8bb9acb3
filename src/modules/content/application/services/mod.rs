pub mod add_expertise_area_service;
pub mod get_content_service;
pub mod remove_expertise_area_service;
pub mod reorder_expertise_areas_service;
pub mod update_content_service;

pub use add_expertise_area_service::AddExpertiseAreaService;
pub use get_content_service::GetContentService;
pub use remove_expertise_area_service::RemoveExpertiseAreaService;
pub use reorder_expertise_areas_service::ReorderExpertiseAreasService;
pub use update_content_service::UpdateContentService;
