pub mod add_expertise_area;
pub mod get_content;
pub mod remove_expertise_area;
pub mod reorder_expertise_areas;
pub mod update_content;

pub use add_expertise_area::{
    AddExpertiseAreaCommand, AddExpertiseAreaCommandError, AddExpertiseAreaError,
    AddExpertiseAreaUseCase,
};
pub use get_content::{GetContentError, GetContentUseCase};
pub use remove_expertise_area::{RemoveExpertiseAreaError, RemoveExpertiseAreaUseCase};
pub use reorder_expertise_areas::{
    ReorderExpertiseAreasCommand, ReorderExpertiseAreasError, ReorderExpertiseAreasUseCase,
};
pub use update_content::{UpdateContentCommand, UpdateContentError, UpdateContentUseCase};
