pub mod delete_message_service;
pub mod submit_message_service;

pub use delete_message_service::DeleteMessageService;
pub use submit_message_service::SubmitMessageService;
