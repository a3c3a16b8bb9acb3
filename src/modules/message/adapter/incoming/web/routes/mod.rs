pub mod delete_message;
pub mod submit_message;

pub use delete_message::delete_message_handler;
pub use submit_message::submit_message_handler;
