pub mod delete_message;
pub mod submit_message;

pub use delete_message::{DeleteMessageError, DeleteMessageUseCase};
pub use submit_message::{
    SubmitMessageCommand, SubmitMessageCommandError, SubmitMessageError, SubmitMessageUseCase,
};
