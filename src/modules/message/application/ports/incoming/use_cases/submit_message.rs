use async_trait::async_trait;
use email_address::EmailAddress;

use crate::message::application::ports::outgoing::MessageRecord;

#[derive(Debug, Clone)]
pub struct SubmitMessageCommand {
    name: String,
    email: String,
    message: String,
}

#[derive(Debug, thiserror::Error)]
pub enum SubmitMessageCommandError {
    #[error("Name cannot be empty")]
    EmptyName,

    #[error("Message cannot be empty")]
    EmptyMessage,

    #[error("'{0}' is not a valid email address")]
    InvalidEmail(String),
}

impl SubmitMessageCommand {
    pub fn new(
        name: String,
        email: String,
        message: String,
    ) -> Result<Self, SubmitMessageCommandError> {
        let name = name.trim();
        let email = email.trim();
        let message = message.trim();

        if name.is_empty() {
            return Err(SubmitMessageCommandError::EmptyName);
        }

        if message.is_empty() {
            return Err(SubmitMessageCommandError::EmptyMessage);
        }

        if !EmailAddress::is_valid(email) {
            return Err(SubmitMessageCommandError::InvalidEmail(email.to_string()));
        }

        Ok(Self {
            name: name.to_string(),
            email: email.to_string(),
            message: message.to_string(),
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum SubmitMessageError {
    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait SubmitMessageUseCase: Send + Sync {
    async fn execute(
        &self,
        command: SubmitMessageCommand,
    ) -> Result<MessageRecord, SubmitMessageError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_submission_is_trimmed() {
        let command = SubmitMessageCommand::new(
            "  Jane Doe ".to_string(),
            " jane@example.com ".to_string(),
            " Hello there ".to_string(),
        )
        .unwrap();

        assert_eq!(command.name(), "Jane Doe");
        assert_eq!(command.email(), "jane@example.com");
        assert_eq!(command.message(), "Hello there");
    }

    #[test]
    fn blank_name_is_rejected() {
        let result = SubmitMessageCommand::new(
            "   ".to_string(),
            "jane@example.com".to_string(),
            "Hello".to_string(),
        );

        assert!(matches!(result, Err(SubmitMessageCommandError::EmptyName)));
    }

    #[test]
    fn blank_message_is_rejected() {
        let result = SubmitMessageCommand::new(
            "Jane".to_string(),
            "jane@example.com".to_string(),
            "".to_string(),
        );

        assert!(matches!(
            result,
            Err(SubmitMessageCommandError::EmptyMessage)
        ));
    }

    #[test]
    fn malformed_email_is_rejected() {
        let result = SubmitMessageCommand::new(
            "Jane".to_string(),
            "not-an-email".to_string(),
            "Hello".to_string(),
        );

        assert!(matches!(
            result,
            Err(SubmitMessageCommandError::InvalidEmail(_))
        ));
    }
}
