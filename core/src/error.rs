use deck_chatgpt::ClientError;
use thiserror::Error;

/// The single message shown to users for any generation failure.
pub const GENERATION_FAILED_MESSAGE: &str = "Failed to generate presentation. The model may be unavailable or the topic could be too complex. Please try again.";

/// Rejected before the generator is ever called.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TopicError {
    #[error("Please enter a topic with at least {min} characters.")]
    TooShort { min: usize, len: usize },
}

#[derive(Error, Debug)]
pub enum GenerateError {
    #[error(transparent)]
    Client(#[from] ClientError),

    #[error("model returned an empty outline")]
    EmptyOutline,

    #[error("generator unavailable: {0}")]
    Unavailable(String),
}

impl GenerateError {
    /// Transport, status and parse failures all collapse into one message.
    pub fn user_message(&self) -> &'static str {
        GENERATION_FAILED_MESSAGE
    }
}

pub type Result<T> = std::result::Result<T, GenerateError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_message_is_uniform() {
        let errors = [
            GenerateError::EmptyOutline,
            GenerateError::Unavailable("offline".into()),
            GenerateError::Client(ClientError::Malformed("x".into())),
            GenerateError::Client(ClientError::Status {
                status: 500,
                body: String::new(),
            }),
        ];
        for err in &errors {
            assert_eq!(err.user_message(), GENERATION_FAILED_MESSAGE);
        }
    }

    #[test]
    fn test_topic_error_message() {
        let err = TopicError::TooShort { min: 5, len: 2 };
        assert_eq!(err.to_string(), "Please enter a topic with at least 5 characters.");
    }
}
