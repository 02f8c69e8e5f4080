//! Core error types.

use thiserror::Error;

/// Errors from the session gate.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GateError {
    /// Username or password did not match the configured credential.
    ///
    /// Recoverable: the user may retry without limit.
    #[error("invalid credentials")]
    InvalidCredentials,
}

/// Errors from loading or validating a question bank.
#[derive(Debug, Error)]
pub enum BankError {
    /// Reading the question file failed.
    #[error("failed to read question bank: {0}")]
    Io(#[from] std::io::Error),

    /// The question data is not valid JSON for the bank schema.
    #[error("failed to parse question bank: {0}")]
    Parse(#[from] serde_json::Error),

    /// The bank has no questions.
    #[error("question bank is empty")]
    Empty,

    /// A question has empty text.
    #[error("question {index} has empty text")]
    EmptyText {
        /// Zero-based position in the bank.
        index: usize,
    },

    /// Two questions share the same text.
    ///
    /// Answers are keyed by question text, so texts must be unique.
    #[error("duplicate question text: {text:?}")]
    DuplicateText {
        /// The repeated text.
        text: String,
    },

    /// A multiple-choice question has no options.
    #[error("multiple-choice question has no options: {text:?}")]
    MissingOptions {
        /// Question text.
        text: String,
    },

    /// A free-text question lists options.
    #[error("free-text question must not list options: {text:?}")]
    UnexpectedOptions {
        /// Question text.
        text: String,
    },

    /// A multiple-choice reference answer is not among the options.
    #[error("reference answer {answer:?} is not an option of {text:?}")]
    AnswerNotAnOption {
        /// Question text.
        text: String,
        /// The offending reference answer.
        answer: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_credentials_display() {
        assert_eq!(GateError::InvalidCredentials.to_string(), "invalid credentials");
    }

    #[test]
    fn duplicate_text_display() {
        let err = BankError::DuplicateText { text: "2 + 2?".to_string() };
        assert_eq!(err.to_string(), "duplicate question text: \"2 + 2?\"");
    }
}
