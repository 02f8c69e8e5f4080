//! Driver error types.

use quizgate_core::BankError;
use thiserror::Error;

/// Errors that stop the driver.
#[derive(Debug, Error)]
pub enum CliError {
    /// Terminal I/O failed.
    #[error("terminal error: {0}")]
    Io(#[from] std::io::Error),

    /// The question bank could not be loaded.
    #[error("configuration error: {0}")]
    Bank(#[from] BankError),
}

/// A command line the driver could not understand.
///
/// Reported to the user; the driver keeps running.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CommandError {
    /// Blank input.
    #[error("empty command")]
    Empty,

    /// First word is not a command.
    #[error("unknown command: {0} (try `help`)")]
    Unknown(String),

    /// A required argument is missing.
    #[error("usage: {usage}")]
    Usage {
        /// Correct form of the command.
        usage: &'static str,
    },

    /// Question number is not a positive integer.
    #[error("not a question number: {0}")]
    InvalidNumber(String),

    /// Question number is outside the bank.
    #[error("no question {number}; the quiz has {total}")]
    NoSuchQuestion {
        /// Requested number (1-based).
        number: usize,
        /// Questions in the bank.
        total: usize,
    },
}
