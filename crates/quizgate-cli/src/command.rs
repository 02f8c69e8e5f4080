//! Terminal commands.
//!
//! One line of input is one command. The terminal stands in for the page:
//! `paste`, `copy`, `hide` and `show` raise the signals a browser would.

use std::str::FromStr;

use quizgate_core::{QuestionBank, QuestionKind, Signal};

use crate::error::CommandError;

/// Help text listing every command.
pub const HELP: &str = "\
commands:
  open <path>               navigate to / or /proctoring
  login <user> <password>   submit the login form
  logout                    end the session
  answer <n> <value...>     answer question n (option number or text)
  submit                    submit the quiz
  paste | copy              clipboard operation on the page
  hide | show               switch away from / back to the tab
  reload                    reload the page
  view                      redraw the current view
  help                      this text
  quit                      exit";

/// A parsed command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Navigate to a path.
    Open(String),
    /// Submit the login form.
    Login {
        /// Username field.
        username: String,
        /// Password field.
        password: String,
    },
    /// End the session.
    Logout,
    /// Answer a question by number.
    Answer {
        /// 1-based question number.
        number: usize,
        /// Raw value as typed.
        value: String,
    },
    /// Submit the quiz.
    Submit,
    /// Raise a proctoring signal.
    Signal(Signal),
    /// Reload the page.
    Reload,
    /// Redraw.
    View,
    /// Show help.
    Help,
    /// Exit.
    Quit,
}

impl FromStr for Command {
    type Err = CommandError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let line = line.trim();
        let (word, rest) = line.split_once(char::is_whitespace).unwrap_or((line, ""));
        let rest = rest.trim_start();

        match word {
            "" => Err(CommandError::Empty),
            "open" => match rest {
                "" => Err(CommandError::Usage { usage: "open <path>" }),
                path => Ok(Self::Open(path.to_string())),
            },
            "login" => {
                let mut args = rest.split_whitespace();
                match (args.next(), args.next(), args.next()) {
                    (Some(username), Some(password), None) => Ok(Self::Login {
                        username: username.to_string(),
                        password: password.to_string(),
                    }),
                    _ => Err(CommandError::Usage { usage: "login <user> <password>" }),
                }
            },
            "answer" => {
                let (number, value) = rest.split_once(char::is_whitespace).unwrap_or((rest, ""));
                if number.is_empty() {
                    return Err(CommandError::Usage { usage: "answer <n> <value...>" });
                }
                let number = number
                    .parse::<usize>()
                    .ok()
                    .filter(|n| *n > 0)
                    .ok_or_else(|| CommandError::InvalidNumber(number.to_string()))?;
                Ok(Self::Answer { number, value: value.trim_start().to_string() })
            },
            "logout" => Ok(Self::Logout),
            "submit" => Ok(Self::Submit),
            "paste" => Ok(Self::Signal(Signal::Paste)),
            "copy" => Ok(Self::Signal(Signal::Copy)),
            "hide" => Ok(Self::Signal(Signal::Visibility { hidden: true })),
            "show" => Ok(Self::Signal(Signal::Visibility { hidden: false })),
            "reload" => Ok(Self::Reload),
            "view" => Ok(Self::View),
            "help" | "?" => Ok(Self::Help),
            "quit" | "exit" => Ok(Self::Quit),
            other => Err(CommandError::Unknown(other.to_string())),
        }
    }
}

/// Map an `answer` command onto the question text and stored value.
///
/// For multiple-choice questions a value that is an option number selects
/// that option; anything else is stored verbatim.
pub fn resolve_answer(
    bank: &QuestionBank,
    number: usize,
    value: &str,
) -> Result<(String, String), CommandError> {
    let question = number
        .checked_sub(1)
        .and_then(|index| bank.get(index))
        .ok_or(CommandError::NoSuchQuestion { number, total: bank.len() })?;

    let value = match question.kind() {
        QuestionKind::MultipleChoice => value
            .parse::<usize>()
            .ok()
            .and_then(|n| n.checked_sub(1))
            .and_then(|index| question.options().get(index))
            .map_or_else(|| value.to_string(), Clone::clone),
        QuestionKind::FreeText => value.to_string(),
    };

    Ok((question.text().to_string(), value))
}
