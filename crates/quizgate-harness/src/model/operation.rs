//! Operations for model-based testing.
//!
//! Operations represent everything a quiz taker can do to the page. They are
//! generated randomly by proptest (or decoded by the fuzzer) and applied to
//! both the model and the real app.

use arbitrary::Arbitrary;
use quizgate_core::route::{LOGIN_PATH, QUIZ_PATH};

/// Operations that can be applied to the page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Arbitrary)]
pub enum Operation {
    /// Submit the login form.
    Login {
        /// Whether the configured credential is used.
        valid: bool,
    },

    /// Manual logout.
    Logout,

    /// Paste on the page.
    Paste,

    /// Copy on the page.
    Copy,

    /// Switch away from the tab.
    Hide,

    /// Switch back to the tab.
    Show,

    /// Answer a question.
    Answer {
        /// Question index, wrapped to the bank size.
        question: u8,
        /// Whether the reference answer is given.
        correct: bool,
        /// Whether the answer is shouted (upper-cased).
        upper: bool,
    },

    /// Submit the quiz.
    Submit,

    /// Navigate by path.
    Navigate {
        /// `/proctoring` if true, `/` otherwise.
        to_quiz: bool,
    },

    /// Advance time and expire toasts.
    AdvanceTime {
        /// Milliseconds to advance.
        millis: u16,
    },

    /// Reload the page.
    Reload,
}

impl Operation {
    /// Path for a navigation target.
    pub fn path(to_quiz: bool) -> &'static str {
        if to_quiz { QUIZ_PATH } else { LOGIN_PATH }
    }
}
