//! User-facing notices.
//!
//! Every piece of feedback the quiz gives is one of these. The toaster turns
//! a notice into a timed toast; the wording lives here so state machines and
//! renderers agree on it.

use std::fmt;

/// Visual severity of a notice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NoticeKind {
    /// Rejection or proctoring alert.
    Error,
    /// Positive outcome.
    Success,
}

/// A notice shown to the quiz taker.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    /// Login attempt did not match the credential.
    InvalidCredentials,
    /// A paste was suppressed.
    PasteDetected,
    /// A copy was suppressed.
    CopyProhibited,
    /// The tab was hidden; `count` is the stored warning count after the
    /// increment.
    TabSwitchWarning {
        /// Warning number, starting at 1.
        count: u32,
    },
    /// Warning threshold reached; the session was revoked.
    Disqualified,
    /// Quiz submitted.
    Scored {
        /// Matching answers.
        score: usize,
        /// Questions in the bank.
        total: usize,
    },
}

impl Notice {
    /// Severity used to pick the toast style and lifetime.
    pub fn kind(&self) -> NoticeKind {
        match self {
            Self::Scored { .. } => NoticeKind::Success,
            Self::InvalidCredentials
            | Self::PasteDetected
            | Self::CopyProhibited
            | Self::TabSwitchWarning { .. }
            | Self::Disqualified => NoticeKind::Error,
        }
    }
}

impl fmt::Display for Notice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidCredentials => f.write_str("Invalid credentials"),
            Self::PasteDetected => f.write_str("Pasting is detected"),
            Self::CopyProhibited => f.write_str("Copying the text is prohibited"),
            Self::TabSwitchWarning { count } => {
                write!(f, "Warning {count}: You are not supposed to switch tabs")
            },
            Self::Disqualified => f.write_str("You have been disqualified from the exam"),
            Self::Scored { score, total } => write!(f, "You scored {score} out of {total}"),
        }
    }
}
