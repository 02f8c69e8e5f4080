//! Quizgate core.
//!
//! Sans-IO building blocks for a proctored quiz page:
//!
//! - [`SessionGate`]: static credential check flipping the session flag
//! - [`ProctoringMonitor`]: Armed/Disarmed state machine over clipboard and
//!   visibility signals with a warning threshold
//! - [`QuizEngine`]: answer recording and case-insensitive scoring over a
//!   [`QuestionBank`]
//! - [`Toaster`]: timed notifications
//! - [`Route`]: login/quiz routing with auth redirects
//!
//! Nothing here performs I/O except [`QuestionBank::load`]. Time and
//! randomness come from an [`Environment`] supplied by the caller.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod bank;
pub mod env;
pub mod error;
pub mod gate;
pub mod monitor;
pub mod notice;
pub mod quiz;
pub mod route;
pub mod session;
pub mod signal;
pub mod toast;

pub use bank::{Question, QuestionBank, QuestionKind};
pub use env::Environment;
pub use error::{BankError, GateError};
pub use gate::{Credential, SessionGate};
pub use monitor::{MonitorAction, MonitorConfig, MonitorState, ProctoringMonitor};
pub use notice::{Notice, NoticeKind};
pub use quiz::{AnswerSet, QuizEngine, ScoreResult};
pub use route::{Resolution, Route};
pub use session::Session;
pub use signal::{Signal, Signals};
pub use toast::{Toast, ToastConfig, ToastId, Toaster};
