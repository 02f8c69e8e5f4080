//! Events fed into the app and actions it produces.

use quizgate_core::{Route, ScoreResult, Signal, Signals, Toast, ToastId};

/// Input to [`crate::App::handle`].
///
/// Generic over the environment's instant type so ticks carry virtual time
/// in simulation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppEvent<I> {
    /// The user asked for a path.
    Navigate {
        /// Requested path, e.g. `/proctoring`.
        path: String,
    },

    /// Login form submitted.
    Login {
        /// Username field.
        username: String,
        /// Password field.
        password: String,
    },

    /// Manual logout.
    Logout,

    /// An answer control changed.
    Answer {
        /// Question text the control belongs to.
        question: String,
        /// New value.
        value: String,
    },

    /// Quiz form submitted.
    Submit,

    /// A proctoring signal fired.
    Signal(Signal),

    /// Periodic timer for toast expiry.
    Tick {
        /// Current time.
        now: I,
    },

    /// The page was reloaded; everything returns to page-load state.
    Reload,
}

/// Severity of an [`AppAction::Log`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogLevel {
    /// Diagnostic detail.
    Debug,
    /// Session lifecycle.
    Info,
    /// Proctoring alerts.
    Warn,
    /// Should not happen.
    Error,
}

/// Output of [`crate::App::handle`]. The caller performs these in order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppAction<I> {
    /// Show this route; it is the one requested.
    Render(Route),

    /// Show this route instead of the one requested.
    Redirect(Route),

    /// Register listeners for these sources.
    Subscribe(Signals),

    /// Remove listeners for these sources.
    Unsubscribe(Signals),

    /// Cancel the default behaviour of the signal being dispatched.
    PreventDefault(Signal),

    /// Show a toast.
    Notify(Toast<I>),

    /// Remove a toast.
    Dismiss(ToastId),

    /// Show the score inline on the quiz view.
    DisplayScore(ScoreResult),

    /// Log a message.
    Log {
        /// Severity.
        level: LogLevel,
        /// Text, prefixed with the session id when one is active.
        message: String,
    },
}
