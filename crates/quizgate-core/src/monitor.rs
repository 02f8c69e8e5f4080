//! Proctoring monitor.
//!
//! Two states: `Armed` while the session is authenticated, `Disarmed`
//! otherwise. Arming subscribes to every proctored signal source and
//! disarming releases exactly the sources held, so repeated login/logout
//! cycles never duplicate or leak listeners.
//!
//! ```text
//!            arm (after login)
//!  Disarmed ───────────────────▶ Armed { subscribed }
//!     ▲                             │
//!     └──── disarm / threshold ─────┘
//! ```
//!
//! Pure state machine: returns [`MonitorAction`]s, the caller performs the
//! subscriptions and shows the notices.

use crate::{
    notice::Notice,
    session::Session,
    signal::{Signal, Signals},
};

/// Default number of warnings that disqualifies the quiz taker.
pub const DEFAULT_WARNING_THRESHOLD: u32 = 3;

/// Monitor configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MonitorConfig {
    /// Warning count at which the session is revoked. Values below 1 are
    /// treated as 1.
    pub warning_threshold: u32,
}

impl Default for MonitorConfig {
    fn default() -> Self {
        Self { warning_threshold: DEFAULT_WARNING_THRESHOLD }
    }
}

/// Monitor state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MonitorState {
    /// Not listening to anything.
    #[default]
    Disarmed,
    /// Listening to the held sources.
    Armed {
        /// Sources currently subscribed.
        subscribed: Signals,
    },
}

/// Actions produced by the monitor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MonitorAction {
    /// Start listening to these sources.
    Subscribe(Signals),
    /// Stop listening to these sources.
    Unsubscribe(Signals),
    /// Cancel the signal's default behaviour (the clipboard operation).
    PreventDefault(Signal),
    /// Show a notice.
    Notify(Notice),
    /// The session was revoked because the threshold was reached.
    Disqualified {
        /// Warning count at disqualification.
        warnings: u32,
    },
}

/// Proctoring state machine.
#[derive(Debug, Clone, Default)]
pub struct ProctoringMonitor {
    config: MonitorConfig,
    state: MonitorState,
}

impl ProctoringMonitor {
    /// Create a disarmed monitor.
    pub fn new(config: MonitorConfig) -> Self {
        Self { config, state: MonitorState::Disarmed }
    }

    /// Current state.
    pub fn state(&self) -> MonitorState {
        self.state
    }

    /// Whether the monitor is listening.
    pub fn is_armed(&self) -> bool {
        matches!(self.state, MonitorState::Armed { .. })
    }

    /// Sources currently held.
    pub fn subscriptions(&self) -> Signals {
        match self.state {
            MonitorState::Armed { subscribed } => subscribed,
            MonitorState::Disarmed => Signals::empty(),
        }
    }

    /// Effective disqualification threshold.
    pub fn threshold(&self) -> u32 {
        self.config.warning_threshold.max(1)
    }

    /// Enter `Armed` for an authenticated session.
    ///
    /// No-op if already armed or if the session is not authenticated.
    pub fn arm(&mut self, session: &Session) -> Vec<MonitorAction> {
        if self.is_armed() || !session.is_authenticated() {
            return Vec::new();
        }

        self.state = MonitorState::Armed { subscribed: Signals::PROCTORED };
        tracing::debug!(sources = ?Signals::PROCTORED, "monitor armed");
        vec![MonitorAction::Subscribe(Signals::PROCTORED)]
    }

    /// Leave `Armed`, releasing every held source.
    ///
    /// No-op if already disarmed.
    pub fn disarm(&mut self) -> Vec<MonitorAction> {
        let subscribed = self.subscriptions();
        self.state = MonitorState::Disarmed;

        if subscribed.is_empty() {
            return Vec::new();
        }

        tracing::debug!(sources = ?subscribed, "monitor disarmed");
        vec![MonitorAction::Unsubscribe(subscribed)]
    }

    /// Process one signal.
    ///
    /// Signals from sources the monitor does not hold are dropped without
    /// touching the session.
    pub fn handle_signal(&mut self, session: &mut Session, signal: Signal) -> Vec<MonitorAction> {
        if !self.subscriptions().contains(signal.source()) {
            tracing::debug!(?signal, "signal ignored while disarmed");
            return Vec::new();
        }

        if signal.is_clipboard() {
            let notice = match signal {
                Signal::Paste => Notice::PasteDetected,
                _ => Notice::CopyProhibited,
            };
            return vec![MonitorAction::PreventDefault(signal), MonitorAction::Notify(notice)];
        }

        match signal {
            Signal::Visibility { hidden: true } => self.handle_tab_hidden(session),
            Signal::Visibility { hidden: false } | Signal::Paste | Signal::Copy => Vec::new(),
        }
    }

    fn handle_tab_hidden(&mut self, session: &mut Session) -> Vec<MonitorAction> {
        let count = session.record_warning();
        tracing::warn!(count, "tab hidden during quiz");

        let mut actions = vec![MonitorAction::Notify(Notice::TabSwitchWarning { count })];

        if count >= self.threshold() {
            tracing::warn!(count, threshold = self.threshold(), "quiz taker disqualified");
            session.revoke();
            actions.push(MonitorAction::Notify(Notice::Disqualified));
            actions.extend(self.disarm());
            actions.push(MonitorAction::Disqualified { warnings: count });
        }

        actions
    }
}
