//! Model session: the reference implementation.

use std::collections::VecDeque;

use quizgate_core::{
    NoticeKind, Route, ScoreResult, Signals, monitor::DEFAULT_WARNING_THRESHOLD,
    toast::{DEFAULT_ERROR_LIFETIME, DEFAULT_SUCCESS_LIFETIME, DEFAULT_TOAST_LIMIT},
};

use super::operation::Operation;

/// Observable state for oracle comparison.
///
/// This is the subset of page state that can be compared against the real
/// app.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ObservableState {
    /// Whether the session is authenticated.
    pub authenticated: bool,
    /// Tab-switch warnings this page session.
    pub warning_count: u32,
    /// Route on screen.
    pub route: Route,
    /// Held listener sources.
    pub subscriptions: Signals,
    /// Last submitted score.
    pub last_score: Option<ScoreResult>,
    /// Kinds of visible toasts, oldest first.
    pub toasts: Vec<NoticeKind>,
}

/// Model session with default configuration.
#[derive(Debug, Clone)]
pub struct ModelSession {
    authenticated: bool,
    listening: bool,
    warnings: u32,
    route: Route,
    /// Per question: `Some(correct)` once answered.
    answers: Vec<Option<bool>>,
    last_score: Option<usize>,
    now_ms: u64,
    /// Visible toasts with their expiry in milliseconds.
    toasts: VecDeque<(NoticeKind, u64)>,
}

impl ModelSession {
    /// Fresh page over a bank of `questions` questions.
    pub fn new(questions: usize) -> Self {
        Self {
            authenticated: false,
            listening: false,
            warnings: 0,
            route: Route::Login,
            answers: vec![None; questions],
            last_score: None,
            now_ms: 0,
            toasts: VecDeque::new(),
        }
    }

    /// Apply an operation.
    pub fn apply(&mut self, op: &Operation) {
        match *op {
            Operation::Login { valid } => {
                if self.authenticated {
                    self.route = Route::Quiz;
                } else if valid {
                    self.authenticated = true;
                    self.listening = true;
                    self.route = Route::Quiz;
                } else {
                    self.toast(NoticeKind::Error);
                }
            },
            Operation::Logout => self.end_session(),
            Operation::Paste | Operation::Copy => {
                if self.listening {
                    self.toast(NoticeKind::Error);
                }
            },
            Operation::Hide => {
                if self.listening {
                    self.warnings = self.warnings.saturating_add(1);
                    self.toast(NoticeKind::Error);
                    if self.warnings >= DEFAULT_WARNING_THRESHOLD {
                        self.toast(NoticeKind::Error);
                        self.end_session();
                    }
                }
            },
            Operation::Show => {},
            Operation::Answer { question, correct, .. } => {
                if self.authenticated {
                    let slot = usize::from(question)
                        .checked_rem(self.answers.len())
                        .and_then(|index| self.answers.get_mut(index));
                    if let Some(slot) = slot {
                        *slot = Some(correct);
                    }
                } else {
                    self.route = Route::Login;
                }
            },
            Operation::Submit => {
                if self.authenticated {
                    let correct = self.answers.iter().filter(|a| **a == Some(true)).count();
                    self.last_score = Some(correct);
                    self.toast(NoticeKind::Success);
                } else {
                    self.route = Route::Login;
                }
            },
            Operation::Navigate { .. } => self.route = Route::home(self.authenticated),
            Operation::AdvanceTime { millis } => {
                self.now_ms += u64::from(millis);
                let now = self.now_ms;
                self.toasts.retain(|(_, expires)| *expires > now);
            },
            Operation::Reload => {
                let now_ms = self.now_ms;
                *self = Self::new(self.answers.len());
                self.now_ms = now_ms;
            },
        }
    }

    /// Extract observable state for comparison.
    pub fn observable_state(&self) -> ObservableState {
        ObservableState {
            authenticated: self.authenticated,
            warning_count: self.warnings,
            route: self.route,
            subscriptions: if self.listening { Signals::PROCTORED } else { Signals::empty() },
            last_score: self
                .last_score
                .map(|score| ScoreResult { score, total: self.answers.len() }),
            toasts: self.toasts.iter().map(|(kind, _)| *kind).collect(),
        }
    }

    fn end_session(&mut self) {
        if self.authenticated {
            self.authenticated = false;
            self.listening = false;
            self.route = Route::Login;
        }
    }

    fn toast(&mut self, kind: NoticeKind) {
        let lifetime = match kind {
            NoticeKind::Error => DEFAULT_ERROR_LIFETIME,
            NoticeKind::Success => DEFAULT_SUCCESS_LIFETIME,
        };
        let lifetime_ms = u64::try_from(lifetime.as_millis()).unwrap_or(u64::MAX);
        self.toasts.push_back((kind, self.now_ms.saturating_add(lifetime_ms)));
        while self.toasts.len() > DEFAULT_TOAST_LIMIT {
            self.toasts.pop_front();
        }
    }
}
