//! Real app wrapper that mirrors the model's interface.

use std::{sync::Arc, time::Duration};

use quizgate_app::{App, AppAction, AppConfig, AppError, AppEvent};
use quizgate_core::{
    QuestionBank, Signal, Signals, Toast,
    gate::{DEFAULT_PASSWORD, DEFAULT_USERNAME},
};

use super::{operation::Operation, session::ObservableState};
use crate::sim_env::{SimEnv, SimInstant};

/// The real app driven by [`Operation`]s in simulated time.
///
/// Also replays the emitted subscription actions into a listener set, the way
/// a driver would, so leaks and double subscriptions are observable.
pub struct RealSession {
    app: App<SimEnv>,
    env: SimEnv,
    bank: Arc<QuestionBank>,
    listeners: Signals,
}

impl RealSession {
    /// Fresh page over `bank` with default configuration.
    pub fn new(bank: Arc<QuestionBank>, seed: u64) -> Self {
        let env = SimEnv::with_seed(seed);
        let app = App::new(env.clone(), AppConfig::default(), Arc::clone(&bank));
        Self { app, env, bank, listeners: Signals::empty() }
    }

    /// The wrapped app.
    pub fn app(&self) -> &App<SimEnv> {
        &self.app
    }

    /// Listener set implied by the actions emitted so far.
    pub fn listeners(&self) -> Signals {
        self.listeners
    }

    /// Apply an operation.
    ///
    /// # Errors
    ///
    /// Whatever the app rejects. Operations only produce valid paths, so any
    /// error is a bug.
    pub fn apply(&mut self, op: &Operation) -> Result<Vec<AppAction<SimInstant>>, AppError> {
        let event = match *op {
            Operation::Login { valid } => AppEvent::Login {
                username: DEFAULT_USERNAME.to_string(),
                password: if valid { DEFAULT_PASSWORD } else { "not-it" }.to_string(),
            },
            Operation::Logout => AppEvent::Logout,
            Operation::Paste => AppEvent::Signal(Signal::Paste),
            Operation::Copy => AppEvent::Signal(Signal::Copy),
            Operation::Hide => AppEvent::Signal(Signal::Visibility { hidden: true }),
            Operation::Show => AppEvent::Signal(Signal::Visibility { hidden: false }),
            Operation::Answer { question, correct, upper } => {
                let index = usize::from(question) % self.bank.len();
                let Some(question) = self.bank.get(index) else {
                    return Ok(Vec::new());
                };
                let value = if correct {
                    question.reference_answer().to_string()
                } else {
                    String::from("certainly not this")
                };
                let value = if upper { value.to_uppercase() } else { value };
                AppEvent::Answer { question: question.text().to_string(), value }
            },
            Operation::Submit => AppEvent::Submit,
            Operation::Navigate { to_quiz } => {
                AppEvent::Navigate { path: Operation::path(to_quiz).to_string() }
            },
            Operation::AdvanceTime { millis } => {
                let now = self.env.advance(Duration::from_millis(u64::from(millis)));
                AppEvent::Tick { now }
            },
            Operation::Reload => AppEvent::Reload,
        };

        let actions = self.app.handle(event)?;
        self.track(&actions);
        Ok(actions)
    }

    /// Extract observable state for comparison.
    pub fn observable_state(&self) -> ObservableState {
        ObservableState {
            authenticated: self.app.is_authenticated(),
            warning_count: self.app.warning_count(),
            route: self.app.route(),
            subscriptions: self.app.subscriptions(),
            last_score: self.app.last_score(),
            toasts: self.app.toasts().map(Toast::kind).collect(),
        }
    }

    fn track(&mut self, actions: &[AppAction<SimInstant>]) {
        for action in actions {
            match action {
                AppAction::Subscribe(sources) => self.listeners.insert(*sources),
                AppAction::Unsubscribe(sources) => self.listeners.remove(*sources),
                _ => {},
            }
        }
    }
}
