//! App state machine.
//!
//! The `App` is the top-level state machine for one page session. It owns
//! the session, the proctoring monitor, the quiz engine, the toaster and the
//! current route, and is the only thing that mutates them.

use std::sync::Arc;

use quizgate_core::{
    Credential, Environment, MonitorAction, MonitorConfig, Notice, ProctoringMonitor,
    QuestionBank, QuizEngine, Resolution, Route, ScoreResult, Session, SessionGate, Signal,
    Signals, Toast, ToastConfig, Toaster,
};

use crate::{
    error::AppError,
    event::{AppAction, AppEvent, LogLevel},
};

/// App configuration.
#[derive(Debug, Clone, Default)]
pub struct AppConfig {
    /// Accepted login.
    pub credential: Credential,
    /// Proctoring thresholds.
    pub monitor: MonitorConfig,
    /// Toast lifetimes and limit.
    pub toasts: ToastConfig,
}

/// App state machine.
///
/// Pure state machine - returns actions, caller handles I/O.
///
/// # Type Parameters
///
/// - `E`: Environment implementation for time/randomness
pub struct App<E: Environment> {
    gate: SessionGate,
    session: Session,
    monitor: ProctoringMonitor,
    quiz: QuizEngine,
    toaster: Toaster<E::Instant>,
    route: Route,

    /// Random id of the current authenticated session, for log correlation.
    session_id: Option<u64>,

    env: E,
}

impl<E: Environment> App<E> {
    /// Create an app in page-load state.
    pub fn new(env: E, config: AppConfig, bank: Arc<QuestionBank>) -> Self {
        Self {
            gate: SessionGate::new(config.credential),
            session: Session::new(),
            monitor: ProctoringMonitor::new(config.monitor),
            quiz: QuizEngine::new(bank),
            toaster: Toaster::new(config.toasts),
            route: Route::Login,
            session_id: None,
            env,
        }
    }

    /// Whether the quiz view is reachable.
    pub fn is_authenticated(&self) -> bool {
        self.session.is_authenticated()
    }

    /// Warnings recorded since page load.
    pub fn warning_count(&self) -> u32 {
        self.session.warning_count()
    }

    /// Route on screen.
    pub fn route(&self) -> Route {
        self.route
    }

    /// Signal sources the monitor holds.
    pub fn subscriptions(&self) -> Signals {
        self.monitor.subscriptions()
    }

    /// The quiz engine (bank, answers, last result).
    pub fn quiz(&self) -> &QuizEngine {
        &self.quiz
    }

    /// Result shown inline on the quiz view.
    pub fn last_score(&self) -> Option<ScoreResult> {
        self.quiz.last_result()
    }

    /// Visible toasts, oldest first.
    pub fn toasts(&self) -> impl Iterator<Item = &Toast<E::Instant>> {
        self.toaster.visible()
    }

    /// Id of the current authenticated session.
    pub fn session_id(&self) -> Option<u64> {
        self.session_id
    }

    /// Process an event and return resulting actions.
    ///
    /// # Errors
    ///
    /// Returns `AppError` if the event names something that does not exist.
    /// State is unchanged in that case.
    pub fn handle(
        &mut self,
        event: AppEvent<E::Instant>,
    ) -> Result<Vec<AppAction<E::Instant>>, AppError> {
        match event {
            AppEvent::Navigate { path } => self.handle_navigate(&path),
            AppEvent::Login { username, password } => Ok(self.handle_login(&username, &password)),
            AppEvent::Logout => Ok(self.handle_logout()),
            AppEvent::Answer { question, value } => Ok(self.handle_answer(&question, &value)),
            AppEvent::Submit => Ok(self.handle_submit()),
            AppEvent::Signal(signal) => Ok(self.handle_signal(signal)),
            AppEvent::Tick { now } => Ok(self.handle_tick(now)),
            AppEvent::Reload => Ok(self.handle_reload()),
        }
    }

    /// Handle path navigation.
    fn handle_navigate(&mut self, path: &str) -> Result<Vec<AppAction<E::Instant>>, AppError> {
        let requested: Route =
            path.parse().map_err(|_| AppError::UnknownRoute { path: path.to_string() })?;

        let resolution = requested.resolve(self.is_authenticated());
        self.route = resolution.target();

        Ok(match resolution {
            Resolution::Render(route) => vec![AppAction::Render(route)],
            Resolution::Redirect(route) => {
                tracing::debug!(from = %requested, to = %route, "navigation redirected");
                vec![AppAction::Redirect(route)]
            },
        })
    }

    /// Handle login form submission.
    fn handle_login(&mut self, username: &str, password: &str) -> Vec<AppAction<E::Instant>> {
        if self.is_authenticated() {
            return self.go_to(Route::Quiz);
        }

        if self.gate.attempt_login(&mut self.session, username, password).is_err() {
            return self.notify(Notice::InvalidCredentials);
        }

        let session_id = self.env.random_u64();
        self.session_id = Some(session_id);

        let armed = self.monitor.arm(&self.session);
        let mut actions = self.convert_monitor_actions(armed);
        actions.extend(self.go_to(Route::Quiz));
        actions.push(self.log(LogLevel::Info, format!("{username} logged in")));
        actions
    }

    /// Handle manual logout.
    fn handle_logout(&mut self) -> Vec<AppAction<E::Instant>> {
        if !self.gate.logout(&mut self.session) {
            tracing::debug!("logout without a session");
            return Vec::new();
        }

        let mut actions = vec![self.log(LogLevel::Info, "logged out".to_string())];
        actions.extend(self.end_session());
        actions
    }

    /// Handle an answer change.
    fn handle_answer(&mut self, question: &str, value: &str) -> Vec<AppAction<E::Instant>> {
        if !self.is_authenticated() {
            return self.go_to(Route::Login);
        }

        self.quiz.record_answer(question, value);
        Vec::new()
    }

    /// Handle quiz submission.
    fn handle_submit(&mut self) -> Vec<AppAction<E::Instant>> {
        if !self.is_authenticated() {
            return self.go_to(Route::Login);
        }

        let result = self.quiz.submit();

        let mut actions = self.notify(Notice::Scored { score: result.score, total: result.total });
        actions.push(AppAction::DisplayScore(result));
        actions.push(self.log(LogLevel::Info, format!("submitted, score {result}")));
        actions
    }

    /// Handle a proctoring signal.
    fn handle_signal(&mut self, signal: Signal) -> Vec<AppAction<E::Instant>> {
        let monitor_actions = self.monitor.handle_signal(&mut self.session, signal);
        self.convert_monitor_actions(monitor_actions)
    }

    /// Handle tick (toast expiry).
    fn handle_tick(&mut self, now: E::Instant) -> Vec<AppAction<E::Instant>> {
        self.toaster.expire(now).into_iter().map(AppAction::Dismiss).collect()
    }

    /// Handle page reload.
    fn handle_reload(&mut self) -> Vec<AppAction<E::Instant>> {
        let disarmed = self.monitor.disarm();
        let mut actions = self.convert_monitor_actions(disarmed);
        actions.extend(self.toaster.clear().into_iter().map(AppAction::Dismiss));

        self.session = Session::new();
        self.quiz.reset();
        self.session_id = None;
        self.route = Route::Login;

        actions.push(AppAction::Render(Route::Login));
        actions
    }

    /// Release the monitor and return to the login view.
    fn end_session(&mut self) -> Vec<AppAction<E::Instant>> {
        let disarmed = self.monitor.disarm();
        let mut actions = self.convert_monitor_actions(disarmed);
        actions.extend(self.go_to(Route::Login));
        self.session_id = None;
        actions
    }

    fn go_to(&mut self, route: Route) -> Vec<AppAction<E::Instant>> {
        if self.route == route {
            return Vec::new();
        }
        self.route = route;
        vec![AppAction::Redirect(route)]
    }

    fn notify(&mut self, notice: Notice) -> Vec<AppAction<E::Instant>> {
        let (toast, evicted) = self.toaster.push(notice, self.env.now());

        let mut actions: Vec<_> = evicted.into_iter().map(AppAction::Dismiss).collect();
        actions.push(AppAction::Notify(toast));
        actions
    }

    fn log(&self, level: LogLevel, message: String) -> AppAction<E::Instant> {
        let message = match self.session_id {
            Some(id) => format!("[session {id:016x}] {message}"),
            None => message,
        };
        AppAction::Log { level, message }
    }

    /// Convert monitor actions to app actions.
    fn convert_monitor_actions(
        &mut self,
        monitor_actions: Vec<MonitorAction>,
    ) -> Vec<AppAction<E::Instant>> {
        let mut actions = Vec::with_capacity(monitor_actions.len());

        for action in monitor_actions {
            match action {
                MonitorAction::Subscribe(sources) => actions.push(AppAction::Subscribe(sources)),
                MonitorAction::Unsubscribe(sources) => {
                    actions.push(AppAction::Unsubscribe(sources));
                },
                MonitorAction::PreventDefault(signal) => {
                    actions.push(AppAction::PreventDefault(signal));
                },
                MonitorAction::Notify(notice) => {
                    if let Notice::TabSwitchWarning { count } = notice {
                        actions.push(self.log(LogLevel::Warn, format!("tab hidden, warning {count}")));
                    }
                    actions.extend(self.notify(notice));
                },
                MonitorAction::Disqualified { warnings } => {
                    actions.push(
                        self.log(LogLevel::Warn, format!("disqualified after {warnings} warnings")),
                    );
                    actions.extend(self.go_to(Route::Login));
                    self.session_id = None;
                },
            }
        }

        actions
    }
}
