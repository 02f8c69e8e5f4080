//! Terminal driver.
//!
//! Owns the app, the listener registry and the output stream. Commands and
//! ticks become app events; app actions become terminal output and listener
//! changes.

use std::{io::Write, sync::Arc};

use quizgate_app::{App, AppAction, AppConfig, AppEvent, LogLevel};
use quizgate_core::{Environment, QuestionBank, Route};

use crate::{
    command::{Command, HELP, resolve_answer},
    error::{CliError, CommandError},
    render,
    signal_bus::SignalBus,
};

/// Whether the input loop should keep going.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    /// Read the next command.
    Continue,
    /// Stop.
    Quit,
}

/// Drives an [`App`] from terminal commands.
pub struct Driver<E: Environment, W: Write> {
    app: App<E>,
    bus: SignalBus,
    env: E,
    out: W,
}

impl<E: Environment, W: Write> Driver<E, W> {
    /// Create a driver writing to `out`.
    pub fn new(env: E, config: AppConfig, bank: Arc<QuestionBank>, out: W) -> Self {
        let app = App::new(env.clone(), config, bank);
        Self { app, bus: SignalBus::new(), env, out }
    }

    /// The app being driven.
    pub fn app(&self) -> &App<E> {
        &self.app
    }

    /// Registered signal listeners.
    pub fn bus(&self) -> &SignalBus {
        &self.bus
    }

    /// The environment.
    pub fn env(&self) -> &E {
        &self.env
    }

    /// Consume the driver, returning the output stream.
    pub fn into_output(self) -> W {
        self.out
    }

    /// Open the login page.
    pub fn start(&mut self) -> Result<(), CliError> {
        self.process(AppEvent::Navigate { path: Route::Login.path().to_string() })
    }

    /// Parse and execute one input line.
    ///
    /// Unparseable lines are reported on the output, not returned as errors.
    pub fn execute_line(&mut self, line: &str) -> Result<Flow, CliError> {
        match line.parse::<Command>() {
            Ok(command) => self.execute(command),
            Err(CommandError::Empty) => Ok(Flow::Continue),
            Err(e) => {
                writeln!(self.out, "error: {e}")?;
                Ok(Flow::Continue)
            },
        }
    }

    /// Execute one command.
    pub fn execute(&mut self, command: Command) -> Result<Flow, CliError> {
        let event = match command {
            Command::Open(path) => AppEvent::Navigate { path },
            Command::Login { username, password } => AppEvent::Login { username, password },
            Command::Logout => AppEvent::Logout,
            Command::Answer { number, value } => {
                match resolve_answer(self.app.quiz().bank(), number, &value) {
                    Ok((question, value)) => AppEvent::Answer { question, value },
                    Err(e) => {
                        writeln!(self.out, "error: {e}")?;
                        return Ok(Flow::Continue);
                    },
                }
            },
            Command::Submit => AppEvent::Submit,
            Command::Signal(signal) => {
                if !self.bus.dispatch(signal) {
                    tracing::debug!(?signal, "no listener for signal");
                    return Ok(Flow::Continue);
                }
                AppEvent::Signal(signal)
            },
            Command::Reload => AppEvent::Reload,
            Command::View => {
                render::view(&mut self.out, self.app.route(), self.app.quiz())?;
                return Ok(Flow::Continue);
            },
            Command::Help => {
                writeln!(self.out, "{HELP}")?;
                return Ok(Flow::Continue);
            },
            Command::Quit => return Ok(Flow::Quit),
        };

        self.process(event)?;
        Ok(Flow::Continue)
    }

    /// Expire toasts at the current time.
    pub fn tick(&mut self) -> Result<(), CliError> {
        let now = self.env.now();
        self.process(AppEvent::Tick { now })
    }

    /// Release every listener before exit.
    pub fn shutdown(&mut self) {
        match self.app.handle(AppEvent::Reload) {
            Ok(actions) => {
                for action in actions {
                    if let AppAction::Unsubscribe(sources) = action {
                        self.bus.unsubscribe(sources);
                    }
                }
            },
            Err(e) => tracing::error!("shutdown failed: {}", e),
        }
        tracing::debug!(listeners = self.bus.listener_count(), "driver shut down");
    }

    fn process(&mut self, event: AppEvent<E::Instant>) -> Result<(), CliError> {
        match self.app.handle(event) {
            Ok(actions) => self.execute_actions(actions),
            Err(e) => {
                tracing::warn!("{}", e);
                writeln!(self.out, "error: {e}")?;
                Ok(())
            },
        }
    }

    /// Execute app actions.
    fn execute_actions(&mut self, actions: Vec<AppAction<E::Instant>>) -> Result<(), CliError> {
        for action in actions {
            match action {
                AppAction::Render(route) | AppAction::Redirect(route) => {
                    render::view(&mut self.out, route, self.app.quiz())?;
                },
                AppAction::Subscribe(sources) => {
                    self.bus.subscribe(sources);
                },
                AppAction::Unsubscribe(sources) => {
                    self.bus.unsubscribe(sources);
                },
                AppAction::PreventDefault(signal) => {
                    tracing::debug!(?signal, "default action suppressed");
                },
                AppAction::Notify(toast) => render::toast(&mut self.out, &toast)?,
                AppAction::Dismiss(id) => tracing::trace!(id, "toast dismissed"),
                AppAction::DisplayScore(result) => render::score(&mut self.out, result)?,
                AppAction::Log { level, message } => match level {
                    LogLevel::Debug => tracing::debug!("{}", message),
                    LogLevel::Info => tracing::info!("{}", message),
                    LogLevel::Warn => tracing::warn!("{}", message),
                    LogLevel::Error => tracing::error!("{}", message),
                },
            }
        }

        Ok(())
    }
}
