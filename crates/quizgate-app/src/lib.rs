//! Quizgate app
//!
//! Action-based application state machine for one proctored quiz page.
//! Composes the session gate, proctoring monitor, quiz engine, toaster and
//! router from `quizgate-core` behind a single entry point.
//!
//! # Architecture
//!
//! The app is a pure state machine that:
//! - Receives events from the caller (navigation, form input, signals, ticks)
//! - Produces actions for the caller to execute (render, subscribe, toast)
//! - Uses the `Environment` trait for time and randomness (deterministic
//!   testing)
//!
//! # Components
//!
//! - [`App`]: Top-level state machine for one page session
//! - [`AppEvent`]: Events fed into the app
//! - [`AppAction`]: Actions produced by the app

#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod app;
mod error;
mod event;

pub use app::{App, AppConfig};
pub use error::AppError;
pub use event::{AppAction, AppEvent, LogLevel};
pub use quizgate_core::{Environment, Route, ScoreResult, Signal, Signals};
