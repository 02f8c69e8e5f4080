//! Fuzz target for the [`App`] session state machine
//!
//! Prevent access to the quiz without the configured credential
//!
//! # Strategy
//!
//! - Event sequences: Arbitrary logins, navigations, answers, signals, ticks
//! - Free-form strings: Usernames, passwords, paths and answers are fuzzed
//! - Timing: Advance virtual time between events to expire toasts
//!
//! # Invariants
//!
//! - `authenticated` ONLY reachable via a login with the exact credential
//! - Listeners held iff authenticated
//! - Route on screen is always the session's home route
//! - Warning count never decreases except on reload
//! - Unknown paths MUST reject and leave state unchanged
//! - Visible toasts never exceed the limit
//! - NEVER panic on any input

#![no_main]

use std::{sync::Arc, time::Duration};

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use quizgate_app::{App, AppConfig, AppEvent};
use quizgate_core::{
    QuestionBank, Route, Signal, Signals,
    gate::{DEFAULT_PASSWORD, DEFAULT_USERNAME},
    toast::DEFAULT_TOAST_LIMIT,
};
use quizgate_harness::SimEnv;

#[derive(Debug, Clone, Arbitrary)]
enum FuzzEvent {
    Login { username: String, password: String },
    ValidLogin,
    Logout,
    Navigate { path: String },
    Answer { question: u8, value: String },
    Submit,
    Paste,
    Copy,
    Visibility { hidden: bool },
    Tick { advance_millis: u16 },
    Reload,
}

#[derive(Debug, Arbitrary)]
struct FuzzInput {
    seed: u64,
    events: Vec<FuzzEvent>,
}

fuzz_target!(|input: FuzzInput| {
    let Ok(bank) = QuestionBank::builtin() else {
        return;
    };
    let bank = Arc::new(bank);
    let env = SimEnv::with_seed(input.seed);
    let mut app = App::new(env.clone(), AppConfig::default(), Arc::clone(&bank));

    for event in input.events {
        let was_authenticated = app.is_authenticated();
        let previous_warnings = app.warning_count();
        let previous_route = app.route();
        let is_reload = matches!(event, FuzzEvent::Reload);

        let (app_event, credential_ok, known_path) = match event {
            FuzzEvent::Login { username, password } => {
                let ok = username == DEFAULT_USERNAME && password == DEFAULT_PASSWORD;
                (AppEvent::Login { username, password }, ok, true)
            },
            FuzzEvent::ValidLogin => (
                AppEvent::Login {
                    username: DEFAULT_USERNAME.to_string(),
                    password: DEFAULT_PASSWORD.to_string(),
                },
                true,
                true,
            ),
            FuzzEvent::Logout => (AppEvent::Logout, false, true),
            FuzzEvent::Navigate { path } => {
                let known = path.parse::<Route>().is_ok();
                (AppEvent::Navigate { path }, false, known)
            },
            FuzzEvent::Answer { question, value } => {
                let index = usize::from(question) % bank.len();
                let text = bank.get(index).map(|q| q.text().to_string()).unwrap_or_default();
                (AppEvent::Answer { question: text, value }, false, true)
            },
            FuzzEvent::Submit => (AppEvent::Submit, false, true),
            FuzzEvent::Paste => (AppEvent::Signal(Signal::Paste), false, true),
            FuzzEvent::Copy => (AppEvent::Signal(Signal::Copy), false, true),
            FuzzEvent::Visibility { hidden } => {
                (AppEvent::Signal(Signal::Visibility { hidden }), false, true)
            },
            FuzzEvent::Tick { advance_millis } => {
                let now = env.advance(Duration::from_millis(u64::from(advance_millis)));
                (AppEvent::Tick { now }, false, true)
            },
            FuzzEvent::Reload => (AppEvent::Reload, false, true),
        };

        let is_login = matches!(app_event, AppEvent::Login { .. });
        let result = app.handle(app_event);

        if known_path {
            assert!(result.is_ok(), "known input rejected: {:?}", result);
        } else {
            assert!(result.is_err(), "unknown path accepted");
            assert_eq!(app.route(), previous_route, "rejected navigation moved the route");
            assert_eq!(app.is_authenticated(), was_authenticated);
        }

        if !was_authenticated && app.is_authenticated() {
            assert!(is_login && credential_ok, "authenticated without the credential");
        }

        if is_login && !credential_ok && !was_authenticated {
            assert!(!app.is_authenticated(), "wrong credential accepted");
        }

        let expected = if app.is_authenticated() { Signals::PROCTORED } else { Signals::empty() };
        assert_eq!(app.subscriptions(), expected, "listeners out of step with session");

        assert_eq!(app.route(), Route::home(app.is_authenticated()), "route not home");

        if !is_reload {
            assert!(app.warning_count() >= previous_warnings, "warning count decreased");
        } else {
            assert_eq!(app.warning_count(), 0, "reload kept warnings");
        }

        assert!(app.toasts().count() <= DEFAULT_TOAST_LIMIT, "toast limit exceeded");
    }
});
