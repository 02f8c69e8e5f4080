//! Subscription lifetime tests.
//!
//! Replays arbitrary event sequences and tracks the listener set implied by
//! the emitted `Subscribe`/`Unsubscribe` actions, the way a driver would.

use std::{future::Future, sync::Arc, time::Duration};

use proptest::prelude::*;
use quizgate_app::{App, AppAction, AppConfig, AppEvent, Environment, Signal, Signals};
use quizgate_core::QuestionBank;

#[derive(Clone)]
struct TestEnv;

impl Environment for TestEnv {
    type Instant = Duration;

    fn now(&self) -> Self::Instant {
        Duration::ZERO
    }

    fn sleep(&self, _duration: Duration) -> impl Future<Output = ()> + Send {
        std::future::ready(())
    }

    fn random_bytes(&self, buffer: &mut [u8]) {
        buffer.fill(7);
    }
}

fn app() -> App<TestEnv> {
    let bank = Arc::new(QuestionBank::builtin().expect("builtin bank"));
    App::new(TestEnv, AppConfig::default(), bank)
}

fn login(valid: bool) -> AppEvent<Duration> {
    AppEvent::Login {
        username: "student".to_string(),
        password: if valid { "password" } else { "wrong" }.to_string(),
    }
}

fn event_strategy() -> impl Strategy<Value = AppEvent<Duration>> {
    prop_oneof![
        any::<bool>().prop_map(login),
        Just(AppEvent::Logout),
        Just(AppEvent::Signal(Signal::Paste)),
        Just(AppEvent::Signal(Signal::Copy)),
        any::<bool>().prop_map(|hidden| AppEvent::Signal(Signal::Visibility { hidden })),
        Just(AppEvent::Submit),
        Just(AppEvent::Reload),
        (0u64..10_000).prop_map(|ms| AppEvent::Tick { now: Duration::from_millis(ms) }),
    ]
}

/// Apply subscription actions to `listeners`, asserting no duplicate or
/// phantom listener is ever requested.
fn track(listeners: &mut Signals, actions: &[AppAction<Duration>]) {
    for action in actions {
        match action {
            AppAction::Subscribe(sources) => {
                assert!(listeners.intersection(*sources).is_empty(), "duplicate subscription");
                listeners.insert(*sources);
            },
            AppAction::Unsubscribe(sources) => {
                assert!(listeners.contains(*sources), "unsubscribe of unheld source");
                listeners.remove(*sources);
            },
            _ => {},
        }
    }
}

#[test]
fn login_logout_cycles_do_not_leak() {
    let mut app = app();
    let mut listeners = Signals::empty();

    for _ in 0..10 {
        let actions = app.handle(login(true)).expect("login");
        track(&mut listeners, &actions);
        assert_eq!(listeners, Signals::PROCTORED);

        let actions = app.handle(AppEvent::Logout).expect("logout");
        track(&mut listeners, &actions);
        assert_eq!(listeners, Signals::empty());
    }
}

#[test]
fn signals_after_logout_are_inert() {
    let mut app = app();
    app.handle(login(true)).expect("login");
    app.handle(AppEvent::Logout).expect("logout");

    for signal in [Signal::Paste, Signal::Copy, Signal::Visibility { hidden: true }] {
        let actions = app.handle(AppEvent::Signal(signal)).expect("signal");
        assert!(actions.is_empty());
    }
    assert_eq!(app.warning_count(), 0);
    assert_eq!(app.toasts().count(), 0);
}

#[test]
fn prop_listeners_match_authentication() {
    proptest!(|(events in prop::collection::vec(event_strategy(), 0..64))| {
        let mut app = app();
        let mut listeners = Signals::empty();

        for event in events {
            let actions = app.handle(event).expect("no app errors for these events");
            track(&mut listeners, &actions);

            // PROPERTY: listeners held iff authenticated
            prop_assert_eq!(listeners, app.subscriptions());
            prop_assert_eq!(listeners == Signals::PROCTORED, app.is_authenticated());
            prop_assert_eq!(listeners.is_empty(), !app.is_authenticated());
        }
    });
}

#[test]
fn prop_warning_count_never_decreases_without_reload() {
    proptest!(|(events in prop::collection::vec(event_strategy(), 0..64))| {
        let mut app = app();
        let mut previous = 0;

        for event in events {
            let reload = matches!(event, AppEvent::Reload);
            app.handle(event).expect("handle");

            if reload {
                prop_assert_eq!(app.warning_count(), 0);
            } else {
                prop_assert!(app.warning_count() >= previous);
            }
            previous = app.warning_count();
        }
    });
}
