//! Terminal driver tests.
//!
//! Feed command lines through the driver and check what reaches the terminal
//! and the listener registry.

use std::{
    future::Future,
    io::{self, Write},
    pin::Pin,
    sync::{
        Arc,
        atomic::{AtomicU64, Ordering},
    },
    task::{Context, Poll},
    time::Duration,
};

use proptest::prelude::*;
use quizgate_app::AppConfig;
use quizgate_cli::{CliError, Driver, Flow, RuntimeConfig, run};
use quizgate_core::{Environment, QuestionBank, Route};

/// Manual clock.
///
/// Without `timer_polls` sleeping never completes, so `run` only reacts to
/// input.
#[derive(Clone, Default)]
struct TestEnv {
    millis: Arc<AtomicU64>,
    timer_polls: Option<u32>,
}

impl TestEnv {
    /// Sleeps complete on their `polls`-th poll and advance the clock.
    fn with_timer(polls: u32) -> Self {
        Self { timer_polls: Some(polls), ..Self::default() }
    }

    fn advance(&self, millis: u64) {
        self.millis.fetch_add(millis, Ordering::SeqCst);
    }
}

impl Environment for TestEnv {
    type Instant = Duration;

    fn now(&self) -> Self::Instant {
        Duration::from_millis(self.millis.load(Ordering::SeqCst))
    }

    fn sleep(&self, duration: Duration) -> impl Future<Output = ()> + Send {
        Countdown {
            polls: self.timer_polls,
            clock: Arc::clone(&self.millis),
            millis: u64::try_from(duration.as_millis()).unwrap_or(u64::MAX),
        }
    }

    fn random_bytes(&self, buffer: &mut [u8]) {
        buffer.fill(0xab);
    }
}

/// Sleep that counts polls instead of wall time.
struct Countdown {
    polls: Option<u32>,
    clock: Arc<AtomicU64>,
    millis: u64,
}

impl Future for Countdown {
    type Output = ();

    fn poll(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<()> {
        let Some(polls) = self.polls else {
            return Poll::Pending;
        };
        let remaining = polls.saturating_sub(1);
        self.polls = Some(remaining);

        if remaining == 0 {
            self.clock.fetch_add(self.millis, Ordering::SeqCst);
            Poll::Ready(())
        } else {
            cx.waker().wake_by_ref();
            Poll::Pending
        }
    }
}

/// Output that breaks once a tab-switch warning is written.
#[derive(Default)]
struct BrokenOnWarning(Vec<u8>);

impl Write for BrokenOnWarning {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.extend_from_slice(buf);
        if self.0.windows(7).any(|window| window == b"Warning") {
            return Err(io::Error::new(io::ErrorKind::BrokenPipe, "terminal closed"));
        }
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

fn bank() -> Arc<QuestionBank> {
    Arc::new(QuestionBank::builtin().expect("builtin bank"))
}

fn driver() -> Driver<TestEnv, Vec<u8>> {
    driver_with(AppConfig::default())
}

fn driver_with(config: AppConfig) -> Driver<TestEnv, Vec<u8>> {
    Driver::new(TestEnv::default(), config, bank(), Vec::new())
}

fn feed(driver: &mut Driver<TestEnv, Vec<u8>>, lines: &[&str]) {
    for line in lines {
        assert_eq!(driver.execute_line(line).expect("execute"), Flow::Continue, "{line}");
    }
}

fn output(driver: Driver<TestEnv, Vec<u8>>) -> String {
    String::from_utf8(driver.into_output()).expect("utf-8 output")
}

#[test]
fn start_renders_login() {
    let mut driver = driver();
    driver.start().expect("start");

    insta::assert_snapshot!(output(driver), @r"
    == Login ==
    login <username> <password>
    ");
}

#[test]
fn rejected_login_shows_error_toast() {
    let mut driver = driver();
    driver.start().expect("start");
    feed(&mut driver, &["login student wrong"]);

    assert!(!driver.app().is_authenticated());
    assert_eq!(driver.bus().listener_count(), 0);
    insta::assert_snapshot!(output(driver), @r"
    == Login ==
    login <username> <password>
    [error] Invalid credentials
    ");
}

#[test]
fn login_registers_listeners_and_shows_quiz() {
    let mut driver = driver();
    feed(&mut driver, &["login student password"]);

    assert_eq!(driver.app().route(), Route::Quiz);
    assert_eq!(driver.bus().listener_count(), 3);

    let out = output(driver);
    assert!(out.starts_with("== The Quiz is here ==\n"));
    assert!(out.contains("[submit] Submit Exam"));
}

#[test]
fn clipboard_is_blocked_only_while_listening() {
    let mut driver = driver();
    feed(&mut driver, &["copy", "paste", "login student password", "copy", "paste"]);

    let out = output(driver);
    assert_eq!(out.matches("[error] Copying the text is prohibited").count(), 1);
    assert_eq!(out.matches("[error] Pasting is detected").count(), 1);
}

#[test]
fn three_tab_switches_disqualify() {
    let mut driver = driver();
    feed(&mut driver, &["login student password", "hide", "show", "hide", "show", "hide"]);

    assert!(!driver.app().is_authenticated());
    assert_eq!(driver.app().route(), Route::Login);
    assert_eq!(driver.bus().listener_count(), 0);

    let out = output(driver);
    assert!(out.contains("[error] Warning 1: You are not supposed to switch tabs"));
    assert!(out.contains("[error] Warning 2: You are not supposed to switch tabs"));
    assert!(out.contains("[error] Warning 3: You are not supposed to switch tabs"));
    assert!(out.contains("[error] You have been disqualified from the exam"));
    assert!(out.ends_with("== Login ==\nlogin <username> <password>\n"));
}

#[test]
fn hide_after_disqualification_is_not_delivered() {
    let mut driver = driver();
    feed(&mut driver, &["login student password", "hide", "hide", "hide", "hide"]);

    assert_eq!(driver.app().warning_count(), 3);
}

#[test]
fn configured_threshold_applies() {
    let mut config = AppConfig::default();
    config.monitor.warning_threshold = 1;
    let mut driver = driver_with(config);
    feed(&mut driver, &["login student password", "hide"]);

    assert!(!driver.app().is_authenticated());
    assert!(output(driver).contains("[error] You have been disqualified from the exam"));
}

#[test]
fn answers_by_option_number_and_text_are_scored() {
    let mut driver = driver();
    feed(
        &mut driver,
        &[
            "login student password",
            "answer 1 1",
            "answer 2 mars",
            "answer 4 harper lee",
            "answer 5 8",
            "submit",
        ],
    );

    let out = output(driver);
    assert!(out.contains("[success] You scored 4 out of 5"));
    assert!(out.contains("Your Score: 4 / 5"));
}

#[test]
fn quiz_commands_before_login_redirect() {
    let mut driver = driver();
    driver.start().expect("start");
    feed(&mut driver, &["open /proctoring", "submit"]);

    assert_eq!(driver.app().route(), Route::Login);
    assert_eq!(driver.app().last_score(), None);
}

#[test]
fn bad_input_is_reported_and_ignored() {
    let mut driver = driver();
    feed(&mut driver, &["", "dance", "answer", "answer 9 x", "open /admin"]);

    let out = output(driver);
    assert!(out.contains("error: unknown command: dance"));
    assert!(out.contains("error: usage: answer <n> <value...>"));
    assert!(out.contains("error: no question 9; the quiz has 5"));
    assert!(out.contains("error: unknown route: /admin"));
}

#[test]
fn quit_stops() {
    let mut driver = driver();
    assert_eq!(driver.execute_line("quit").expect("quit"), Flow::Quit);
}

#[test]
fn tick_expires_toasts() {
    let mut driver = driver();
    feed(&mut driver, &["login student wrong"]);
    assert_eq!(driver.app().toasts().count(), 1);

    driver.env().advance(3_999);
    driver.tick().expect("tick");
    assert_eq!(driver.app().toasts().count(), 1);

    driver.env().advance(1);
    driver.tick().expect("tick");
    assert_eq!(driver.app().toasts().count(), 0);
}

#[test]
fn shutdown_releases_listeners() {
    let mut driver = driver();
    feed(&mut driver, &["login student password"]);
    assert_eq!(driver.bus().listener_count(), 3);

    driver.shutdown();
    assert_eq!(driver.bus().listener_count(), 0);
}

#[test]
fn runtime_config_loads_question_file() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("quiz.json");
    std::fs::write(
        &path,
        r#"[{"text": "2 + 2?", "kind": "free-text", "answer": "4"}]"#,
    )
    .expect("write");

    let config = RuntimeConfig { questions: Some(path), ..RuntimeConfig::default() };
    let bank = config.load_bank().expect("load");
    assert_eq!(bank.len(), 1);
}

#[test]
fn runtime_config_rejects_missing_file() {
    let config = RuntimeConfig {
        questions: Some("/nonexistent/quiz.json".into()),
        ..RuntimeConfig::default()
    };
    assert!(config.load_bank().is_err());
}

#[tokio::test]
async fn run_processes_input_until_quit() {
    let mut driver = driver();
    let input: &[u8] = b"login student password\nhide\nquit\nhide\n";

    run(&mut driver, input, Duration::from_millis(250)).await.expect("run");

    assert_eq!(driver.bus().listener_count(), 0);
    let out = output(driver);
    assert!(out.contains("Warning 1:"));
    assert!(!out.contains("Warning 2:"));
}

#[tokio::test]
async fn run_stops_at_end_of_input() {
    let mut driver = driver();
    let input: &[u8] = b"login student password\n";

    run(&mut driver, input, Duration::from_millis(250)).await.expect("run");

    assert!(!driver.app().is_authenticated());
    assert_eq!(driver.bus().listener_count(), 0);
    assert!(output(driver).starts_with("== Login =="));
}

#[tokio::test]
async fn run_reports_invalid_utf8_and_keeps_going() {
    let mut driver = driver();
    let input: &[u8] = b"login student password\nhide\n\xff\xfe\nhide\nquit\n";

    run(&mut driver, input, Duration::from_millis(250)).await.expect("run");

    assert_eq!(driver.bus().listener_count(), 0);
    let out = output(driver);
    assert!(out.contains("error: unknown command: \u{fffd}\u{fffd}"));
    assert!(out.contains("Warning 2:"));
}

#[tokio::test]
async fn run_releases_listeners_when_output_fails() {
    let mut driver = Driver::new(
        TestEnv::default(),
        AppConfig::default(),
        bank(),
        BrokenOnWarning::default(),
    );
    let input: &[u8] = b"login student password\nhide\nhide\nquit\n";

    let result = run(&mut driver, input, Duration::from_millis(250)).await;

    assert!(matches!(result, Err(CliError::Io(_))), "{result:?}");
    assert_eq!(driver.bus().listener_count(), 0);
    assert!(!driver.app().is_authenticated());
}

#[tokio::test]
async fn steady_input_does_not_starve_ticks() {
    let env = TestEnv::with_timer(2);
    let mut driver = Driver::new(env.clone(), AppConfig::default(), bank(), Vec::new());
    let input: &[u8] = b"login student wrong\nview\nview\nview\nview\nquit\n";

    run(&mut driver, input, Duration::from_secs(5)).await.expect("run");

    // Every sleep lives for two polls; a timer rebuilt per line never fires.
    assert!(env.now() >= Duration::from_secs(5), "no tick fired: {:?}", env.now());
}

fn command_line() -> impl Strategy<Value = String> {
    prop_oneof![
        3 => Just("login student password".to_string()),
        1 => Just("login student wrong".to_string()),
        1 => Just("logout".to_string()),
        2 => Just("paste".to_string()),
        2 => Just("copy".to_string()),
        4 => Just("hide".to_string()),
        2 => Just("show".to_string()),
        1 => Just("reload".to_string()),
        1 => Just("submit".to_string()),
        1 => prop::sample::select(vec!["/", "/proctoring", "/nowhere"])
            .prop_map(|path| format!("open {path}")),
        1 => "[a-z ]{0,12}",
    ]
}

proptest! {
    /// The registry holds the three proctoring listeners exactly while the
    /// session is authenticated.
    #[test]
    fn prop_listeners_held_iff_authenticated(
        lines in prop::collection::vec(command_line(), 0..60)
    ) {
        let mut driver = driver();
        driver.start().expect("start");

        for line in &lines {
            driver.execute_line(line).expect("execute");
            let expected = if driver.app().is_authenticated() { 3 } else { 0 };
            prop_assert_eq!(driver.bus().listener_count(), expected, "after {:?}", line);
        }

        driver.shutdown();
        prop_assert_eq!(driver.bus().listener_count(), 0);
    }
}
