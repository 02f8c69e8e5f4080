//! Quizgate terminal binary.
//!
//! # Usage
//!
//! ```bash
//! # Built-in questions, default login student/password
//! quizgate
//!
//! # Custom question file and a stricter proctor
//! quizgate --questions quiz.json --warning-threshold 2
//! ```

use std::{path::PathBuf, time::Duration};

use clap::Parser;
use quizgate_app::AppConfig;
use quizgate_cli::{Driver, RuntimeConfig, SystemEnv, run};
use quizgate_core::{Credential, MonitorConfig, ToastConfig};
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Proctored quiz in the terminal
#[derive(Parser, Debug)]
#[command(name = "quizgate")]
#[command(about = "Proctored quiz with a login gate and tab-switch detection")]
#[command(version)]
struct Args {
    /// Accepted username
    #[arg(long, default_value = "student")]
    username: String,

    /// Accepted password
    #[arg(long, default_value = "password")]
    password: String,

    /// Question bank (JSON); the built-in quiz if omitted
    #[arg(short, long)]
    questions: Option<PathBuf>,

    /// Tab switches that disqualify
    #[arg(long, default_value = "3")]
    warning_threshold: u32,

    /// Error toast lifetime in milliseconds
    #[arg(long, default_value = "4000")]
    error_toast_ms: u64,

    /// Success toast lifetime in milliseconds
    #[arg(long, default_value = "2000")]
    success_toast_ms: u64,

    /// Maximum visible toasts
    #[arg(long, default_value = "20")]
    toast_limit: usize,

    /// Toast expiry check period in milliseconds
    #[arg(long, default_value = "250")]
    tick_ms: u64,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, default_value = "warn")]
    log_level: String,
}

impl Args {
    fn runtime_config(self) -> RuntimeConfig {
        RuntimeConfig {
            app: AppConfig {
                credential: Credential::new(self.username, self.password),
                monitor: MonitorConfig { warning_threshold: self.warning_threshold },
                toasts: ToastConfig {
                    error_lifetime: Duration::from_millis(self.error_toast_ms),
                    success_lifetime: Duration::from_millis(self.success_toast_ms),
                    limit: self.toast_limit,
                },
            },
            questions: self.questions,
            tick: Duration::from_millis(self.tick_ms.max(1)),
        }
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&args.log_level));

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();

    let config = args.runtime_config();
    tracing::info!(credential = ?config.app.credential, "quizgate starting");

    let bank = config.load_bank()?;
    tracing::info!(questions = bank.len(), "question bank ready");

    let stdin = tokio::io::BufReader::new(tokio::io::stdin());
    let mut driver = Driver::new(SystemEnv::new(), config.app, bank, std::io::stdout());

    run(&mut driver, stdin, config.tick).await?;

    tracing::info!("quizgate stopped");
    Ok(())
}
