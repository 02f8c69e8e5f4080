//! Quizgate terminal driver.
//!
//! Runs the proctored quiz in a terminal. The terminal plays the browser's
//! part: typed commands navigate, fill the forms, and raise the clipboard and
//! visibility signals that the proctoring monitor listens to.
//!
//! ## Architecture
//!
//! ```text
//! quizgate-cli
//!   ├─ SystemEnv     (production Environment impl)
//!   ├─ Driver        (commands -> AppEvent, AppAction -> output)
//!   ├─ SignalBus     (listener registry, addEventListener stand-in)
//!   └─ run           (tokio loop: stdin lines + tick timer)
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod command;
mod driver;
mod error;
pub mod render;
mod signal_bus;
mod system_env;

use std::{io::Write, path::PathBuf, sync::Arc, time::Duration};

pub use driver::{Driver, Flow};
pub use error::{CliError, CommandError};
use quizgate_app::AppConfig;
use quizgate_core::{Environment, QuestionBank};
pub use signal_bus::{ListenerId, SignalBus};
pub use system_env::SystemEnv;
use tokio::io::{AsyncBufRead, AsyncBufReadExt};

/// Default tick period for toast expiry.
pub const DEFAULT_TICK: Duration = Duration::from_millis(250);

/// Runtime configuration.
#[derive(Debug, Clone)]
pub struct RuntimeConfig {
    /// App configuration (credential, thresholds, toasts).
    pub app: AppConfig,
    /// Question file; the embedded bank when `None`.
    pub questions: Option<PathBuf>,
    /// Tick period.
    pub tick: Duration,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self { app: AppConfig::default(), questions: None, tick: DEFAULT_TICK }
    }
}

impl RuntimeConfig {
    /// Load the configured question bank.
    pub fn load_bank(&self) -> Result<Arc<QuestionBank>, CliError> {
        let bank = match &self.questions {
            Some(path) => QuestionBank::load(path)?,
            None => QuestionBank::builtin()?,
        };
        Ok(Arc::new(bank))
    }
}

/// Run the driver until `quit` or end of input.
///
/// Listeners are released before returning, on every exit path. Input that
/// is not valid UTF-8 is decoded lossily and reported as an unknown command.
pub async fn run<E, W, R>(
    driver: &mut Driver<E, W>,
    input: R,
    tick: Duration,
) -> Result<(), CliError>
where
    E: Environment,
    W: Write,
    R: AsyncBufRead + Unpin,
{
    let result = pump(driver, input, tick).await;
    driver.shutdown();
    result
}

async fn pump<E, W, R>(
    driver: &mut Driver<E, W>,
    mut input: R,
    tick: Duration,
) -> Result<(), CliError>
where
    E: Environment,
    W: Write,
    R: AsyncBufRead + Unpin,
{
    let env = driver.env().clone();
    // Partial lines survive a cancelled read; cleared only once executed.
    let mut buf = Vec::new();
    // One timer across iterations so steady input cannot starve ticks.
    let timer = env.sleep(tick);
    tokio::pin!(timer);

    driver.start()?;

    loop {
        tokio::select! {
            biased;

            () = &mut timer => {
                timer.set(env.sleep(tick));
                driver.tick()?;
            },
            read = input.read_until(b'\n', &mut buf) => {
                if read? == 0 {
                    tracing::debug!("end of input");
                    return Ok(());
                }
                let line = String::from_utf8_lossy(&buf).trim_end_matches(['\n', '\r']).to_string();
                buf.clear();
                if driver.execute_line(&line)? == Flow::Quit {
                    return Ok(());
                }
            },
        }
    }
}
