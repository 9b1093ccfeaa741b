//! Logging
//!
//! `init_logging` installs the crate's compact `tracing` subscriber.
//! `Logger` is a small sink interface for callers that want to hand a
//! logger around explicitly: `TracingLogger` forwards to `tracing`,
//! `DummyLogger` drops everything.

use tracing::Level;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use crate::models::errors::{ErrorCode, KitError, KitResult};
use crate::utils::constants::{APP_NAME, APP_VERSION};

/// Install a global compact subscriber.
///
/// `RUST_LOG` wins when set; otherwise everything at `level` and above is
/// printed. Fails if a global subscriber is already installed.
pub fn init_logging(level: Level) -> KitResult<()> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(level.as_str().to_ascii_lowercase()));

    FmtSubscriber::builder()
        .with_env_filter(filter)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false)
        .compact()
        .try_init()
        .map_err(|e| KitError::new(ErrorCode::Unknown, format!("Logger already set: {}", e)))?;

    tracing::info!("{} v{} logging at {}", APP_NAME, APP_VERSION, level);
    Ok(())
}

/// Leveled log sink
pub trait Logger: Send + Sync {
    fn error(&self, message: &str);
    fn warn(&self, message: &str);
    fn info(&self, message: &str);
    fn debug(&self, message: &str);
}

/// Forwards to the `tracing` macros
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingLogger;

impl Logger for TracingLogger {
    fn error(&self, message: &str) {
        tracing::error!("{}", message);
    }

    fn warn(&self, message: &str) {
        tracing::warn!("{}", message);
    }

    fn info(&self, message: &str) {
        tracing::info!("{}", message);
    }

    fn debug(&self, message: &str) {
        tracing::debug!("{}", message);
    }
}

/// Ignores every message
#[derive(Debug, Clone, Copy, Default)]
pub struct DummyLogger;

impl Logger for DummyLogger {
    fn error(&self, _message: &str) {}
    fn warn(&self, _message: &str) {}
    fn info(&self, _message: &str) {}
    fn debug(&self, _message: &str) {}
}
