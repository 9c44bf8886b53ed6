//! # Observability
//!
//! Logging setup for the Contact Keeper client crates.
//!
//! Library crates only emit `tracing` events. The binary calls
//! [`init_with_config`] once at startup, which installs:
//!
//! - a JSONL file layer (one structured line per event, append-only)
//! - an optional compact stderr layer for interactive use
//!
//! Both layers honour `RUST_LOG`, falling back to the configured level.
//!
//! ```rust,ignore
//! observability::init_with_config(observability::LogConfig {
//!     service_name: "cli".into(),
//!     default_level: "debug".into(),
//!     also_stderr: true,
//!     ..Default::default()
//! })?;
//! tracing::info!("ready");
//! ```

mod json_layer;
mod writer;

pub use json_layer::{JsonLayer, LogEntry};
pub use writer::{AppendLogWriter, WriterFactory};

use std::io;
use std::path::PathBuf;
use thiserror::Error;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer};

/// Configuration for the logging system.
#[derive(Debug, Clone)]
pub struct LogConfig {
    /// Name of the service, written into every log line.
    pub service_name: String,

    /// Default filter directive. `RUST_LOG` takes precedence when set.
    pub default_level: String,

    /// JSONL output file. Defaults to `~/.contact-keeper/logs/client.jsonl`.
    pub log_path: Option<PathBuf>,

    /// Also emit human-readable logs to stderr.
    pub also_stderr: bool,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            service_name: "unknown".into(),
            default_level: "info".into(),
            log_path: None,
            also_stderr: false,
        }
    }
}

/// Errors raised while installing the global subscriber.
#[derive(Debug, Error)]
pub enum InitError {
    /// No log path was configured and no home directory is available.
    #[error("could not determine a log file location")]
    NoLogPath,
    /// The log file could not be opened.
    #[error("failed to open log file: {0}")]
    Io(#[from] io::Error),
    /// A global subscriber is already installed.
    #[error("logging already initialized: {0}")]
    AlreadyInitialized(String),
}

/// Initialize logging with custom configuration.
///
/// Returns the path of the JSONL log file in use.
pub fn init_with_config(config: LogConfig) -> Result<PathBuf, InitError> {
    let log_path = match config.log_path.clone() {
        Some(path) => path,
        None => default_log_path().ok_or(InitError::NoLogPath)?,
    };

    let writer = AppendLogWriter::new(&log_path)?;
    let json_layer = JsonLayer::new(config.service_name.clone(), WriterFactory::new(writer));

    let stderr_layer = if config.also_stderr {
        Some(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .compact()
                .with_writer(io::stderr)
                .with_filter(env_filter(&config.default_level)),
        )
    } else {
        None
    };

    tracing_subscriber::registry()
        .with(json_layer.with_filter(env_filter(&config.default_level)))
        .with(stderr_layer)
        .try_init()
        .map_err(|e| InitError::AlreadyInitialized(e.to_string()))?;

    tracing::debug!(
        service = %config.service_name,
        log_path = %log_path.display(),
        "observability initialized"
    );

    Ok(log_path)
}

fn env_filter(default_level: &str) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level))
}

fn default_log_path() -> Option<PathBuf> {
    dirs::home_dir().map(|home| {
        home.join(".contact-keeper")
            .join("logs")
            .join("client.jsonl")
    })
}

pub use tracing::{debug, error, info, instrument, trace, warn, Level};
