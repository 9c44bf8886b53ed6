//! Logging initialization for the client.

use crate::Paths;
use observability::{InitError, LogConfig};
use std::path::PathBuf;

/// Initialize structured logging for the CLI.
///
/// JSONL goes to `<base>/logs/client.jsonl`. Setting
/// `CONTACT_KEEPER_LOG_STDERR` mirrors the stream to stderr.
pub fn init_logging(level: &str, paths: &Paths) -> Result<PathBuf, InitError> {
    observability::init_with_config(LogConfig {
        service_name: "cli".into(),
        default_level: level.into(),
        log_path: Some(paths.log_file()),
        also_stderr: std::env::var("CONTACT_KEEPER_LOG_STDERR").is_ok(),
    })
}
