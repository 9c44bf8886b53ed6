//! Configuration, paths, and logging setup for the Contact Keeper client.

mod config;
mod error;
mod logging;
mod paths;

pub use config::{
    Config, DispatchOrdering, Endpoints, DEFAULT_ALERT_TIMEOUT_MS, DEFAULT_API_BASE_URL,
    DEFAULT_LOG_LEVEL, DEFAULT_REQUEST_TIMEOUT_SECS,
};
pub use error::{CoreError, CoreResult};
pub use logging::init_logging;
pub use paths::Paths;
