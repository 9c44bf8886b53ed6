//! Configuration management for the client.

use crate::{CoreError, CoreResult, Paths};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;
use url::Url;

/// Default API base URL.
pub const DEFAULT_API_BASE_URL: &str = "http://localhost:5000";

/// Default log level.
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Default transport timeout.
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;

/// Default lifetime of a displayed alert.
pub const DEFAULT_ALERT_TIMEOUT_MS: u64 = 5000;

/// How a store treats settlements of superseded load calls.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DispatchOrdering {
    /// Every settled call dispatches, in settlement order.
    #[default]
    LastDispatchWins,
    /// A load that settles after a newer load of the same kind is dropped.
    LatestCallWins,
}

/// Remote API endpoint paths, relative to `api_base_url`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Endpoints {
    #[serde(default = "default_contacts_endpoint")]
    pub contacts: String,
    #[serde(default = "default_current_user_endpoint")]
    pub current_user: String,
    #[serde(default = "default_login_endpoint")]
    pub login: String,
    #[serde(default = "default_register_endpoint")]
    pub register: String,
}

fn default_contacts_endpoint() -> String {
    "/api/contacts".to_string()
}

fn default_current_user_endpoint() -> String {
    "/api/auth".to_string()
}

fn default_login_endpoint() -> String {
    "/api/auth".to_string()
}

fn default_register_endpoint() -> String {
    "/api/users".to_string()
}

impl Default for Endpoints {
    fn default() -> Self {
        Self {
            contacts: default_contacts_endpoint(),
            current_user: default_current_user_endpoint(),
            login: default_login_endpoint(),
            register: default_register_endpoint(),
        }
    }
}

impl Endpoints {
    /// Path of a single contact resource.
    pub fn contact(&self, id: &str) -> String {
        format!("{}/{}", self.contacts.trim_end_matches('/'), id)
    }
}

/// Main client configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Log level (trace, debug, info, warn, error).
    #[serde(default = "default_log_level")]
    pub log_level: String,
    /// Base URL of the contacts API.
    #[serde(default = "default_api_base_url")]
    pub api_base_url: String,
    #[serde(default)]
    pub endpoints: Endpoints,
    /// Per-request timeout enforced by the transport.
    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,
    /// How long an alert stays visible.
    #[serde(default = "default_alert_timeout_ms")]
    pub alert_timeout_ms: u64,
    #[serde(default)]
    pub dispatch_ordering: DispatchOrdering,
}

fn default_log_level() -> String {
    DEFAULT_LOG_LEVEL.to_string()
}

fn default_api_base_url() -> String {
    DEFAULT_API_BASE_URL.to_string()
}

fn default_request_timeout_secs() -> u64 {
    DEFAULT_REQUEST_TIMEOUT_SECS
}

fn default_alert_timeout_ms() -> u64 {
    DEFAULT_ALERT_TIMEOUT_MS
}

impl Default for Config {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            api_base_url: default_api_base_url(),
            endpoints: Endpoints::default(),
            request_timeout_secs: DEFAULT_REQUEST_TIMEOUT_SECS,
            alert_timeout_ms: DEFAULT_ALERT_TIMEOUT_MS,
            dispatch_ordering: DispatchOrdering::default(),
        }
    }
}

impl Config {
    /// Load configuration from `<base>/config.json`, falling back to defaults,
    /// then apply environment overrides.
    pub fn load(paths: &Paths) -> CoreResult<Self> {
        let config_path = paths.config_file();

        let mut config = if config_path.exists() {
            Self::load_from_file(&config_path)?
        } else {
            Self::default()
        };

        config.load_from_env();
        config.validate()?;

        Ok(config)
    }

    /// Load configuration from a specific file.
    pub fn load_from_file(path: &Path) -> CoreResult<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Config = serde_json::from_str(&content)?;
        Ok(config)
    }

    fn load_from_env(&mut self) {
        if let Some(url) = non_empty_env("CONTACT_KEEPER_API_URL") {
            self.api_base_url = url;
        }
        if let Some(level) = non_empty_env("CONTACT_KEEPER_LOG_LEVEL") {
            self.log_level = level;
        }
    }

    /// Reject settings the transport cannot work with.
    pub fn validate(&self) -> CoreResult<()> {
        self.api_base_url()?;
        if self.request_timeout_secs == 0 {
            return Err(CoreError::Config(
                "request_timeout_secs must be greater than zero".to_string(),
            ));
        }
        Ok(())
    }

    /// Get the API base URL as a parsed URL.
    pub fn api_base_url(&self) -> CoreResult<Url> {
        Url::parse(&self.api_base_url).map_err(CoreError::from)
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    pub fn alert_timeout(&self) -> Duration {
        Duration::from_millis(self.alert_timeout_ms)
    }
}

fn non_empty_env(name: &str) -> Option<String> {
    std::env::var(name)
        .ok()
        .map(|raw| raw.trim().to_string())
        .filter(|value| !value.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.log_level, DEFAULT_LOG_LEVEL);
        assert_eq!(config.api_base_url, DEFAULT_API_BASE_URL);
        assert_eq!(config.endpoints.contacts, "/api/contacts");
        assert_eq!(config.endpoints.current_user, "/api/auth");
        assert_eq!(config.endpoints.login, "/api/auth");
        assert_eq!(config.endpoints.register, "/api/users");
        assert_eq!(config.dispatch_ordering, DispatchOrdering::LastDispatchWins);
        assert_eq!(config.request_timeout(), Duration::from_secs(30));
        assert_eq!(config.alert_timeout(), Duration::from_millis(5000));
    }

    #[test]
    fn test_config_load_from_file_partial() {
        let dir = tempdir().unwrap();
        let config_path = dir.path().join("config.json");

        let config_json = r#"{
            "log_level": "debug",
            "endpoints": { "contacts": "/v2/contacts" },
            "dispatch_ordering": "latest_call_wins"
        }"#;
        std::fs::write(&config_path, config_json).unwrap();

        let config = Config::load_from_file(&config_path).unwrap();
        assert_eq!(config.log_level, "debug");
        assert_eq!(config.endpoints.contacts, "/v2/contacts");
        assert_eq!(config.endpoints.login, "/api/auth");
        assert_eq!(config.api_base_url, DEFAULT_API_BASE_URL);
        assert_eq!(config.dispatch_ordering, DispatchOrdering::LatestCallWins);
    }

    #[test]
    fn test_config_load_nonexistent_uses_defaults() {
        let dir = tempdir().unwrap();
        let paths = Paths::with_base_dir(dir.path().to_path_buf());

        let config = Config::load(&paths).unwrap();
        assert_eq!(config.endpoints, Endpoints::default());
    }

    #[test]
    fn test_config_invalid_url() {
        let mut config = Config::default();
        config.api_base_url = "not a valid url".to_string();

        assert!(config.api_base_url().is_err());
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_config_zero_timeout_rejected() {
        let mut config = Config::default();
        config.request_timeout_secs = 0;

        assert!(matches!(config.validate(), Err(CoreError::Config(_))));
    }

    #[test]
    fn test_contact_endpoint() {
        let endpoints = Endpoints::default();
        assert_eq!(endpoints.contact("42"), "/api/contacts/42");

        let trailing = Endpoints {
            contacts: "/api/contacts/".to_string(),
            ..Endpoints::default()
        };
        assert_eq!(trailing.contact("42"), "/api/contacts/42");
    }
}
