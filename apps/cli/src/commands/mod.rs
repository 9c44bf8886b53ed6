//! CLI command implementations.

mod auth;
mod contacts;

pub use auth::{login, logout, register, status};
pub use contacts::{
    contacts_add, contacts_delete, contacts_list, contacts_update, new_draft, ContactChanges,
};

use crate::output::{self, OutputFormat};
use anyhow::{anyhow, Result};
use keeper_alerts::{AlertKind, AlertStore};
use keeper_auth::AuthStore;
use keeper_config::{Config, Paths};
use keeper_contacts::ContactStore;
use keeper_storage::{create_storage, TokenVault};
use keeper_transport::HttpTransport;
use std::sync::Arc;
use tracing::debug;

/// The stores every command works against, sharing one transport.
pub struct App {
    pub auth: AuthStore,
    pub contacts: ContactStore,
    pub alerts: AlertStore,
}

impl App {
    pub fn new(config: &Config, paths: &Paths) -> Result<Self> {
        paths.ensure_dirs()?;
        let storage = create_storage(&paths.storage_file())?;
        let transport = Arc::new(HttpTransport::new(
            &config.api_base_url,
            config.request_timeout(),
        )?);

        debug!(api = %config.api_base_url, "Client initialized");

        Ok(Self {
            auth: AuthStore::new(
                transport.clone(),
                TokenVault::new(storage),
                config.endpoints.clone(),
                config.dispatch_ordering,
            ),
            contacts: ContactStore::new(
                transport,
                config.endpoints.clone(),
                config.dispatch_ordering,
            ),
            alerts: AlertStore::new(config.alert_timeout()),
        })
    }

    /// Check the session and refuse protected commands without one.
    async fn require_session(&self, format: &OutputFormat) -> Result<()> {
        let state = self.auth.load_user().await;
        if !state.can_access_protected() {
            self.alerts.set_alert("Please log in first", AlertKind::Danger);
        }
        self.drain_alerts(format)
    }

    /// Print and dismiss the visible alerts.
    ///
    /// Danger alerts are not printed here; the first one becomes the error.
    fn drain_alerts(&self, format: &OutputFormat) -> Result<()> {
        let mut failure = None;
        for alert in self.alerts.alerts() {
            self.alerts.remove_alert(alert.id);
            if alert.kind == AlertKind::Danger {
                failure.get_or_insert(alert.message);
            } else {
                output::print_alert(&alert, format);
            }
        }
        match failure {
            Some(message) => Err(anyhow!(message)),
            None => Ok(()),
        }
    }
}
