//! Alert store with timed removal.

use crate::{Alert, AlertAction, AlertKind, AlertReducer};
use keeper_auth::AuthStore;
use keeper_contacts::ContactStore;
use keeper_store::Store;
use std::sync::Arc;
use std::time::Duration;
use tokio::runtime::Handle;
use tokio::sync::watch;
use tracing::{debug, warn};
use uuid::Uuid;

/// Visible alerts. Each one removes itself after `timeout`.
#[derive(Clone)]
pub struct AlertStore {
    store: Arc<Store<AlertReducer>>,
    timeout: Duration,
}

impl AlertStore {
    pub fn new(timeout: Duration) -> Self {
        Self {
            store: Arc::new(Store::new(Vec::new())),
            timeout,
        }
    }

    /// Show `message` and schedule its removal. Returns the alert id.
    ///
    /// Outside a tokio runtime the alert stays until removed explicitly.
    pub fn set_alert(&self, message: impl Into<String>, kind: AlertKind) -> Uuid {
        let alert = Alert {
            id: Uuid::new_v4(),
            message: message.into(),
            kind,
        };
        let id = alert.id;
        self.store.dispatch(AlertAction::SetAlert(alert));

        match Handle::try_current() {
            Ok(handle) => {
                let store = Arc::clone(&self.store);
                let timeout = self.timeout;
                handle.spawn(async move {
                    tokio::time::sleep(timeout).await;
                    store.dispatch(AlertAction::RemoveAlert(id));
                    debug!(alert_id = %id, "Alert expired");
                });
            }
            Err(_) => warn!(alert_id = %id, "No runtime; alert will not expire"),
        }

        id
    }

    /// Remove an alert now. Unknown ids are ignored.
    pub fn remove_alert(&self, id: Uuid) {
        self.store.dispatch(AlertAction::RemoveAlert(id));
    }

    /// Visible alerts, oldest first.
    pub fn alerts(&self) -> Vec<Alert> {
        self.store.snapshot()
    }

    pub fn subscribe(&self) -> watch::Receiver<Vec<Alert>> {
        self.store.subscribe()
    }
}

impl std::fmt::Debug for AlertStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AlertStore")
            .field("alerts", &self.store.snapshot().len())
            .field("timeout", &self.timeout)
            .finish()
    }
}

/// Raise the auth error as a danger alert and clear it from the session.
///
/// Returns the alert id when there was an error to show.
pub fn surface_auth_error(auth: &AuthStore, alerts: &AlertStore) -> Option<Uuid> {
    let message = auth.state().error?;
    let id = alerts.set_alert(message, AlertKind::Danger);
    auth.clear_errors();
    Some(id)
}

/// Raise the contact error as a danger alert. The error stays in the store.
pub fn surface_contact_error(contacts: &ContactStore, alerts: &AlertStore) -> Option<Uuid> {
    let message = contacts.state().error?;
    Some(alerts.set_alert(message, AlertKind::Danger))
}
