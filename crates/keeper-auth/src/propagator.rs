//! Keeps the transport's bearer header and the persisted token in step.

use keeper_storage::TokenVault;
use keeper_transport::Transport;
use std::sync::Arc;
use tracing::{debug, warn};

/// Applies a session token to the shared transport and to storage.
#[derive(Clone)]
pub struct TokenPropagator {
    transport: Arc<dyn Transport>,
    vault: TokenVault,
}

impl TokenPropagator {
    pub fn new(transport: Arc<dyn Transport>, vault: TokenVault) -> Self {
        Self { transport, vault }
    }

    /// Attach `token` to every later request and persist it, or detach and
    /// delete it when `None`.
    ///
    /// Storage failures are logged; the in-memory session still changes.
    pub fn set_token(&self, token: Option<&str>) {
        self.transport.set_auth_token(token);
        let result = match token {
            Some(token) => self.vault.store(token),
            None => self.vault.clear(),
        };
        match result {
            Ok(()) => debug!(present = token.is_some(), "Propagated auth token"),
            Err(e) => warn!(error = %e, present = token.is_some(), "Failed to persist auth token"),
        }
    }

    /// Token found in persistent storage, if any.
    pub fn persisted(&self) -> Option<String> {
        match self.vault.token() {
            Ok(token) => token,
            Err(e) => {
                warn!(error = %e, "Failed to read persisted auth token");
                None
            }
        }
    }
}

impl std::fmt::Debug for TokenPropagator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TokenPropagator").finish_non_exhaustive()
    }
}
