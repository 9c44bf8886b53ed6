//! Single-slot access to the persisted auth token.

use crate::{KeyValueStorage, StorageKeys, StorageResult};
use std::sync::Arc;

/// The persisted copy of the session's bearer token.
#[derive(Clone)]
pub struct TokenVault {
    storage: Arc<dyn KeyValueStorage>,
}

impl TokenVault {
    pub fn new(storage: Arc<dyn KeyValueStorage>) -> Self {
        Self { storage }
    }

    /// Read the persisted token, if any.
    pub fn token(&self) -> StorageResult<Option<String>> {
        self.storage.get(StorageKeys::AUTH_TOKEN)
    }

    /// Persist `token`, replacing any previous one.
    pub fn store(&self, token: &str) -> StorageResult<()> {
        self.storage.set(StorageKeys::AUTH_TOKEN, token)
    }

    /// Remove the persisted token. Succeeds when none is stored.
    pub fn clear(&self) -> StorageResult<()> {
        self.storage.delete(StorageKeys::AUTH_TOKEN)?;
        Ok(())
    }
}

impl std::fmt::Debug for TokenVault {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TokenVault").finish_non_exhaustive()
    }
}
