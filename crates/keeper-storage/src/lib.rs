//! Persistent key-value storage for the Contact Keeper client.
//!
//! The auth token survives restarts through a [`KeyValueStorage`] backend:
//! - [`FileStorage`]: a JSON object file under the client's base directory
//! - [`MemoryStorage`]: process-local, for tests and ephemeral sessions
//!
//! [`TokenVault`] is the single-slot view the auth layer works with.

mod file;
mod keys;
mod memory;
mod traits;
mod vault;

pub use file::FileStorage;
pub use keys::StorageKeys;
pub use memory::MemoryStorage;
pub use traits::KeyValueStorage;
pub use vault::TokenVault;

use std::path::Path;
use std::sync::Arc;
use thiserror::Error;

/// Error type for storage operations.
#[derive(Error, Debug)]
pub enum StorageError {
    /// Stored data could not be decoded
    #[error("Encoding error: {0}")]
    Encoding(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for storage operations.
pub type StorageResult<T> = Result<T, StorageError>;

/// Open the default file-backed storage at `path`.
pub fn create_storage(path: &Path) -> StorageResult<Arc<dyn KeyValueStorage>> {
    let storage = FileStorage::open(path)?;
    Ok(Arc::new(storage))
}
