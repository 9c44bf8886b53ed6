//! File-backed storage: a flat JSON object of string values.

use crate::{KeyValueStorage, StorageError, StorageResult};
use parking_lot::Mutex;
use serde_json::{Map, Value};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Storage persisted to a single JSON file.
///
/// The whole map is rewritten on every mutation through a sibling
/// temporary file and a rename, so a crash never leaves a torn file.
#[derive(Debug)]
pub struct FileStorage {
    path: PathBuf,
    data: Mutex<Map<String, Value>>,
}

impl FileStorage {
    /// Open the storage file, treating a missing file as empty.
    pub fn open(path: &Path) -> StorageResult<Self> {
        let data = match std::fs::read_to_string(path) {
            Ok(content) if content.trim().is_empty() => Map::new(),
            Ok(content) => match serde_json::from_str::<Value>(&content) {
                Ok(Value::Object(map)) => map,
                Ok(_) => {
                    return Err(StorageError::Encoding(format!(
                        "{} does not contain a JSON object",
                        path.display()
                    )))
                }
                Err(e) => return Err(StorageError::Encoding(e.to_string())),
            },
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Map::new(),
            Err(e) => return Err(e.into()),
        };

        debug!(path = %path.display(), entries = data.len(), "Opened file storage");

        Ok(Self {
            path: path.to_path_buf(),
            data: Mutex::new(data),
        })
    }

    fn persist(&self, data: &Map<String, Value>) -> StorageResult<()> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(data)
            .map_err(|e| StorageError::Encoding(e.to_string()))?;
        let tmp_path = self.path.with_extension("json.tmp");
        std::fs::write(&tmp_path, content)?;

        // The file holds the bearer token: owner read/write only.
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            std::fs::set_permissions(&tmp_path, std::fs::Permissions::from_mode(0o600))?;
        }

        std::fs::rename(&tmp_path, &self.path)?;
        Ok(())
    }
}

impl KeyValueStorage for FileStorage {
    fn set(&self, key: &str, value: &str) -> StorageResult<()> {
        let mut data = self.data.lock();
        let mut next = data.clone();
        next.insert(key.to_string(), Value::String(value.to_string()));
        self.persist(&next)?;
        *data = next;
        Ok(())
    }

    fn get(&self, key: &str) -> StorageResult<Option<String>> {
        let data = self.data.lock();
        Ok(data.get(key).and_then(|v| v.as_str()).map(str::to_string))
    }

    fn delete(&self, key: &str) -> StorageResult<bool> {
        let mut data = self.data.lock();
        if !data.contains_key(key) {
            return Ok(false);
        }
        let mut next = data.clone();
        next.remove(key);
        self.persist(&next)?;
        *data = next;
        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_missing_file_is_empty() {
        let dir = tempdir().unwrap();
        let storage = FileStorage::open(&dir.path().join("absent.json")).unwrap();

        assert_eq!(storage.get("token").unwrap(), None);
        assert!(!storage.delete("token").unwrap());
        assert!(!dir.path().join("absent.json").exists());
    }

    #[test]
    fn test_set_writes_json_object() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nested").join("storage.json");
        let storage = FileStorage::open(&path).unwrap();

        storage.set("token", "abc").unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        let value: Value = serde_json::from_str(&content).unwrap();
        assert_eq!(value["token"], "abc");
        assert!(!path.with_extension("json.tmp").exists());
    }

    #[cfg(unix)]
    #[test]
    fn test_storage_file_is_owner_only() {
        use std::os::unix::fs::PermissionsExt;

        let dir = tempdir().unwrap();
        let path = dir.path().join("storage.json");
        let storage = FileStorage::open(&path).unwrap();
        storage.set("token", "secret").unwrap();

        let mode = std::fs::metadata(&path).unwrap().permissions().mode();
        assert_eq!(mode & 0o077, 0, "mode was {:o}", mode);
    }

    #[test]
    fn test_failed_write_keeps_memory_and_disk_in_step() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("storage.json");
        let storage = FileStorage::open(&path).unwrap();
        storage.set("token", "abc").unwrap();

        // A directory in place of the temp file makes the next write fail.
        std::fs::create_dir(path.with_extension("json.tmp")).unwrap();

        assert!(storage.set("token", "new").is_err());
        assert_eq!(storage.get("token").unwrap().as_deref(), Some("abc"));

        assert!(storage.delete("token").is_err());
        assert_eq!(storage.get("token").unwrap().as_deref(), Some("abc"));

        let reopened = FileStorage::open(&path).unwrap();
        assert_eq!(reopened.get("token").unwrap().as_deref(), Some("abc"));
    }

    #[test]
    fn test_delete_persists() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("storage.json");
        let storage = FileStorage::open(&path).unwrap();
        storage.set("token", "abc").unwrap();

        assert!(storage.delete("token").unwrap());

        let reopened = FileStorage::open(&path).unwrap();
        assert_eq!(reopened.get("token").unwrap(), None);
    }

    #[test]
    fn test_corrupt_file_is_encoding_error() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("storage.json");
        std::fs::write(&path, "not json").unwrap();

        assert!(matches!(
            FileStorage::open(&path),
            Err(StorageError::Encoding(_))
        ));
    }

    #[test]
    fn test_non_object_file_is_encoding_error() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("storage.json");
        std::fs::write(&path, "[1, 2]").unwrap();

        assert!(matches!(
            FileStorage::open(&path),
            Err(StorageError::Encoding(_))
        ));
    }
}
