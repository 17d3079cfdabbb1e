use std::io::ErrorKind;
use std::path::PathBuf;

use tokio::fs;
use tracing::{debug, error};

use crate::domain::storage::{errors::StorageError, ports::KeyValueStore};

/// Stores each key as `<key>.json` under a data directory. Writes go to a
/// temporary file first and are renamed into place.
#[derive(Debug, Clone)]
pub struct FileKeyValueStore {
    root: PathBuf,
}

impl FileKeyValueStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    fn path_for(&self, key: &str) -> Result<PathBuf, StorageError> {
        let valid = !key.is_empty()
            && key
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-');
        if !valid {
            return Err(StorageError::InvalidKey(key.to_string()));
        }

        Ok(self.root.join(format!("{key}.json")))
    }
}

impl KeyValueStore for FileKeyValueStore {
    async fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        let path = self.path_for(key)?;

        match fs::read_to_string(&path).await {
            Ok(value) => Ok(Some(value)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => {
                error!("Failed to read {}: {}", path.display(), e);
                Err(StorageError::Io(e.to_string()))
            }
        }
    }

    async fn set(&self, key: &str, value: String) -> Result<(), StorageError> {
        let path = self.path_for(key)?;
        let tmp_path = path.with_extension("json.tmp");

        fs::create_dir_all(&self.root).await.map_err(|e| {
            error!("Failed to create data directory {}: {}", self.root.display(), e);
            StorageError::Unavailable(e.to_string())
        })?;

        fs::write(&tmp_path, value.as_bytes()).await.map_err(|e| {
            error!("Failed to write {}: {}", tmp_path.display(), e);
            StorageError::Io(e.to_string())
        })?;

        fs::rename(&tmp_path, &path).await.map_err(|e| {
            error!("Failed to move {} into place: {}", path.display(), e);
            StorageError::Io(e.to_string())
        })?;

        debug!(key, bytes = value.len(), "Value written");

        Ok(())
    }
}
