use tracing::info;

use crate::domain::{
    common::{StorageBackendKind, StorageConfig},
    storage::{errors::StorageError, ports::KeyValueStore},
};
use crate::infrastructure::storage::{file::FileKeyValueStore, memory::InMemoryKeyValueStore};

/// Backend selected at start-up from configuration.
#[derive(Debug, Clone)]
pub enum KeyValueBackend {
    File(FileKeyValueStore),
    Memory(InMemoryKeyValueStore),
}

impl KeyValueBackend {
    pub fn from_config(config: &StorageConfig) -> Self {
        match config.backend {
            StorageBackendKind::File => {
                info!(data_dir = %config.data_dir.display(), "Using file storage backend");
                KeyValueBackend::File(FileKeyValueStore::new(config.data_dir.clone()))
            }
            StorageBackendKind::Memory => {
                info!("Using in-memory storage backend, nothing will be persisted");
                KeyValueBackend::Memory(InMemoryKeyValueStore::new())
            }
        }
    }
}

impl KeyValueStore for KeyValueBackend {
    async fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        match self {
            KeyValueBackend::File(store) => store.get(key).await,
            KeyValueBackend::Memory(store) => store.get(key).await,
        }
    }

    async fn set(&self, key: &str, value: String) -> Result<(), StorageError> {
        match self {
            KeyValueBackend::File(store) => store.set(key, value).await,
            KeyValueBackend::Memory(store) => store.set(key, value).await,
        }
    }
}
