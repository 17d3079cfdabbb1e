use std::future::Future;

use crate::domain::storage::errors::StorageError;

/// Durable string-keyed storage. Values are whole snapshots; there is no
/// partial update.
pub trait KeyValueStore: Send + Sync {
    fn get(
        &self,
        key: &str,
    ) -> impl Future<Output = Result<Option<String>, StorageError>> + Send;

    fn set(
        &self,
        key: &str,
        value: String,
    ) -> impl Future<Output = Result<(), StorageError>> + Send;
}
