use std::sync::{
    Arc,
    atomic::{AtomicBool, Ordering},
};

use serde::Deserialize;
use serde_json::Value;
use tokio::sync::RwLock;
use tracing::{error, warn};

use crate::domain::{
    common::entities::app_errors::CoreError,
    customer::{entities::Customer, ports::CustomerRepository},
    storage::{ports::KeyValueStore, value_objects::CUSTOMERS_KEY},
};
use crate::infrastructure::customer::mappers::StoredCustomer;

/// Customer collection stored as one JSON array under [`CUSTOMERS_KEY`].
///
/// The last loaded or saved collection is mirrored in memory. When the
/// backend fails, reads are served from that mirror and writes only update
/// it, so callers never see storage errors.
///
/// Stored records that do not decode are skipped on read and written back
/// verbatim on every save. Once a read fails or the stored value is not a
/// JSON array, nothing is written for the rest of the process lifetime.
#[derive(Debug, Clone)]
pub struct KvCustomerRepository<S> {
    store: S,
    mirror: Arc<RwLock<Vec<Customer>>>,
    rejected: Arc<RwLock<Vec<Value>>>,
    writable: Arc<AtomicBool>,
}

impl<S: KeyValueStore> KvCustomerRepository<S> {
    pub fn new(store: S) -> Self {
        Self {
            store,
            mirror: Arc::new(RwLock::new(Vec::new())),
            rejected: Arc::new(RwLock::new(Vec::new())),
            writable: Arc::new(AtomicBool::new(true)),
        }
    }

    async fn fall_back(&self) -> Vec<Customer> {
        if self.writable.swap(false, Ordering::SeqCst) {
            warn!("Customer persistence disabled until restart, changes stay in memory");
        }
        self.mirror.read().await.clone()
    }
}

#[derive(Debug, Default)]
struct DecodedCustomers {
    customers: Vec<Customer>,
    rejected: Vec<Value>,
}

fn decode_record(record: &Value) -> Result<Customer, String> {
    let stored = StoredCustomer::deserialize(record).map_err(|e| e.to_string())?;
    Customer::try_from(stored).map_err(|e| e.to_string())
}

fn decode_customers(raw: &str) -> Result<DecodedCustomers, serde_json::Error> {
    let records: Vec<Value> = serde_json::from_str(raw)?;

    let mut decoded = DecodedCustomers::default();
    for record in records {
        match decode_record(&record) {
            Ok(customer) => decoded.customers.push(customer),
            Err(reason) => {
                let id = record.get("id").and_then(Value::as_str).unwrap_or("<missing>");
                warn!(customer_id = %id, "Skipping invalid stored customer: {}", reason);
                decoded.rejected.push(record);
            }
        }
    }

    Ok(decoded)
}

impl<S: KeyValueStore> CustomerRepository for KvCustomerRepository<S> {
    async fn is_blank(&self) -> Result<bool, CoreError> {
        match self.store.get(CUSTOMERS_KEY).await {
            Ok(None) => Ok(true),
            Ok(Some(raw)) => Ok(matches!(
                serde_json::from_str::<Vec<Value>>(&raw),
                Ok(records) if records.is_empty()
            )),
            Err(e) => {
                warn!("Customer storage unavailable, treating it as populated: {}", e);
                Ok(false)
            }
        }
    }

    async fn load(&self) -> Result<Vec<Customer>, CoreError> {
        let raw = match self.store.get(CUSTOMERS_KEY).await {
            Ok(Some(raw)) => raw,
            Ok(None) => return Ok(self.mirror.read().await.clone()),
            Err(e) => {
                warn!("Customer storage unavailable, serving in-memory copy: {}", e);
                return Ok(self.fall_back().await);
            }
        };

        match decode_customers(&raw) {
            Ok(decoded) => {
                *self.mirror.write().await = decoded.customers.clone();
                *self.rejected.write().await = decoded.rejected;
                Ok(decoded.customers)
            }
            Err(e) => {
                warn!("Stored customers are unreadable, serving in-memory copy: {}", e);
                Ok(self.fall_back().await)
            }
        }
    }

    async fn save(&self, customers: Vec<Customer>) -> Result<(), CoreError> {
        let mut records = customers
            .iter()
            .map(|customer| serde_json::to_value(StoredCustomer::from(customer)))
            .collect::<Result<Vec<Value>, _>>()
            .map_err(|e| {
                error!("Failed to serialize customers: {}", e);
                CoreError::InternalServerError
            })?;
        records.extend(self.rejected.read().await.iter().cloned());

        let raw = serde_json::to_string(&records).map_err(|e| {
            error!("Failed to serialize customers: {}", e);
            CoreError::InternalServerError
        })?;

        *self.mirror.write().await = customers;

        if !self.writable.load(Ordering::SeqCst) {
            warn!("Customer persistence disabled, keeping changes in memory only");
            return Ok(());
        }

        if let Err(e) = self.store.set(CUSTOMERS_KEY, raw).await {
            warn!("Customer storage unavailable, keeping changes in memory only: {}", e);
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;
    use crate::domain::{
        customer::seed::sample_customers,
        storage::errors::StorageError,
    };
    use crate::infrastructure::storage::{FileKeyValueStore, InMemoryKeyValueStore};

    struct UnavailableStore;

    impl KeyValueStore for UnavailableStore {
        async fn get(&self, _key: &str) -> Result<Option<String>, StorageError> {
            Err(StorageError::Unavailable("disabled".to_string()))
        }

        async fn set(&self, _key: &str, _value: String) -> Result<(), StorageError> {
            Err(StorageError::Unavailable("disabled".to_string()))
        }
    }

    fn samples() -> Vec<Customer> {
        sample_customers(NaiveDate::from_ymd_opt(2025, 6, 1).unwrap()).unwrap()
    }

    #[tokio::test]
    async fn empty_store_loads_empty_collection() {
        let repository = KvCustomerRepository::new(InMemoryKeyValueStore::new());
        assert!(repository.load().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn save_then_load_round_trips() {
        let store = InMemoryKeyValueStore::new();
        let repository = KvCustomerRepository::new(store.clone());

        repository.save(samples()).await.unwrap();

        let reopened = KvCustomerRepository::new(store);
        assert_eq!(reopened.load().await.unwrap(), samples());
    }

    #[tokio::test]
    async fn round_trips_through_files() {
        let dir = tempfile::tempdir().unwrap();
        KvCustomerRepository::new(FileKeyValueStore::new(dir.path()))
            .save(samples())
            .await
            .unwrap();

        let reopened = KvCustomerRepository::new(FileKeyValueStore::new(dir.path()));
        assert_eq!(reopened.load().await.unwrap(), samples());
    }

    #[tokio::test]
    async fn unavailable_store_falls_back_to_memory() {
        let repository = KvCustomerRepository::new(UnavailableStore);

        assert!(repository.load().await.unwrap().is_empty());

        repository.save(samples()).await.unwrap();
        assert_eq!(repository.load().await.unwrap(), samples());
    }

    #[tokio::test]
    async fn unreadable_value_falls_back_to_memory_without_writing() {
        let store = InMemoryKeyValueStore::new();
        store
            .set(CUSTOMERS_KEY, "not json".to_string())
            .await
            .unwrap();

        let repository = KvCustomerRepository::new(store.clone());
        assert!(repository.load().await.unwrap().is_empty());
        assert!(!repository.is_blank().await.unwrap());

        repository.save(samples()).await.unwrap();

        assert_eq!(repository.load().await.unwrap(), samples());
        assert_eq!(
            store.get(CUSTOMERS_KEY).await.unwrap().as_deref(),
            Some("not json")
        );
    }

    #[tokio::test]
    async fn blank_only_when_absent_or_empty_array() {
        let store = InMemoryKeyValueStore::new();
        let repository = KvCustomerRepository::new(store.clone());
        assert!(repository.is_blank().await.unwrap());

        store.set(CUSTOMERS_KEY, "[]".to_string()).await.unwrap();
        assert!(repository.is_blank().await.unwrap());

        repository.save(samples()).await.unwrap();
        assert!(!repository.is_blank().await.unwrap());

        assert!(!KvCustomerRepository::new(UnavailableStore).is_blank().await.unwrap());
    }

    #[tokio::test]
    async fn record_with_bad_date_is_skipped_and_kept_on_save() {
        let store = InMemoryKeyValueStore::new();
        let raw = r#"[
            {"id": "x1", "name": "Khalid Abdullah", "devices": [
                {"id": "d1", "name": "Security Camera", "serialNumber": "SN55555",
                 "startDate": "2025-02-21", "endDate": "2026-02-21"}
            ]},
            {"id": "x2", "name": "Broken Dates", "devices": [
                {"id": "d2", "name": "Receiver", "serialNumber": "SN1",
                 "startDate": "2025-01-01", "endDate": "2025-13-01"}
            ]}
        ]"#;
        store.set(CUSTOMERS_KEY, raw.to_string()).await.unwrap();

        let repository = KvCustomerRepository::new(store.clone());
        let customers = repository.load().await.unwrap();
        assert_eq!(customers.len(), 1);
        assert_eq!(customers[0].id, "x1");

        repository.save(customers).await.unwrap();

        let written: Vec<Value> =
            serde_json::from_str(&store.get(CUSTOMERS_KEY).await.unwrap().unwrap()).unwrap();
        let ids: Vec<&str> = written.iter().filter_map(|r| r["id"].as_str()).collect();
        assert_eq!(ids, vec!["x1", "x2"]);
        assert_eq!(written[1]["devices"][0]["endDate"], "2025-13-01");
    }

    #[tokio::test]
    async fn invalid_records_are_skipped() {
        let store = InMemoryKeyValueStore::new();
        let raw = r#"[
            {"id": "bad", "name": "", "devices": []},
            {"id": "c3", "name": "Khalid Abdullah", "devices": [
                {"id": "d3-1", "name": "Security Camera", "serialNumber": "SN55555",
                 "startDate": "2025-02-21", "endDate": "2026-02-21"}
            ]}
        ]"#;
        store.set(CUSTOMERS_KEY, raw.to_string()).await.unwrap();

        let customers = KvCustomerRepository::new(store).load().await.unwrap();

        assert_eq!(customers.len(), 1);
        assert_eq!(customers[0].id, "c3");
    }
}
