use tracing::info;

use crate::{
    domain::{
        common::{
            SubtrackConfig, entities::app_errors::CoreError, ports::SystemClock, services::Service,
        },
        customer::ports::CustomerService,
    },
    infrastructure::{
        customer::KvCustomerRepository, preferences::KvPreferenceRepository,
        storage::KeyValueBackend,
    },
};

pub type SubtrackService = Service<
    KvCustomerRepository<KeyValueBackend>,
    KvPreferenceRepository<KeyValueBackend>,
    SystemClock,
>;

/// Wires the repositories onto the configured backend and seeds an empty
/// store with the sample customers.
pub async fn create_service(config: SubtrackConfig) -> Result<SubtrackService, CoreError> {
    let store = KeyValueBackend::from_config(&config.storage);

    let service = Service::new(
        KvCustomerRepository::new(store.clone()),
        KvPreferenceRepository::new(store),
        SystemClock,
    );

    if service.seed_if_empty().await? {
        info!("Sample customers written to empty store");
    }

    Ok(service)
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use super::*;
    use crate::domain::{
        common::{StorageBackendKind, StorageConfig},
        customer::value_objects::GetCustomersFilter,
    };

    #[tokio::test]
    async fn memory_service_starts_seeded() {
        let service = create_service(SubtrackConfig {
            storage: StorageConfig {
                backend: StorageBackendKind::Memory,
                data_dir: PathBuf::from("unused"),
            },
        })
        .await
        .unwrap();

        let customers = service
            .get_customers(GetCustomersFilter::default())
            .await
            .unwrap();
        assert_eq!(customers.len(), 3);
    }

    #[tokio::test]
    async fn file_service_keeps_data_between_starts() {
        let dir = tempfile::tempdir().unwrap();
        let config = SubtrackConfig {
            storage: StorageConfig {
                backend: StorageBackendKind::File,
                data_dir: dir.path().to_path_buf(),
            },
        };

        let first = create_service(config.clone()).await.unwrap();
        let ahmed = crate::domain::customer::value_objects::DeleteCustomerInput {
            customer_id: "c1".to_string(),
            confirmed: true,
        };
        first.delete_customer(ahmed).await.unwrap();

        let second = create_service(config).await.unwrap();
        let ids: Vec<String> = second
            .get_customers(GetCustomersFilter::default())
            .await
            .unwrap()
            .into_iter()
            .map(|c| c.id)
            .collect();

        assert_eq!(ids, vec!["c2".to_string(), "c3".to_string()]);
    }

    #[tokio::test]
    async fn start_up_keeps_stored_customers_next_to_a_bad_record() {
        let dir = tempfile::tempdir().unwrap();
        let data_file = dir.path().join("customers.json");
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
        std::fs::write(&data_file, raw).unwrap();

        let service = create_service(SubtrackConfig {
            storage: StorageConfig {
                backend: StorageBackendKind::File,
                data_dir: dir.path().to_path_buf(),
            },
        })
        .await
        .unwrap();

        let ids: Vec<String> = service
            .get_customers(GetCustomersFilter::default())
            .await
            .unwrap()
            .into_iter()
            .map(|c| c.id)
            .collect();
        assert_eq!(ids, vec!["x1".to_string()]);

        let on_disk = std::fs::read_to_string(&data_file).unwrap();
        assert!(on_disk.contains("\"x1\""));
        assert!(on_disk.contains("\"x2\""));
        assert!(!on_disk.contains("\"c1\""));
    }

    #[tokio::test]
    async fn start_up_never_seeds_over_unreadable_data() {
        let dir = tempfile::tempdir().unwrap();
        let data_file = dir.path().join("customers.json");
        std::fs::write(&data_file, "{ truncated").unwrap();

        let service = create_service(SubtrackConfig {
            storage: StorageConfig {
                backend: StorageBackendKind::File,
                data_dir: dir.path().to_path_buf(),
            },
        })
        .await
        .unwrap();

        assert!(
            service
                .get_customers(GetCustomersFilter::default())
                .await
                .unwrap()
                .is_empty()
        );
        assert_eq!(std::fs::read_to_string(&data_file).unwrap(), "{ truncated");
    }
}
