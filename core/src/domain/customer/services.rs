use tracing::{info, instrument};

use crate::domain::{
    common::{entities::app_errors::CoreError, ports::Clock, services::Service},
    customer::{
        editor::CustomerDraft,
        entities::CustomerView,
        helpers::{filter_customers, project_customers},
        ports::{CustomerRepository, CustomerService},
        seed::sample_customers,
        value_objects::{
            CreateCustomerInput, DeleteCustomerInput, DeleteOutcome, GetCustomerInput,
            GetCustomersFilter, UpdateCustomerInput,
        },
    },
    preferences::ports::PreferenceRepository,
};

impl<CR, PR, CL> CustomerService for Service<CR, PR, CL>
where
    CR: CustomerRepository,
    PR: PreferenceRepository,
    CL: Clock,
{
    #[instrument(skip(self))]
    async fn seed_if_empty(&self) -> Result<bool, CoreError> {
        let _guard = self.write_lock.lock().await;

        if !self.customer_repository.is_blank().await? {
            return Ok(false);
        }

        let samples = sample_customers(self.clock.today())?;
        info!(count = samples.len(), "Seeding empty store with sample customers");
        self.customer_repository.save(samples).await?;

        Ok(true)
    }

    #[instrument(skip(self), fields(query = %filter.query, status = ?filter.status))]
    async fn get_customers(
        &self,
        filter: GetCustomersFilter,
    ) -> Result<Vec<CustomerView>, CoreError> {
        let customers = self.customer_repository.load().await?;
        let views = project_customers(&customers, self.clock.today());

        Ok(filter_customers(views, &filter))
    }

    async fn get_customer(&self, input: GetCustomerInput) -> Result<CustomerView, CoreError> {
        let customers = self.customer_repository.load().await?;

        customers
            .iter()
            .find(|customer| customer.id == input.customer_id)
            .map(|customer| CustomerView::project(customer, self.clock.today()))
            .ok_or(CoreError::NotFound)
    }

    async fn get_customer_draft(
        &self,
        input: GetCustomerInput,
    ) -> Result<CustomerDraft, CoreError> {
        let customers = self.customer_repository.load().await?;

        customers
            .iter()
            .find(|customer| customer.id == input.customer_id)
            .map(CustomerDraft::from_customer)
            .ok_or(CoreError::NotFound)
    }

    #[instrument(skip(self, input))]
    async fn create_customer(
        &self,
        input: CreateCustomerInput,
    ) -> Result<CustomerView, CoreError> {
        let mut draft = input.draft;
        draft.id = None;
        let customer = draft.build()?;

        let _guard = self.write_lock.lock().await;
        let mut customers = self.customer_repository.load().await?;
        customers.push(customer.clone());
        self.customer_repository.save(customers).await?;

        info!(customer_id = %customer.id, devices = customer.devices.len(), "Customer created");

        Ok(CustomerView::project(&customer, self.clock.today()))
    }

    #[instrument(skip(self, input), fields(customer_id = %input.customer_id))]
    async fn update_customer(
        &self,
        input: UpdateCustomerInput,
    ) -> Result<CustomerView, CoreError> {
        let mut draft = input.draft;
        draft.id = Some(input.customer_id.clone());
        let customer = draft.build()?;

        let _guard = self.write_lock.lock().await;
        let mut customers = self.customer_repository.load().await?;

        let slot = customers
            .iter_mut()
            .find(|existing| existing.id == input.customer_id)
            .ok_or(CoreError::NotFound)?;
        *slot = customer.clone();

        self.customer_repository.save(customers).await?;

        info!("Customer updated");

        Ok(CustomerView::project(&customer, self.clock.today()))
    }

    #[instrument(
        skip(self, input),
        fields(customer_id = %input.customer_id, confirmed = input.confirmed)
    )]
    async fn delete_customer(
        &self,
        input: DeleteCustomerInput,
    ) -> Result<DeleteOutcome, CoreError> {
        if !input.confirmed {
            info!("Customer deletion cancelled");
            return Ok(DeleteOutcome::Cancelled);
        }

        let _guard = self.write_lock.lock().await;
        let mut customers = self.customer_repository.load().await?;

        let before = customers.len();
        customers.retain(|customer| customer.id != input.customer_id);
        if customers.len() == before {
            return Err(CoreError::NotFound);
        }

        self.customer_repository.save(customers).await?;

        info!("Customer deleted");

        Ok(DeleteOutcome::Deleted)
    }
}

#[cfg(test)]
mod tests {
    use chrono::{Duration, NaiveDate};

    use super::*;
    use crate::domain::{
        common::ports::MockClock,
        customer::{
            editor::DeviceDraft,
            errors::CustomerError,
            value_objects::StatusFilter,
        },
        subscription::SubscriptionStatus,
    };
    use crate::infrastructure::{
        customer::KvCustomerRepository, preferences::KvPreferenceRepository,
        storage::InMemoryKeyValueStore,
    };

    type TestService = Service<
        KvCustomerRepository<InMemoryKeyValueStore>,
        KvPreferenceRepository<InMemoryKeyValueStore>,
        MockClock,
    >;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 6, 1).unwrap()
    }

    fn service() -> TestService {
        let store = InMemoryKeyValueStore::new();
        let mut clock = MockClock::new();
        clock.expect_today().return_const(today());

        Service::new(
            KvCustomerRepository::new(store.clone()),
            KvPreferenceRepository::new(store),
            clock,
        )
    }

    fn draft(name: &str, end_offset: i64) -> CustomerDraft {
        let fmt = |d: NaiveDate| d.format("%Y-%m-%d").to_string();
        CustomerDraft {
            id: None,
            name: name.to_string(),
            phone: String::new(),
            email: String::new(),
            devices: vec![DeviceDraft {
                id: format!("{name}-device"),
                name: "Receiver".to_string(),
                serial_number: format!("SN-{name}"),
                start_date: fmt(today() - Duration::days(200)),
                end_date: fmt(today() + Duration::days(end_offset)),
            }],
        }
    }

    async fn all(service: &TestService) -> Vec<CustomerView> {
        service
            .get_customers(GetCustomersFilter::default())
            .await
            .unwrap()
    }

    #[tokio::test]
    async fn seeds_only_an_empty_store() {
        let service = service();

        assert!(service.seed_if_empty().await.unwrap());
        assert_eq!(all(&service).await.len(), 3);

        assert!(!service.seed_if_empty().await.unwrap());
        assert_eq!(all(&service).await.len(), 3);
    }

    #[tokio::test]
    async fn created_customer_gets_status_on_read() {
        let service = service();

        let created = service
            .create_customer(CreateCustomerInput {
                draft: draft("Ahmed", 5),
            })
            .await
            .unwrap();

        assert!(!created.id.is_empty());
        assert_eq!(created.devices[0].status, SubscriptionStatus::ExpiringSoon);

        let expiring = service
            .get_customers(GetCustomersFilter {
                query: String::new(),
                status: StatusFilter::Only(SubscriptionStatus::ExpiringSoon),
            })
            .await
            .unwrap();
        assert_eq!(expiring, vec![created]);
    }

    #[tokio::test]
    async fn create_ignores_caller_supplied_id() {
        let service = service();
        let mut input = draft("Ahmed", 5);
        input.id = Some("c1".to_string());

        let created = service
            .create_customer(CreateCustomerInput { draft: input })
            .await
            .unwrap();

        assert_ne!(created.id, "c1");
    }

    #[tokio::test]
    async fn invalid_draft_is_rejected_without_writing() {
        let service = service();
        let mut input = draft("Ahmed", 5);
        input.devices[0].serial_number = String::new();

        let result = service
            .create_customer(CreateCustomerInput { draft: input })
            .await;

        assert!(matches!(
            result,
            Err(CoreError::Validation(CustomerError::Device { index: 0, .. }))
        ));
        assert!(all(&service).await.is_empty());
    }

    #[tokio::test]
    async fn update_replaces_whole_record_and_is_idempotent() {
        let service = service();
        let created = service
            .create_customer(CreateCustomerInput {
                draft: draft("Fatima", 40),
            })
            .await
            .unwrap();

        let replacement = draft("Fatima Al-Zahraa", -10);
        let input = || UpdateCustomerInput {
            customer_id: created.id.clone(),
            draft: replacement.clone(),
        };

        service.update_customer(input()).await.unwrap();
        let once = all(&service).await;
        service.update_customer(input()).await.unwrap();
        let twice = all(&service).await;

        assert_eq!(once, twice);
        assert_eq!(twice.len(), 1);
        assert_eq!(twice[0].id, created.id);
        assert_eq!(twice[0].name, "Fatima Al-Zahraa");
        assert_eq!(twice[0].devices[0].status, SubscriptionStatus::Expired);
    }

    #[tokio::test]
    async fn update_unknown_customer_is_not_found() {
        let service = service();

        let result = service
            .update_customer(UpdateCustomerInput {
                customer_id: "missing".to_string(),
                draft: draft("Nobody", 10),
            })
            .await;

        assert_eq!(result, Err(CoreError::NotFound));
    }

    #[tokio::test]
    async fn confirmed_delete_removes_only_that_customer() {
        let service = service();
        service.seed_if_empty().await.unwrap();

        let outcome = service
            .delete_customer(DeleteCustomerInput {
                customer_id: "c2".to_string(),
                confirmed: true,
            })
            .await
            .unwrap();

        assert_eq!(outcome, DeleteOutcome::Deleted);
        let ids: Vec<String> = all(&service).await.into_iter().map(|c| c.id).collect();
        assert_eq!(ids, vec!["c1".to_string(), "c3".to_string()]);
    }

    #[tokio::test]
    async fn cancelled_delete_leaves_collection_unchanged() {
        let service = service();
        service.seed_if_empty().await.unwrap();
        let before = all(&service).await;

        let outcome = service
            .delete_customer(DeleteCustomerInput {
                customer_id: "c2".to_string(),
                confirmed: false,
            })
            .await
            .unwrap();

        assert_eq!(outcome, DeleteOutcome::Cancelled);
        assert_eq!(all(&service).await, before);
    }

    #[tokio::test]
    async fn delete_unknown_customer_is_not_found() {
        let service = service();

        let result = service
            .delete_customer(DeleteCustomerInput {
                customer_id: "missing".to_string(),
                confirmed: true,
            })
            .await;

        assert_eq!(result, Err(CoreError::NotFound));
    }

    #[tokio::test]
    async fn every_stored_customer_keeps_a_device() {
        let service = service();
        service.seed_if_empty().await.unwrap();
        service
            .create_customer(CreateCustomerInput {
                draft: draft("Khalid", 100),
            })
            .await
            .unwrap();

        assert!(all(&service).await.iter().all(|c| !c.devices.is_empty()));
    }

    #[tokio::test]
    async fn get_customer_by_id() {
        let service = service();
        service.seed_if_empty().await.unwrap();

        let fatima = service
            .get_customer(GetCustomerInput {
                customer_id: "c2".to_string(),
            })
            .await
            .unwrap();
        assert_eq!(fatima.name, "Fatima Al-Zahraa");

        let missing = service
            .get_customer(GetCustomerInput {
                customer_id: "nope".to_string(),
            })
            .await;
        assert_eq!(missing, Err(CoreError::NotFound));
    }

    #[tokio::test]
    async fn draft_of_stored_customer_saves_back_unchanged() {
        let service = service();
        service.seed_if_empty().await.unwrap();
        let before = all(&service).await;

        let draft = service
            .get_customer_draft(GetCustomerInput {
                customer_id: "c1".to_string(),
            })
            .await
            .unwrap();
        assert_eq!(draft.devices.len(), 2);
        assert_eq!(draft.devices[1].serial_number, "SN12346");

        service
            .update_customer(UpdateCustomerInput {
                customer_id: "c1".to_string(),
                draft,
            })
            .await
            .unwrap();

        assert_eq!(all(&service).await, before);
    }
}
