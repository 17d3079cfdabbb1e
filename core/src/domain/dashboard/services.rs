use crate::domain::{
    common::{entities::app_errors::CoreError, ports::Clock, services::Service},
    customer::{entities::CustomerView, helpers::project_customers, ports::CustomerRepository},
    dashboard::{ports::DashboardService, value_objects::DashboardStats},
    preferences::ports::PreferenceRepository,
    subscription::SubscriptionStatus,
};

pub fn compute_dashboard(customers: &[CustomerView]) -> DashboardStats {
    let mut stats = DashboardStats {
        total_customers: customers.len(),
        ..DashboardStats::default()
    };

    for device in customers.iter().flat_map(|customer| &customer.devices) {
        match device.status {
            SubscriptionStatus::Active => stats.active += 1,
            SubscriptionStatus::ExpiringSoon => stats.expiring_soon += 1,
            SubscriptionStatus::Expired => stats.expired += 1,
        }
    }

    stats
}

impl<CR, PR, CL> DashboardService for Service<CR, PR, CL>
where
    CR: CustomerRepository,
    PR: PreferenceRepository,
    CL: Clock,
{
    async fn get_dashboard(&self) -> Result<DashboardStats, CoreError> {
        let customers = self.customer_repository.load().await?;
        let views = project_customers(&customers, self.clock.today());

        Ok(compute_dashboard(&views))
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;
    use crate::domain::{
        common::ports::MockClock,
        customer::{ports::CustomerService, seed::sample_customers},
    };
    use crate::infrastructure::{
        customer::KvCustomerRepository, preferences::KvPreferenceRepository,
        storage::InMemoryKeyValueStore,
    };

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 6, 1).unwrap()
    }

    #[test]
    fn counts_devices_by_status() {
        let views = project_customers(&sample_customers(today()).unwrap(), today());

        assert_eq!(
            compute_dashboard(&views),
            DashboardStats {
                total_customers: 3,
                active: 2,
                expiring_soon: 1,
                expired: 1,
            }
        );
    }

    #[test]
    fn empty_collection_has_zero_counters() {
        assert_eq!(compute_dashboard(&[]), DashboardStats::default());
    }

    #[tokio::test]
    async fn dashboard_reflects_stored_collection() {
        let store = InMemoryKeyValueStore::new();
        let mut clock = MockClock::new();
        clock.expect_today().return_const(today());
        let service = Service::new(
            KvCustomerRepository::new(store.clone()),
            KvPreferenceRepository::new(store),
            clock,
        );

        assert_eq!(service.get_dashboard().await.unwrap(), DashboardStats::default());

        service.seed_if_empty().await.unwrap();
        let stats = service.get_dashboard().await.unwrap();
        assert_eq!(stats.total_customers, 3);
        assert_eq!(stats.expiring_soon, 1);
    }
}
