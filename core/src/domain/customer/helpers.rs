use chrono::NaiveDate;

use crate::domain::customer::{
    entities::{Customer, CustomerView},
    value_objects::GetCustomersFilter,
};

/// Attach the current status to every device. Runs on every read.
pub fn project_customers(customers: &[Customer], today: NaiveDate) -> Vec<CustomerView> {
    customers
        .iter()
        .map(|customer| CustomerView::project(customer, today))
        .collect()
}

/// Free-text match: name, device name and serial are compared
/// case-insensitively, the phone number is matched on the raw query.
pub fn matches_query(customer: &CustomerView, query: &str) -> bool {
    let lower_query = query.to_lowercase();

    let has_matching_device = customer.devices.iter().any(|device| {
        device.name.to_lowercase().contains(&lower_query)
            || device.serial_number.to_lowercase().contains(&lower_query)
    });

    customer.name.to_lowercase().contains(&lower_query)
        || customer
            .phone
            .as_deref()
            .is_some_and(|phone| phone.contains(query))
        || has_matching_device
}

/// Conjunction of the text and status filters, preserving input order.
pub fn filter_customers(
    customers: Vec<CustomerView>,
    filter: &GetCustomersFilter,
) -> Vec<CustomerView> {
    customers
        .into_iter()
        .filter(|customer| matches_query(customer, &filter.query))
        .filter(|customer| filter.status.matches(customer))
        .collect()
}
