use std::future::Future;

use crate::domain::{
    common::entities::app_errors::CoreError,
    customer::{
        editor::CustomerDraft,
        entities::{Customer, CustomerView},
        value_objects::{
            CreateCustomerInput, DeleteCustomerInput, DeleteOutcome, GetCustomerInput,
            GetCustomersFilter, UpdateCustomerInput,
        },
    },
};

pub trait CustomerService: Send + Sync {
    /// Writes the sample records when the stored collection is empty.
    /// Returns whether seeding happened.
    fn seed_if_empty(&self) -> impl Future<Output = Result<bool, CoreError>> + Send;

    fn get_customers(
        &self,
        filter: GetCustomersFilter,
    ) -> impl Future<Output = Result<Vec<CustomerView>, CoreError>> + Send;

    fn get_customer(
        &self,
        input: GetCustomerInput,
    ) -> impl Future<Output = Result<CustomerView, CoreError>> + Send;

    /// Pre-fills an editor draft from a stored record.
    fn get_customer_draft(
        &self,
        input: GetCustomerInput,
    ) -> impl Future<Output = Result<CustomerDraft, CoreError>> + Send;

    fn create_customer(
        &self,
        input: CreateCustomerInput,
    ) -> impl Future<Output = Result<CustomerView, CoreError>> + Send;

    fn update_customer(
        &self,
        input: UpdateCustomerInput,
    ) -> impl Future<Output = Result<CustomerView, CoreError>> + Send;

    fn delete_customer(
        &self,
        input: DeleteCustomerInput,
    ) -> impl Future<Output = Result<DeleteOutcome, CoreError>> + Send;
}

/// Whole-collection persistence. There are no partial writes: `save`
/// replaces everything previously stored.
pub trait CustomerRepository: Send + Sync {
    /// True only when nothing was ever stored: the value is absent or an
    /// empty array. Unreadable or unreachable storage is never blank.
    fn is_blank(&self) -> impl Future<Output = Result<bool, CoreError>> + Send;

    fn load(&self) -> impl Future<Output = Result<Vec<Customer>, CoreError>> + Send;

    fn save(
        &self,
        customers: Vec<Customer>,
    ) -> impl Future<Output = Result<(), CoreError>> + Send;
}
