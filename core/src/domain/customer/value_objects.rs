use std::str::FromStr;

use crate::domain::{
    customer::{editor::CustomerDraft, entities::CustomerView},
    subscription::SubscriptionStatus,
};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum StatusFilter {
    #[default]
    All,
    Only(SubscriptionStatus),
}

impl StatusFilter {
    /// `All` always passes; a concrete status passes when at least one device
    /// currently has it.
    pub fn matches(&self, customer: &CustomerView) -> bool {
        match self {
            StatusFilter::All => true,
            StatusFilter::Only(status) => customer.has_device_with_status(*status),
        }
    }
}

impl FromStr for StatusFilter {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "" | "all" => Ok(StatusFilter::All),
            other => other.parse::<SubscriptionStatus>().map(StatusFilter::Only),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct GetCustomersFilter {
    pub query: String,
    pub status: StatusFilter,
}

pub struct GetCustomerInput {
    pub customer_id: String,
}

pub struct CreateCustomerInput {
    pub draft: CustomerDraft,
}

pub struct UpdateCustomerInput {
    pub customer_id: String,
    pub draft: CustomerDraft,
}

pub struct DeleteCustomerInput {
    pub customer_id: String,
    pub confirmed: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeleteOutcome {
    Deleted,
    Cancelled,
}
