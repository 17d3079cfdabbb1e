use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Aggregate counters shown above the customer list. Status counts are per
/// device, not per customer.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct DashboardStats {
    pub total_customers: usize,
    pub active: usize,
    pub expiring_soon: usize,
    pub expired: usize,
}
