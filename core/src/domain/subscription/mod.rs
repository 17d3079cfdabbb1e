pub mod entities;
pub mod services;

pub use entities::SubscriptionStatus;
pub use services::{days_remaining, derive_status};
