use chrono::NaiveDate;

use crate::domain::subscription::entities::SubscriptionStatus;

/// Whole calendar days from `today` until `end_date`; negative once the end
/// date has passed.
pub fn days_remaining(end_date: NaiveDate, today: NaiveDate) -> i64 {
    (end_date - today).num_days()
}

pub fn derive_status(end_date: NaiveDate, today: NaiveDate) -> SubscriptionStatus {
    let diff_days = days_remaining(end_date, today);

    if diff_days < 0 {
        SubscriptionStatus::Expired
    } else if diff_days <= SubscriptionStatus::EXPIRING_SOON_WINDOW_DAYS {
        SubscriptionStatus::ExpiringSoon
    } else {
        SubscriptionStatus::Active
    }
}
