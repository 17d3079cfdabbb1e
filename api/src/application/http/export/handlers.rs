pub mod export_subscriptions;
