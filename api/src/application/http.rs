pub mod customer;
pub mod dashboard;
pub mod export;
pub mod health;
pub mod preferences;
pub mod server;
