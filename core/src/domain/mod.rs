pub mod common;
pub mod customer;
pub mod dashboard;
pub mod export;
pub mod preferences;
pub mod storage;
pub mod subscription;
