pub mod customer;
pub mod preferences;
pub mod storage;
