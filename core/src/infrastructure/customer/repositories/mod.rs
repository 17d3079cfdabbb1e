pub mod kv_customer_repository;
