pub mod mappers;
pub mod repositories;

pub use repositories::kv_customer_repository::KvCustomerRepository;
