pub mod errors;
pub mod ports;
pub mod value_objects;

pub use errors::StorageError;
pub use ports::KeyValueStore;
