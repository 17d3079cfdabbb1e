pub mod editor;
pub mod entities;
pub mod errors;
pub mod helpers;
pub mod ports;
pub mod seed;
pub mod services;
pub mod value_objects;

pub use editor::{CustomerDraft, DeviceDraft};
pub use entities::{Customer, CustomerView, Device, DeviceView};
pub use errors::{CustomerError, DeviceError};
pub use ports::{CustomerRepository, CustomerService};
