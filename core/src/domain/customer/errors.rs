use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DeviceError {
    #[error("device name is required")]
    EmptyName,

    #[error("serial number is required")]
    EmptySerialNumber,

    #[error("start date is required")]
    MissingStartDate,

    #[error("end date is required")]
    MissingEndDate,

    #[error("invalid date `{value}`, expected YYYY-MM-DD")]
    InvalidDate { value: String },
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CustomerError {
    #[error("customer name is required")]
    EmptyName,

    #[error("a customer must have at least one device")]
    NoDevices,

    #[error("device #{index}: {source}")]
    Device {
        index: usize,
        #[source]
        source: DeviceError,
    },

    #[error("duplicate device id `{id}`")]
    DuplicateDeviceId { id: String },
}
