use serde::{Deserialize, Serialize};
use subtrack_core::domain::customer::{CustomerDraft, DeviceDraft};
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct DeviceValidator {
    /// Kept on edit so existing rows stay stable; generated when absent.
    #[serde(default)]
    pub id: Option<String>,

    #[validate(length(min = 1, message = "device name is required"))]
    pub name: String,

    #[validate(length(min = 1, message = "serial number is required"))]
    pub serial_number: String,

    /// `YYYY-MM-DD`
    #[validate(length(min = 1, message = "start date is required"))]
    pub start_date: String,

    /// `YYYY-MM-DD`
    #[validate(length(min = 1, message = "end date is required"))]
    pub end_date: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct CustomerValidator {
    #[validate(length(min = 1, message = "customer name is required"))]
    pub name: String,

    #[serde(default)]
    pub phone: Option<String>,

    #[serde(default)]
    pub email: Option<String>,

    #[validate(
        length(min = 1, message = "a customer must have at least one device"),
        nested
    )]
    pub devices: Vec<DeviceValidator>,
}

impl From<DeviceValidator> for DeviceDraft {
    fn from(value: DeviceValidator) -> Self {
        let mut draft = DeviceDraft::empty();
        if let Some(id) = value.id.filter(|id| !id.trim().is_empty()) {
            draft.id = id;
        }
        draft.name = value.name;
        draft.serial_number = value.serial_number;
        draft.start_date = value.start_date;
        draft.end_date = value.end_date;
        draft
    }
}

impl From<CustomerValidator> for CustomerDraft {
    fn from(value: CustomerValidator) -> Self {
        CustomerDraft {
            id: None,
            name: value.name,
            phone: value.phone.unwrap_or_default(),
            email: value.email.unwrap_or_default(),
            devices: value.devices.into_iter().map(DeviceDraft::from).collect(),
        }
    }
}
