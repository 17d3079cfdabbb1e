use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::{
    common::generate_id,
    customer::{
        entities::{Customer, Device},
        errors::{CustomerError, DeviceError},
    },
};

const DATE_FORMAT: &str = "%Y-%m-%d";

/// One editable device row. Dates are kept as entered until validation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct DeviceDraft {
    pub id: String,
    pub name: String,
    pub serial_number: String,
    pub start_date: String,
    pub end_date: String,
}

impl DeviceDraft {
    pub fn empty() -> Self {
        Self {
            id: generate_id(),
            name: String::new(),
            serial_number: String::new(),
            start_date: String::new(),
            end_date: String::new(),
        }
    }

    pub fn from_device(device: &Device) -> Self {
        Self {
            id: device.id.clone(),
            name: device.name.clone(),
            serial_number: device.serial_number.clone(),
            start_date: device.start_date.format(DATE_FORMAT).to_string(),
            end_date: device.end_date.format(DATE_FORMAT).to_string(),
        }
    }

    fn build(self) -> Result<Device, DeviceError> {
        if self.name.trim().is_empty() {
            return Err(DeviceError::EmptyName);
        }
        if self.serial_number.trim().is_empty() {
            return Err(DeviceError::EmptySerialNumber);
        }

        let start_date = parse_date(&self.start_date, DeviceError::MissingStartDate)?;
        let end_date = parse_date(&self.end_date, DeviceError::MissingEndDate)?;

        Device::new(
            self.id,
            self.name,
            self.serial_number,
            start_date,
            end_date,
        )
    }
}

fn parse_date(value: &str, missing: DeviceError) -> Result<NaiveDate, DeviceError> {
    let value = value.trim();
    if value.is_empty() {
        return Err(missing);
    }

    NaiveDate::parse_from_str(value, DATE_FORMAT).map_err(|_| DeviceError::InvalidDate {
        value: value.to_string(),
    })
}

/// Editable customer record backing the add and edit flows.
///
/// A draft always holds at least one device row: it starts with one and the
/// last row cannot be removed. Over HTTP the client owns row editing and
/// submits the whole draft, so the server only checks for at least one device.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct CustomerDraft {
    pub id: Option<String>,
    pub name: String,
    pub phone: String,
    pub email: String,
    pub devices: Vec<DeviceDraft>,
}

impl Default for CustomerDraft {
    fn default() -> Self {
        Self::new()
    }
}

impl CustomerDraft {
    pub fn new() -> Self {
        Self {
            id: None,
            name: String::new(),
            phone: String::new(),
            email: String::new(),
            devices: vec![DeviceDraft::empty()],
        }
    }

    pub fn from_customer(customer: &Customer) -> Self {
        Self {
            id: Some(customer.id.clone()),
            name: customer.name.clone(),
            phone: customer.phone.clone().unwrap_or_default(),
            email: customer.email.clone().unwrap_or_default(),
            devices: customer.devices.iter().map(DeviceDraft::from_device).collect(),
        }
    }

    pub fn is_new(&self) -> bool {
        self.id.is_none()
    }

    pub fn add_device(&mut self) -> &mut DeviceDraft {
        self.devices.push(DeviceDraft::empty());
        let last = self.devices.len() - 1;
        &mut self.devices[last]
    }

    /// Removes the row at `index`. Returns `false` and leaves the draft
    /// untouched when it is the last remaining row or out of range.
    pub fn remove_device(&mut self, index: usize) -> bool {
        if self.devices.len() <= 1 || index >= self.devices.len() {
            return false;
        }

        self.devices.remove(index);
        true
    }

    pub fn validate(&self) -> Result<(), CustomerError> {
        self.clone().build().map(|_| ())
    }

    /// Validates the draft and turns it into a customer record, keeping the
    /// existing id on edit and generating a fresh one for a new customer.
    pub fn build(self) -> Result<Customer, CustomerError> {
        if self.name.trim().is_empty() {
            return Err(CustomerError::EmptyName);
        }
        if self.devices.is_empty() {
            return Err(CustomerError::NoDevices);
        }

        let devices = self
            .devices
            .into_iter()
            .enumerate()
            .map(|(index, draft)| {
                draft
                    .build()
                    .map_err(|source| CustomerError::Device { index, source })
            })
            .collect::<Result<Vec<Device>, CustomerError>>()?;

        let id = self.id.unwrap_or_else(generate_id);

        Customer::new(id, self.name, Some(self.phone), Some(self.email), devices)
    }
}
