use std::collections::HashSet;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::{
    customer::errors::{CustomerError, DeviceError},
    subscription::{SubscriptionStatus, days_remaining, derive_status},
};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Device {
    pub id: String,
    pub name: String,
    pub serial_number: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
}

impl Device {
    pub fn new(
        id: String,
        name: String,
        serial_number: String,
        start_date: NaiveDate,
        end_date: NaiveDate,
    ) -> Result<Self, DeviceError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(DeviceError::EmptyName);
        }

        let serial_number = serial_number.trim();
        if serial_number.is_empty() {
            return Err(DeviceError::EmptySerialNumber);
        }

        Ok(Self {
            id,
            name: name.to_string(),
            serial_number: serial_number.to_string(),
            start_date,
            end_date,
        })
    }

    pub fn status(&self, today: NaiveDate) -> SubscriptionStatus {
        derive_status(self.end_date, today)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Customer {
    pub id: String,
    pub name: String,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub devices: Vec<Device>,
}

impl Customer {
    /// Builds a customer, enforcing a non-blank name and at least one device.
    /// Blank phone and email are stored as `None`.
    pub fn new(
        id: String,
        name: String,
        phone: Option<String>,
        email: Option<String>,
        devices: Vec<Device>,
    ) -> Result<Self, CustomerError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(CustomerError::EmptyName);
        }

        if devices.is_empty() {
            return Err(CustomerError::NoDevices);
        }

        let mut seen = HashSet::new();
        for device in &devices {
            if !seen.insert(device.id.as_str()) {
                return Err(CustomerError::DuplicateDeviceId {
                    id: device.id.clone(),
                });
            }
        }

        Ok(Self {
            id,
            name: name.to_string(),
            phone: normalize_optional(phone),
            email: normalize_optional(email),
            devices,
        })
    }
}

fn normalize_optional(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

/// A device together with its status as of a given day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct DeviceView {
    pub id: String,
    pub name: String,
    pub serial_number: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub status: SubscriptionStatus,
    pub days_remaining: i64,
}

impl DeviceView {
    pub fn project(device: &Device, today: NaiveDate) -> Self {
        Self {
            id: device.id.clone(),
            name: device.name.clone(),
            serial_number: device.serial_number.clone(),
            start_date: device.start_date,
            end_date: device.end_date,
            status: device.status(today),
            days_remaining: days_remaining(device.end_date, today),
        }
    }
}

/// Read-side projection of a customer. Statuses are computed at projection
/// time and never written back.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct CustomerView {
    pub id: String,
    pub name: String,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub devices: Vec<DeviceView>,
}

impl CustomerView {
    pub fn project(customer: &Customer, today: NaiveDate) -> Self {
        Self {
            id: customer.id.clone(),
            name: customer.name.clone(),
            phone: customer.phone.clone(),
            email: customer.email.clone(),
            devices: customer
                .devices
                .iter()
                .map(|device| DeviceView::project(device, today))
                .collect(),
        }
    }

    pub fn has_device_with_status(&self, status: SubscriptionStatus) -> bool {
        self.devices.iter().any(|device| device.status == status)
    }
}
