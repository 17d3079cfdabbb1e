use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::customer::{
    entities::{Customer, Device},
    errors::CustomerError,
};

/// Persisted shape of a device. Field names follow the stored JSON layout;
/// status is never written.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoredDevice {
    pub id: String,
    pub name: String,
    pub serial_number: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoredCustomer {
    pub id: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default)]
    pub devices: Vec<StoredDevice>,
}

impl From<&Customer> for StoredCustomer {
    fn from(customer: &Customer) -> Self {
        StoredCustomer {
            id: customer.id.clone(),
            name: customer.name.clone(),
            phone: customer.phone.clone(),
            email: customer.email.clone(),
            devices: customer
                .devices
                .iter()
                .map(|device| StoredDevice {
                    id: device.id.clone(),
                    name: device.name.clone(),
                    serial_number: device.serial_number.clone(),
                    start_date: device.start_date,
                    end_date: device.end_date,
                })
                .collect(),
        }
    }
}

impl TryFrom<StoredCustomer> for Customer {
    type Error = CustomerError;

    fn try_from(stored: StoredCustomer) -> Result<Self, Self::Error> {
        let devices = stored
            .devices
            .into_iter()
            .enumerate()
            .map(|(index, device)| {
                Device::new(
                    device.id,
                    device.name,
                    device.serial_number,
                    device.start_date,
                    device.end_date,
                )
                .map_err(|source| CustomerError::Device { index, source })
            })
            .collect::<Result<Vec<Device>, CustomerError>>()?;

        Customer::new(stored.id, stored.name, stored.phone, stored.email, devices)
    }
}
