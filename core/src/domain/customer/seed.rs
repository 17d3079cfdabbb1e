use chrono::{Duration, NaiveDate};

use crate::domain::customer::{
    entities::{Customer, Device},
    errors::CustomerError,
};

struct SampleDevice {
    id: &'static str,
    name: &'static str,
    serial_number: &'static str,
    start_offset: i64,
    end_offset: i64,
}

struct SampleCustomer {
    id: &'static str,
    name: &'static str,
    phone: &'static str,
    email: &'static str,
    devices: &'static [SampleDevice],
}

// Offsets are in days relative to the seeding day and cover every status.
const SAMPLE_CUSTOMERS: &[SampleCustomer] = &[
    SampleCustomer {
        id: "c1",
        name: "Ahmed Mahmoud",
        phone: "0501234567",
        email: "ahmed@example.com",
        devices: &[
            SampleDevice {
                id: "d1-1",
                name: "Receiver 1",
                serial_number: "SN12345",
                start_offset: -300,
                end_offset: 65,
            },
            SampleDevice {
                id: "d1-2",
                name: "Receiver 2",
                serial_number: "SN12346",
                start_offset: -360,
                end_offset: 5,
            },
        ],
    },
    SampleCustomer {
        id: "c2",
        name: "Fatima Al-Zahraa",
        phone: "0557654321",
        email: "fatima@example.com",
        devices: &[SampleDevice {
            id: "d2-1",
            name: "Internet Router",
            serial_number: "SN98765",
            start_offset: -400,
            end_offset: -10,
        }],
    },
    SampleCustomer {
        id: "c3",
        name: "Khalid Abdullah",
        phone: "0533334444",
        email: "khalid@example.com",
        devices: &[SampleDevice {
            id: "d3-1",
            name: "Security Camera",
            serial_number: "SN55555",
            start_offset: -100,
            end_offset: 265,
        }],
    },
];

/// Example records written to an empty store on first start.
pub fn sample_customers(today: NaiveDate) -> Result<Vec<Customer>, CustomerError> {
    SAMPLE_CUSTOMERS
        .iter()
        .map(|sample| {
            let devices = sample
                .devices
                .iter()
                .enumerate()
                .map(|(index, device)| {
                    Device::new(
                        device.id.to_string(),
                        device.name.to_string(),
                        device.serial_number.to_string(),
                        today + Duration::days(device.start_offset),
                        today + Duration::days(device.end_offset),
                    )
                    .map_err(|source| CustomerError::Device { index, source })
                })
                .collect::<Result<Vec<Device>, CustomerError>>()?;

            Customer::new(
                sample.id.to_string(),
                sample.name.to_string(),
                Some(sample.phone.to_string()),
                Some(sample.email.to_string()),
                devices,
            )
        })
        .collect()
}
