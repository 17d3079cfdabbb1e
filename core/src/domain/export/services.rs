use std::borrow::Cow;

use tracing::info;

use crate::domain::{
    common::{entities::app_errors::CoreError, ports::Clock, services::Service},
    customer::{entities::CustomerView, helpers::project_customers, ports::CustomerRepository},
    export::{
        ports::ExportService,
        value_objects::{CsvExport, EXPORT_FILENAME, EXPORT_HEADERS},
    },
    preferences::ports::PreferenceRepository,
};

/// Quotes a field when it contains a delimiter, quote or line break, doubling
/// any inner quotes.
pub fn escape_field(value: &str) -> Cow<'_, str> {
    if value.contains([',', '"', '\n', '\r']) {
        Cow::Owned(format!("\"{}\"", value.replace('"', "\"\"")))
    } else {
        Cow::Borrowed(value)
    }
}

fn csv_line<'a>(fields: impl IntoIterator<Item = &'a str>) -> String {
    fields
        .into_iter()
        .map(escape_field)
        .collect::<Vec<_>>()
        .join(",")
}

pub fn render_csv(customers: &[CustomerView]) -> String {
    let mut rows = vec![csv_line(EXPORT_HEADERS)];

    for customer in customers {
        for device in &customer.devices {
            let start_date = device.start_date.format("%Y-%m-%d").to_string();
            let end_date = device.end_date.format("%Y-%m-%d").to_string();

            rows.push(csv_line([
                customer.name.as_str(),
                customer.phone.as_deref().unwrap_or(""),
                device.name.as_str(),
                device.serial_number.as_str(),
                start_date.as_str(),
                end_date.as_str(),
                device.status.label(),
            ]));
        }
    }

    rows.join("\n")
}

impl<CR, PR, CL> ExportService for Service<CR, PR, CL>
where
    CR: CustomerRepository,
    PR: PreferenceRepository,
    CL: Clock,
{
    async fn export_subscriptions(&self) -> Result<CsvExport, CoreError> {
        let customers = self.customer_repository.load().await?;
        let views = project_customers(&customers, self.clock.today());
        let content = render_csv(&views);

        info!(customers = views.len(), bytes = content.len(), "Subscriptions exported");

        Ok(CsvExport {
            filename: EXPORT_FILENAME.to_string(),
            content,
        })
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;
    use crate::domain::customer::{
        entities::{Customer, Device},
        seed::sample_customers,
    };

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 6, 1).unwrap()
    }

    #[test]
    fn plain_fields_are_left_alone() {
        assert_eq!(escape_field("SN12345"), "SN12345");
    }

    #[test]
    fn fields_with_delimiters_are_quoted() {
        assert_eq!(escape_field("Mahmoud, Ahmed"), "\"Mahmoud, Ahmed\"");
        assert_eq!(escape_field("the \"big\" one"), "\"the \"\"big\"\" one\"");
        assert_eq!(escape_field("line\nbreak"), "\"line\nbreak\"");
    }

    #[test]
    fn one_row_per_device_after_header() {
        let views = project_customers(&sample_customers(today()).unwrap(), today());
        let csv = render_csv(&views);
        let lines: Vec<&str> = csv.lines().collect();

        assert_eq!(
            lines[0],
            "Customer Name,Customer Phone,Device Name,Device Serial,Start Date,End Date,Status"
        );
        assert_eq!(lines.len(), 5);
        assert_eq!(
            lines[2],
            "Ahmed Mahmoud,0501234567,Receiver 2,SN12346,2024-06-06,2025-06-06,Expiring Soon"
        );
        assert!(lines[3].ends_with(",Expired"));
    }

    #[test]
    fn missing_phone_and_commas_in_names() {
        let device = Device::new(
            "d".into(),
            "Router, backup".into(),
            "SN1".into(),
            today(),
            today(),
        )
        .unwrap();
        let customer = Customer::new("c".into(), "Ahmed".into(), None, None, vec![device]).unwrap();
        let csv = render_csv(&[CustomerView::project(&customer, today())]);

        assert_eq!(
            csv.lines().nth(1),
            Some("Ahmed,,\"Router, backup\",SN1,2025-06-01,2025-06-01,Expiring Soon")
        );
    }
}
