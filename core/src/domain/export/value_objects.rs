pub const EXPORT_FILENAME: &str = "subscriptions.csv";

pub const EXPORT_HEADERS: [&str; 7] = [
    "Customer Name",
    "Customer Phone",
    "Device Name",
    "Device Serial",
    "Start Date",
    "End Date",
    "Status",
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CsvExport {
    pub filename: String,
    pub content: String,
}
