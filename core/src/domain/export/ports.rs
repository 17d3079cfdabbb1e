use std::future::Future;

use crate::domain::{
    common::entities::app_errors::CoreError, export::value_objects::CsvExport,
};

pub trait ExportService: Send + Sync {
    /// Flattens every customer device into one CSV row, with statuses as of
    /// today.
    fn export_subscriptions(&self) -> impl Future<Output = Result<CsvExport, CoreError>> + Send;
}
