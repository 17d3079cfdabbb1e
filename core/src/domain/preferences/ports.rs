use std::future::Future;

use crate::domain::{common::entities::app_errors::CoreError, preferences::entities::Theme};

pub trait PreferenceService: Send + Sync {
    fn get_theme(&self) -> impl Future<Output = Result<Theme, CoreError>> + Send;

    fn set_theme(&self, theme: Theme) -> impl Future<Output = Result<Theme, CoreError>> + Send;

    fn toggle_theme(&self) -> impl Future<Output = Result<Theme, CoreError>> + Send;
}

pub trait PreferenceRepository: Send + Sync {
    /// Missing or unreadable preferences resolve to the default theme.
    fn get_theme(&self) -> impl Future<Output = Result<Theme, CoreError>> + Send;

    fn set_theme(&self, theme: Theme) -> impl Future<Output = Result<(), CoreError>> + Send;
}
