use std::future::Future;

use crate::domain::{
    common::entities::app_errors::CoreError, dashboard::value_objects::DashboardStats,
};

pub trait DashboardService: Send + Sync {
    fn get_dashboard(&self) -> impl Future<Output = Result<DashboardStats, CoreError>> + Send;
}
