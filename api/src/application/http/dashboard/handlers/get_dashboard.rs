use axum::extract::State;
use serde::{Deserialize, Serialize};
use subtrack_core::domain::dashboard::{ports::DashboardService, value_objects::DashboardStats};
use utoipa::ToSchema;

use crate::application::http::server::{
    api_entities::{api_error::ApiError, response::Response},
    app_state::AppState,
};

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct GetDashboardResponse {
    pub total_customers: usize,
    pub active: usize,
    pub expiring_soon: usize,
    pub expired: usize,
}

impl From<DashboardStats> for GetDashboardResponse {
    fn from(stats: DashboardStats) -> Self {
        Self {
            total_customers: stats.total_customers,
            active: stats.active,
            expiring_soon: stats.expiring_soon,
            expired: stats.expired,
        }
    }
}

#[utoipa::path(
    get,
    path = "",
    tag = "dashboard",
    summary = "Get dashboard counters",
    description = "Counts customers and devices per subscription status over the whole collection.",
    responses(
        (status = 200, body = GetDashboardResponse)
    ),
)]
pub async fn get_dashboard(
    State(state): State<AppState>,
) -> Result<Response<GetDashboardResponse>, ApiError> {
    let stats = state
        .service
        .get_dashboard()
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(GetDashboardResponse::from(stats)))
}
