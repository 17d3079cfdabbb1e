use axum::extract::{Query, State};
use serde::{Deserialize, Serialize};
use subtrack_core::domain::customer::{
    entities::CustomerView,
    ports::CustomerService,
    value_objects::{GetCustomersFilter, StatusFilter},
};
use utoipa::{IntoParams, ToSchema};

use crate::application::http::server::{
    api_entities::{api_error::ApiError, response::Response},
    app_state::AppState,
};

#[derive(Debug, Deserialize, IntoParams)]
pub struct GetCustomersQuery {
    /// Matched against customer name, phone, device name and serial number.
    pub q: Option<String>,
    /// One of `all`, `active`, `expiring_soon`, `expired`.
    pub status: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct GetCustomersResponse {
    pub data: Vec<CustomerView>,
}

#[utoipa::path(
    get,
    path = "",
    tag = "customer",
    summary = "List customers",
    description = "Lists customers with their device statuses as of today, optionally narrowed by a search text and a status.",
    params(GetCustomersQuery),
    responses(
        (status = 200, body = GetCustomersResponse),
        (status = 400, description = "Unknown status filter")
    ),
)]
pub async fn get_customers(
    Query(query): Query<GetCustomersQuery>,
    State(state): State<AppState>,
) -> Result<Response<GetCustomersResponse>, ApiError> {
    let status = match query.status.as_deref() {
        None => StatusFilter::All,
        Some(raw) => raw
            .parse::<StatusFilter>()
            .map_err(|_| ApiError::BadRequest(format!("Unknown status filter: {}", raw)))?,
    };

    let customers = state
        .service
        .get_customers(GetCustomersFilter {
            query: query.q.unwrap_or_default(),
            status,
        })
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(GetCustomersResponse { data: customers }))
}
