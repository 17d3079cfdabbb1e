use axum::extract::{Path, State};
use serde::{Deserialize, Serialize};
use subtrack_core::domain::customer::{
    entities::CustomerView, ports::CustomerService, value_objects::GetCustomerInput,
};
use utoipa::ToSchema;

use crate::application::http::server::{
    api_entities::{api_error::ApiError, response::Response},
    app_state::AppState,
};

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct GetCustomerResponse {
    pub data: CustomerView,
}

#[utoipa::path(
    get,
    path = "/{customer_id}",
    tag = "customer",
    summary = "Get customer",
    params(
        ("customer_id" = String, Path, description = "Customer ID"),
    ),
    responses(
        (status = 200, body = GetCustomerResponse),
        (status = 404, description = "Customer not found")
    ),
)]
pub async fn get_customer(
    Path(customer_id): Path<String>,
    State(state): State<AppState>,
) -> Result<Response<GetCustomerResponse>, ApiError> {
    let customer = state
        .service
        .get_customer(GetCustomerInput { customer_id })
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(GetCustomerResponse { data: customer }))
}
