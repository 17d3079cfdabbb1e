use axum::extract::{Path, State};
use serde::{Deserialize, Serialize};
use subtrack_core::domain::customer::{
    entities::CustomerView, ports::CustomerService, value_objects::UpdateCustomerInput,
};
use utoipa::ToSchema;

use crate::application::http::{
    customer::validators::CustomerValidator,
    server::{
        api_entities::{
            api_error::{ApiError, ValidateJson},
            response::Response,
        },
        app_state::AppState,
    },
};

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct UpdateCustomerResponse {
    pub data: CustomerView,
}

#[utoipa::path(
    put,
    path = "/{customer_id}",
    tag = "customer",
    summary = "Replace customer",
    description = "Replaces the whole customer record, devices included. The identifier is preserved.",
    params(
        ("customer_id" = String, Path, description = "Customer ID"),
    ),
    request_body = CustomerValidator,
    responses(
        (status = 200, body = UpdateCustomerResponse),
        (status = 400, description = "Invalid customer"),
        (status = 404, description = "Customer not found")
    ),
)]
pub async fn update_customer(
    Path(customer_id): Path<String>,
    State(state): State<AppState>,
    ValidateJson(payload): ValidateJson<CustomerValidator>,
) -> Result<Response<UpdateCustomerResponse>, ApiError> {
    let customer = state
        .service
        .update_customer(UpdateCustomerInput {
            customer_id,
            draft: payload.into(),
        })
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(UpdateCustomerResponse { data: customer }))
}
