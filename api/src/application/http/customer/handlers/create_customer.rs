use axum::extract::State;
use serde::{Deserialize, Serialize};
use subtrack_core::domain::customer::{
    entities::CustomerView, ports::CustomerService, value_objects::CreateCustomerInput,
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
pub struct CreateCustomerResponse {
    pub data: CustomerView,
}

#[utoipa::path(
    post,
    path = "",
    tag = "customer",
    summary = "Create customer",
    description = "Creates a customer with at least one device. A fresh identifier is always generated.",
    request_body = CustomerValidator,
    responses(
        (status = 201, body = CreateCustomerResponse),
        (status = 400, description = "Invalid customer")
    ),
)]
pub async fn create_customer(
    State(state): State<AppState>,
    ValidateJson(payload): ValidateJson<CustomerValidator>,
) -> Result<Response<CreateCustomerResponse>, ApiError> {
    let customer = state
        .service
        .create_customer(CreateCustomerInput {
            draft: payload.into(),
        })
        .await
        .map_err(ApiError::from)?;

    Ok(Response::Created(CreateCustomerResponse { data: customer }))
}
