use axum::extract::{Path, Query, State};
use serde::{Deserialize, Serialize};
use subtrack_core::domain::customer::{
    ports::CustomerService,
    value_objects::{DeleteCustomerInput, DeleteOutcome},
};
use utoipa::{IntoParams, ToSchema};

use crate::application::http::server::{
    api_entities::{api_error::ApiError, response::Response},
    app_state::AppState,
};

#[derive(Debug, Deserialize, IntoParams)]
pub struct DeleteCustomerQuery {
    /// Nothing is deleted unless this is `true`.
    pub confirm: Option<bool>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct DeleteCustomerResponse {
    pub deleted: bool,
    pub message: String,
}

#[utoipa::path(
    delete,
    path = "/{customer_id}",
    tag = "customer",
    summary = "Delete customer",
    description = "Deletes a customer and all of its devices. Requires `confirm=true`; without it the request is a no-op.",
    params(
        ("customer_id" = String, Path, description = "Customer ID"),
        DeleteCustomerQuery
    ),
    responses(
        (status = 200, body = DeleteCustomerResponse),
        (status = 404, description = "Customer not found")
    ),
)]
pub async fn delete_customer(
    Path(customer_id): Path<String>,
    Query(query): Query<DeleteCustomerQuery>,
    State(state): State<AppState>,
) -> Result<Response<DeleteCustomerResponse>, ApiError> {
    let outcome = state
        .service
        .delete_customer(DeleteCustomerInput {
            customer_id,
            confirmed: query.confirm.unwrap_or(false),
        })
        .await
        .map_err(ApiError::from)?;

    let response = match outcome {
        DeleteOutcome::Deleted => DeleteCustomerResponse {
            deleted: true,
            message: "Customer deleted successfully".to_string(),
        },
        DeleteOutcome::Cancelled => DeleteCustomerResponse {
            deleted: false,
            message: "Deletion not confirmed".to_string(),
        },
    };

    Ok(Response::OK(response))
}
