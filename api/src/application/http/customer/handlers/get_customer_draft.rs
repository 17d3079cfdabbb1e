use axum::extract::{Path, State};
use serde::{Deserialize, Serialize};
use subtrack_core::domain::customer::{
    editor::CustomerDraft, ports::CustomerService, value_objects::GetCustomerInput,
};
use utoipa::ToSchema;

use crate::application::http::server::{
    api_entities::{api_error::ApiError, response::Response},
    app_state::AppState,
};

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct GetCustomerDraftResponse {
    pub data: CustomerDraft,
}

#[utoipa::path(
    get,
    path = "/draft",
    tag = "customer",
    summary = "New customer form",
    description = "Returns an empty editor draft holding a single device row.",
    responses(
        (status = 200, body = GetCustomerDraftResponse)
    ),
)]
pub async fn new_customer_draft() -> Response<GetCustomerDraftResponse> {
    Response::OK(GetCustomerDraftResponse {
        data: CustomerDraft::new(),
    })
}

#[utoipa::path(
    get,
    path = "/{customer_id}/draft",
    tag = "customer",
    summary = "Edit customer form",
    description = "Returns an editor draft pre-filled from the stored customer, dates as `YYYY-MM-DD`.",
    params(
        ("customer_id" = String, Path, description = "Customer ID"),
    ),
    responses(
        (status = 200, body = GetCustomerDraftResponse),
        (status = 404, description = "Customer not found")
    ),
)]
pub async fn get_customer_draft(
    Path(customer_id): Path<String>,
    State(state): State<AppState>,
) -> Result<Response<GetCustomerDraftResponse>, ApiError> {
    let draft = state
        .service
        .get_customer_draft(GetCustomerInput { customer_id })
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(GetCustomerDraftResponse { data: draft }))
}
