use axum::{
    extract::State,
    http::header::{CONTENT_DISPOSITION, CONTENT_TYPE},
    response::IntoResponse,
};
use subtrack_core::domain::export::ports::ExportService;

use crate::application::http::server::{api_entities::api_error::ApiError, app_state::AppState};

#[utoipa::path(
    get,
    path = "/subscriptions.csv",
    tag = "export",
    summary = "Export subscriptions",
    description = "Downloads every device subscription as CSV, one row per device.",
    responses(
        (status = 200, content_type = "text/csv", body = String)
    ),
)]
pub async fn export_subscriptions(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, ApiError> {
    let export = state
        .service
        .export_subscriptions()
        .await
        .map_err(ApiError::from)?;

    let headers = [
        (CONTENT_TYPE, "text/csv; charset=utf-8".to_string()),
        (
            CONTENT_DISPOSITION,
            format!("attachment; filename=\"{}\"", export.filename),
        ),
    ];

    Ok((headers, export.content))
}
