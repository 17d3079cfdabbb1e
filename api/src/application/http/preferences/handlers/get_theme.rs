use axum::extract::State;
use serde::{Deserialize, Serialize};
use subtrack_core::domain::preferences::{entities::Theme, ports::PreferenceService};
use utoipa::ToSchema;

use crate::application::http::server::{
    api_entities::{api_error::ApiError, response::Response},
    app_state::AppState,
};

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct ThemeResponse {
    pub theme: Theme,
}

#[utoipa::path(
    get,
    path = "/theme",
    tag = "preferences",
    summary = "Get theme",
    description = "Returns the stored display theme, `light` when none was saved.",
    responses(
        (status = 200, body = ThemeResponse)
    ),
)]
pub async fn get_theme(State(state): State<AppState>) -> Result<Response<ThemeResponse>, ApiError> {
    let theme = state.service.get_theme().await.map_err(ApiError::from)?;

    Ok(Response::OK(ThemeResponse { theme }))
}
