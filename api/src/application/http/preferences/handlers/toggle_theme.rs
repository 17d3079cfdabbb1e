use axum::extract::State;
use subtrack_core::domain::preferences::ports::PreferenceService;

use super::get_theme::ThemeResponse;
use crate::application::http::server::{
    api_entities::{api_error::ApiError, response::Response},
    app_state::AppState,
};

#[utoipa::path(
    post,
    path = "/theme/toggle",
    tag = "preferences",
    summary = "Toggle theme",
    description = "Switches between `light` and `dark` and stores the result.",
    responses(
        (status = 200, body = ThemeResponse)
    ),
)]
pub async fn toggle_theme(
    State(state): State<AppState>,
) -> Result<Response<ThemeResponse>, ApiError> {
    let theme = state.service.toggle_theme().await.map_err(ApiError::from)?;

    Ok(Response::OK(ThemeResponse { theme }))
}
