use axum::extract::State;
use subtrack_core::domain::preferences::ports::PreferenceService;

use super::get_theme::ThemeResponse;
use crate::application::http::{
    preferences::validators::UpdateThemeValidator,
    server::{
        api_entities::{
            api_error::{ApiError, ValidateJson},
            response::Response,
        },
        app_state::AppState,
    },
};

#[utoipa::path(
    put,
    path = "/theme",
    tag = "preferences",
    summary = "Set theme",
    request_body = UpdateThemeValidator,
    responses(
        (status = 200, body = ThemeResponse),
        (status = 400, description = "Unknown theme")
    ),
)]
pub async fn update_theme(
    State(state): State<AppState>,
    ValidateJson(payload): ValidateJson<UpdateThemeValidator>,
) -> Result<Response<ThemeResponse>, ApiError> {
    let theme = state
        .service
        .set_theme(payload.theme)
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(ThemeResponse { theme }))
}
