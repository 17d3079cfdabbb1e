use axum::{
    Router,
    routing::{get, post, put},
};
use utoipa::OpenApi;

use super::handlers::get_theme::{__path_get_theme, get_theme};
use super::handlers::toggle_theme::{__path_toggle_theme, toggle_theme};
use super::handlers::update_theme::{__path_update_theme, update_theme};
use crate::application::http::server::app_state::AppState;

#[derive(OpenApi)]
#[openapi(paths(get_theme, update_theme, toggle_theme))]
pub struct PreferencesApiDoc;

pub fn preferences_routes(state: AppState) -> Router<AppState> {
    let root_path = &state.args.server.root_path;

    Router::new()
        .route(
            &format!("{}/preferences/theme", root_path),
            get(get_theme),
        )
        .route(
            &format!("{}/preferences/theme", root_path),
            put(update_theme),
        )
        .route(
            &format!("{}/preferences/theme/toggle", root_path),
            post(toggle_theme),
        )
}
