use axum::{Router, routing::get};
use utoipa::OpenApi;

use super::handlers::export_subscriptions::{__path_export_subscriptions, export_subscriptions};
use crate::application::http::server::app_state::AppState;

#[derive(OpenApi)]
#[openapi(paths(export_subscriptions))]
pub struct ExportApiDoc;

pub fn export_routes(state: AppState) -> Router<AppState> {
    Router::new().route(
        &format!("{}/export/subscriptions.csv", state.args.server.root_path),
        get(export_subscriptions),
    )
}
