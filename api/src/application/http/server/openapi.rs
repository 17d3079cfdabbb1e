use utoipa::OpenApi;

use crate::application::http::{
    customer::router::CustomerApiDoc, dashboard::router::DashboardApiDoc,
    export::router::ExportApiDoc, health::HealthApiDoc, preferences::router::PreferencesApiDoc,
};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Subtrack API"
    ),
    nest(
        (path = "/customers", api = CustomerApiDoc),
        (path = "/dashboard", api = DashboardApiDoc),
        (path = "/export", api = ExportApiDoc),
        (path = "/preferences", api = PreferencesApiDoc),
        (path = "/health", api = HealthApiDoc),
    )
)]
pub struct ApiDoc;
