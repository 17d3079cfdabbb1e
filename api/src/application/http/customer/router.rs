use axum::{
    Router,
    routing::{delete, get, post, put},
};
use utoipa::OpenApi;

use super::handlers::create_customer::{__path_create_customer, create_customer};
use super::handlers::delete_customer::{__path_delete_customer, delete_customer};
use super::handlers::get_customer::{__path_get_customer, get_customer};
use super::handlers::get_customer_draft::{
    __path_get_customer_draft, __path_new_customer_draft, get_customer_draft, new_customer_draft,
};
use super::handlers::get_customers::{__path_get_customers, get_customers};
use super::handlers::update_customer::{__path_update_customer, update_customer};
use crate::application::http::server::app_state::AppState;

#[derive(OpenApi)]
#[openapi(paths(
    get_customers,
    get_customer,
    new_customer_draft,
    get_customer_draft,
    create_customer,
    update_customer,
    delete_customer
))]
pub struct CustomerApiDoc;

pub fn customer_routes(state: AppState) -> Router<AppState> {
    let root_path = &state.args.server.root_path;

    Router::new()
        .route(&format!("{}/customers", root_path), get(get_customers))
        .route(&format!("{}/customers", root_path), post(create_customer))
        .route(
            &format!("{}/customers/draft", root_path),
            get(new_customer_draft),
        )
        .route(
            &format!("{}/customers/{{customer_id}}", root_path),
            get(get_customer),
        )
        .route(
            &format!("{}/customers/{{customer_id}}/draft", root_path),
            get(get_customer_draft),
        )
        .route(
            &format!("{}/customers/{{customer_id}}", root_path),
            put(update_customer),
        )
        .route(
            &format!("{}/customers/{{customer_id}}", root_path),
            delete(delete_customer),
        )
}
