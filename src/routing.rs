//! Application router configuration.

use axum::{
    Json, Router,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{delete, get, post},
};
use serde_json::json;

use crate::{
    AppState, endpoints,
    routes::{
        status::{get_home, get_status},
        summary::get_monthly_summary,
        transaction::{
            create_transaction, delete_transaction, quick_add_transaction, reindex_transactions,
        },
        transactions::list_transactions,
    },
};

/// Return a router with all the app's routes.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route(endpoints::ROOT, get(get_home))
        .route(endpoints::STATUS, get(get_status))
        .route(
            endpoints::TRANSACTIONS,
            post(create_transaction).get(quick_add_transaction),
        )
        .route(endpoints::TRANSACTIONS_LIST, get(list_transactions))
        .route(endpoints::MONTHLY_SUMMARY, get(get_monthly_summary))
        .route(endpoints::TRANSACTION, delete(delete_transaction))
        .route(endpoints::REINDEX, post(reindex_transactions))
        .fallback(get_404_not_found)
        .with_state(state)
}

/// The JSON 404 response for unknown paths.
async fn get_404_not_found() -> Response {
    (
        StatusCode::NOT_FOUND,
        Json(json!({
            "error": "the requested resource could not be found",
        })),
    )
        .into_response()
}
