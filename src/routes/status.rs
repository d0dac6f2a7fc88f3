//! Route handlers for the liveness banner and the health check.

use axum::Json;
use serde_json::{Value, json};
use time::{OffsetDateTime, format_description::well_known::Rfc3339};

/// A route handler for the liveness banner at the root path.
pub async fn get_home() -> Json<Value> {
    Json(json!({
        "message": "Personal Expense Tracker API",
    }))
}

/// A route handler for the health check, including the current server time.
pub async fn get_status() -> Json<Value> {
    let timestamp = OffsetDateTime::now_utc()
        .format(&Rfc3339)
        .expect("formatting a UTC timestamp as RFC 3339 cannot fail");

    Json(json!({
        "status": "working",
        "message": "Personal Expense Tracker API is running",
        "timestamp": timestamp,
    }))
}
