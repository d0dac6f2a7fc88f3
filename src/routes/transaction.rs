//! Route handlers for admitting, deleting, and reindexing transactions.

use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Deserialize;
use serde_json::json;

use crate::{
    AppState, Error,
    models::{TransactionId, TransactionSubmission},
};

/// The JSON body of a create-transaction request.
///
/// Every field is optional so that the validator, not the deserializer,
/// reports which field is missing. The amount may arrive as a JSON number or
/// a string; both are coerced to text and validated the same way.
#[derive(Debug, Default, Deserialize)]
pub struct CreateTransactionRequest {
    #[serde(default)]
    amount: Option<AmountField>,
    #[serde(default)]
    description: Option<String>,
    #[serde(default)]
    category: Option<String>,
    #[serde(default)]
    date: Option<String>,
    #[serde(default, rename = "type")]
    transaction_type: Option<String>,
}

/// An amount submitted as either a JSON number or a string.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum AmountField {
    Number(f64),
    Text(String),
}

impl AmountField {
    fn into_text(self) -> String {
        match self {
            AmountField::Number(number) => number.to_string(),
            AmountField::Text(text) => text,
        }
    }
}

impl From<CreateTransactionRequest> for TransactionSubmission {
    fn from(request: CreateTransactionRequest) -> Self {
        TransactionSubmission {
            amount: request.amount.map(AmountField::into_text),
            description: request.description,
            category: request.category,
            date: request.date,
            transaction_type: request.transaction_type,
        }
    }
}

/// The query parameters of a quick-add request.
///
/// Query parameters are always text, so the fields map directly onto the
/// submission the validator consumes.
#[derive(Debug, Default, Deserialize)]
pub struct QuickAddParams {
    amount: Option<String>,
    description: Option<String>,
    category: Option<String>,
    date: Option<String>,
    #[serde(rename = "type")]
    transaction_type: Option<String>,
}

impl From<QuickAddParams> for TransactionSubmission {
    fn from(params: QuickAddParams) -> Self {
        TransactionSubmission {
            amount: params.amount,
            description: params.description,
            category: params.category,
            date: params.date,
            transaction_type: params.transaction_type,
        }
    }
}

/// A route handler for creating a new transaction from a JSON body.
///
/// Responds with 201 and the created transaction on success.
pub async fn create_transaction(
    State(state): State<AppState>,
    Json(request): Json<CreateTransactionRequest>,
) -> Result<Response, Error> {
    admit_transaction(&state, request.into(), "POST")
}

/// A route handler for the "quick add": creating a new transaction from query
/// parameters on a GET request.
///
/// Useful for adding a transaction straight from a browser address bar.
pub async fn quick_add_transaction(
    State(state): State<AppState>,
    Query(params): Query<QuickAddParams>,
) -> Result<Response, Error> {
    admit_transaction(&state, params.into(), "GET")
}

/// Validate a submission and append it to the store.
///
/// The store is never touched when validation fails.
fn admit_transaction(
    state: &AppState,
    submission: TransactionSubmission,
    method: &'static str,
) -> Result<Response, Error> {
    let new_transaction = submission.validate()?;

    let transaction = state.store()?.append(new_transaction)?;

    let mut message = String::from("Transaction added successfully");
    if method == "GET" {
        message.push_str(" via quick add");
    }

    Ok((
        StatusCode::CREATED,
        Json(json!({
            "message": message,
            "transaction": transaction,
            "method": method,
        })),
    )
        .into_response())
}

/// A route handler for deleting a transaction by its ID.
///
/// Deletion renumbers the remaining transactions to 1..n in file order.
/// Responds with 404 if no transaction has the given ID.
pub async fn delete_transaction(
    State(state): State<AppState>,
    Path(transaction_id): Path<TransactionId>,
) -> Result<Response, Error> {
    state.store()?.delete(transaction_id)?;

    Ok(Json(json!({
        "message": "Transaction deleted successfully",
    }))
    .into_response())
}

/// A route handler for forcing a renumbering of all transaction IDs to their
/// 1-based file positions.
pub async fn reindex_transactions(State(state): State<AppState>) -> Result<Response, Error> {
    state.store()?.reindex()?;

    Ok(Json(json!({
        "message": "All transactions reindexed successfully",
    }))
    .into_response())
}
