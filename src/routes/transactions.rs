//! Route handler for listing transactions with optional filters.

use axum::{
    Json,
    extract::{Query, State},
    response::{IntoResponse, Response},
};
use serde::Deserialize;
use serde_json::json;

use crate::{AppState, Error, stores::TransactionQuery};

/// The query parameters of a list request. All filters are optional.
#[derive(Debug, Default, Deserialize)]
pub struct ListParams {
    start_date: Option<String>,
    end_date: Option<String>,
    category: Option<String>,
    #[serde(rename = "type")]
    transaction_type: Option<String>,
}

impl From<ListParams> for TransactionQuery {
    fn from(params: ListParams) -> Self {
        TransactionQuery {
            start_date: params.start_date,
            end_date: params.end_date,
            category: params.category,
            transaction_type: params.transaction_type,
        }
    }
}

/// A route handler for listing stored transactions, optionally filtered by an
/// inclusive date range, category, and type.
///
/// Returns the matches in store order along with their count. An absent table
/// yields an empty list.
pub async fn list_transactions(
    State(state): State<AppState>,
    Query(params): Query<ListParams>,
) -> Result<Response, Error> {
    let query = TransactionQuery::from(params);

    let transactions = state.store()?.read_all()?;
    let matches: Vec<_> = transactions
        .into_iter()
        .filter(|transaction| query.matches(transaction))
        .collect();

    Ok(Json(json!({
        "count": matches.len(),
        "transactions": matches,
    }))
    .into_response())
}
