//! Spendlog is a personal expense tracker exposed as an HTTP JSON API.
//!
//! Transactions (expenses and income) are validated on the way in and
//! persisted to a flat CSV table. The API supports adding, listing,
//! filtering, summarizing, and deleting transactions.

#![warn(missing_docs)]

use std::{net::SocketAddr, time::Duration};

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use axum_server::Handle;
use serde_json::json;
use tokio::signal;

mod app_state;
mod endpoints;
mod models;
mod routes;
mod routing;
mod stores;
mod summary;

#[cfg(test)]
mod test_utils;

pub use app_state::AppState;
pub use models::{
    Category, NewTransaction, Transaction, TransactionId, TransactionSubmission, TransactionType,
};
pub use routing::build_router;
pub use stores::{CsvTransactionStore, TransactionQuery};
pub use summary::{MonthSummary, MonthlySummaries, monthly_summary};

/// An async task that waits for either the ctrl+c or terminate signal, whichever comes first, and
/// then signals the server to shut down gracefully.
///
/// `handle` is a handle to an Axum `Server`.
pub async fn graceful_shutdown(handle: Handle<SocketAddr>) {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::debug!("Received ctrl+c signal.");
            handle.graceful_shutdown(Some(Duration::from_secs(1)));
        },
        _ = terminate => {
            tracing::debug!("Received terminate signal.");
            handle.graceful_shutdown(Some(Duration::from_secs(1)));
        },
    }
}

/// The errors that may occur in the application.
#[derive(Debug, thiserror::Error, PartialEq)]
pub enum Error {
    /// A required transaction field was absent or empty.
    #[error("missing required field: {0}")]
    MissingField(&'static str),

    /// The submitted amount was not a number greater than zero.
    #[error("amount must be a number greater than 0")]
    InvalidAmount,

    /// The submitted category was not a member of the fixed category set.
    #[error(
        "invalid category, options: food, transport, entertainment, bills, shopping, health, \
         education, income, other"
    )]
    InvalidCategory,

    /// The submitted transaction type was neither `expense` nor `income`.
    #[error("type must be \"expense\" or \"income\"")]
    InvalidType,

    /// The submitted date could not be parsed as an ISO-8601 date or datetime.
    #[error("date must be in ISO format (YYYY-MM-DD)")]
    InvalidDate,

    /// The year query parameter could not be parsed as an integer.
    #[error("year must be a valid number")]
    InvalidYear,

    /// The requested transaction was not found, or the transaction table does
    /// not exist yet.
    #[error("the requested transaction could not be found")]
    NotFound,

    /// Could not acquire the lock guarding the transaction store.
    #[error("could not acquire the transaction store lock")]
    StoreLock,

    /// Reading, parsing, or writing the transaction table failed.
    ///
    /// The message carries the underlying cause and is surfaced to the caller.
    #[error("error accessing the transaction table: {0}")]
    Storage(String),
}

impl From<csv::Error> for Error {
    fn from(value: csv::Error) -> Self {
        tracing::error!("an error occurred while accessing the transaction table: {value}");
        Error::Storage(value.to_string())
    }
}

impl From<std::io::Error> for Error {
    fn from(value: std::io::Error) -> Self {
        tracing::error!("an I/O error occurred while accessing the transaction table: {value}");
        Error::Storage(value.to_string())
    }
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        let status = match self {
            Error::MissingField(_)
            | Error::InvalidAmount
            | Error::InvalidCategory
            | Error::InvalidType
            | Error::InvalidDate
            | Error::InvalidYear => StatusCode::BAD_REQUEST,
            Error::NotFound => StatusCode::NOT_FOUND,
            Error::StoreLock | Error::Storage(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        let body = Json(json!({
            "error": self.to_string(),
        }));

        (status, body).into_response()
    }
}
