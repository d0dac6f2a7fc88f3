//! The API endpoint URIs.
//!
//! For endpoints that take a parameter, e.g., '/api/transactions/{transaction_id}',
//! use [format_endpoint].

/// The liveness banner.
pub const ROOT: &str = "/";
/// The health check with a server timestamp.
pub const STATUS: &str = "/api/status";
/// The route to admit a transaction: POST with a JSON body, or GET with query
/// parameters as a quick add.
pub const TRANSACTIONS: &str = "/api/transactions";
/// The route to list transactions with optional filters.
pub const TRANSACTIONS_LIST: &str = "/api/transactions/list";
/// The route to delete a single transaction.
pub const TRANSACTION: &str = "/api/transactions/{transaction_id}";
/// The route to force a renumbering of all transaction IDs.
pub const REINDEX: &str = "/api/transactions/reindex";
/// The route for the monthly summary of a year.
pub const MONTHLY_SUMMARY: &str = "/api/summary/months";

/// Replace the parameter in `endpoint_path` with `id`.
///
/// A parameter is a string that starts with a left brace, followed by
/// lowercase letters or underscores, and ends with a right brace.
/// For example, in the endpoint path '/api/transactions/{transaction_id}',
/// '{transaction_id}' is the parameter.
///
/// This function assumes that an endpoint path only contains ASCII characters
/// and a single parameter.
///
/// If no parameter is found in `endpoint_path`, the function returns the
/// original `endpoint_path`.
pub fn format_endpoint(endpoint_path: &str, id: u64) -> String {
    let mut param_start = None;
    let mut param_end = None;

    for (i, c) in endpoint_path.chars().enumerate() {
        if c == '{' {
            param_start = Some(i);
        } else if param_start.is_some() && c == '}' {
            param_end = Some(i + 1);
            break;
        }
    }

    let param_start = match param_start {
        Some(start) => start,
        None => return endpoint_path.to_string(),
    };

    let param_end = param_end.unwrap_or(endpoint_path.len());

    format!(
        "{}{}{}",
        &endpoint_path[..param_start],
        id,
        &endpoint_path[param_end..]
    )
}
