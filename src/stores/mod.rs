//! The transaction store and the query type for filtering it.

mod csv;

pub use self::csv::CsvTransactionStore;

use crate::models::Transaction;

/// Defines which transactions a list request should return.
///
/// All filters are optional and combine with AND. Date bounds are inclusive
/// and compared lexicographically against the stored ISO date string, which
/// orders correctly for ISO-8601 text. Category and type are exact string
/// matches against the stored values, so an unknown category simply matches
/// nothing.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct TransactionQuery {
    /// Include transactions dated on or after this ISO date.
    pub start_date: Option<String>,
    /// Include transactions dated on or before this ISO date.
    pub end_date: Option<String>,
    /// Include transactions filed under this category.
    pub category: Option<String>,
    /// Include transactions of this type (`expense` or `income`).
    pub transaction_type: Option<String>,
}

impl TransactionQuery {
    /// Whether `transaction` passes every filter set on this query.
    pub fn matches(&self, transaction: &Transaction) -> bool {
        if let Some(start_date) = &self.start_date
            && transaction.date.as_str() < start_date.as_str()
        {
            return false;
        }

        if let Some(end_date) = &self.end_date
            && transaction.date.as_str() > end_date.as_str()
        {
            return false;
        }

        if let Some(category) = &self.category
            && transaction.category.as_str() != category
        {
            return false;
        }

        if let Some(transaction_type) = &self.transaction_type
            && transaction.transaction_type.as_str() != transaction_type
        {
            return false;
        }

        true
    }
}
