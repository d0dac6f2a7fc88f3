//! This file defines the type `Transaction`, the core type of the
//! application, along with its transaction type and ID.

use std::{fmt::Display, str::FromStr};

use serde::{Deserialize, Serialize};
use time::{
    Date, OffsetDateTime, PrimitiveDateTime, format_description::well_known::Iso8601,
};

use crate::{Error, models::Category};

/// The ID of a transaction in the store.
///
/// IDs are positive, unique among stored transactions, and dense (1-based)
/// after a reindex.
pub type TransactionId = u64;

/// Whether a transaction records money going out or coming in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionType {
    /// Money spent.
    Expense,
    /// Money earned.
    Income,
}

impl TransactionType {
    /// The lowercase name of the transaction type as stored in the CSV table.
    pub fn as_str(&self) -> &'static str {
        match self {
            TransactionType::Expense => "expense",
            TransactionType::Income => "income",
        }
    }
}

impl FromStr for TransactionType {
    type Err = Error;

    fn from_str(text: &str) -> Result<Self, Self::Err> {
        match text {
            "expense" => Ok(TransactionType::Expense),
            "income" => Ok(TransactionType::Income),
            _ => Err(Error::InvalidType),
        }
    }
}

impl Display for TransactionType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// An expense or income, i.e. an event where money was either spent or earned.
///
/// The field order matches the column order of the CSV table
/// (`id,amount,description,category,date,type`), so the same struct serializes
/// as both a table row and a JSON API object.
///
/// The date is kept as the validated ISO-8601 text exactly as it was
/// submitted: list filtering compares date strings lexicographically, and the
/// validator accepts both plain dates and datetimes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    /// The ID of the transaction.
    pub id: TransactionId,
    /// The amount of money spent or earned.
    pub amount: f64,
    /// A text description of what the transaction was for.
    pub description: String,
    /// The category the transaction is filed under.
    pub category: Category,
    /// When the transaction happened, as ISO-8601 text.
    pub date: String,
    /// Whether the transaction is an expense or income.
    #[serde(rename = "type")]
    pub transaction_type: TransactionType,
}

/// A transaction that has passed validation but has not been assigned an ID
/// yet.
///
/// Produced by [`crate::TransactionSubmission::validate`] and consumed by
/// [`crate::CsvTransactionStore::append`], which assigns the next free ID.
#[derive(Debug, Clone, PartialEq)]
pub struct NewTransaction {
    /// The amount of money spent or earned. Strictly positive.
    pub amount: f64,
    /// A text description of what the transaction was for. Non-empty.
    pub description: String,
    /// The category the transaction is filed under.
    pub category: Category,
    /// When the transaction happened, as validated ISO-8601 text.
    pub date: String,
    /// Whether the transaction is an expense or income.
    pub transaction_type: TransactionType,
}

/// Parse ISO-8601 text as a calendar date.
///
/// Accepts a plain date (`2024-03-01`), a datetime (`2024-03-01T12:30:00`),
/// or a datetime with a UTC offset; the time component, if any, is discarded.
/// Returns `None` if the text is not valid ISO-8601.
pub fn parse_iso_date(text: &str) -> Option<Date> {
    Date::parse(text, &Iso8601::DEFAULT).ok().or_else(|| {
        PrimitiveDateTime::parse(text, &Iso8601::DEFAULT)
            .ok()
            .map(|datetime| datetime.date())
            .or_else(|| {
                OffsetDateTime::parse(text, &Iso8601::DEFAULT)
                    .ok()
                    .map(|datetime| datetime.date())
            })
    })
}
