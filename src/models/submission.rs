//! Validation of incoming transaction data.
//!
//! Request handlers collect the raw field set into a [`TransactionSubmission`]
//! and call [`TransactionSubmission::validate`] before anything reaches the
//! store.

use crate::{
    Error,
    models::{Category, NewTransaction, TransactionType, parse_iso_date},
};

/// The raw field set of a submitted transaction before validation.
///
/// All fields are optional text: the quick-add endpoint reads them from query
/// parameters, and the JSON endpoint coerces its body into the same shape.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct TransactionSubmission {
    /// The amount of money spent or earned, as text.
    pub amount: Option<String>,
    /// A text description of what the transaction was for.
    pub description: Option<String>,
    /// The category to file the transaction under.
    pub category: Option<String>,
    /// When the transaction happened, as ISO-8601 text.
    pub date: Option<String>,
    /// Whether the transaction is an expense or income.
    pub transaction_type: Option<String>,
}

impl TransactionSubmission {
    /// Check the field set against the domain rules and produce a validated
    /// [`NewTransaction`].
    ///
    /// Validation is pure (no I/O) and reports the first broken rule, checked
    /// in this order:
    /// 1. all five fields present and non-empty,
    /// 2. the amount parses as a number strictly greater than zero,
    /// 3. the category is a member of the fixed category set,
    /// 4. the type is exactly `expense` or `income`,
    /// 5. the date parses as an ISO-8601 date or datetime.
    ///
    /// # Errors
    /// Returns [`Error::MissingField`] naming the first absent field, or
    /// [`Error::InvalidAmount`], [`Error::InvalidCategory`],
    /// [`Error::InvalidType`], or [`Error::InvalidDate`].
    pub fn validate(self) -> Result<NewTransaction, Error> {
        let amount = require_field(self.amount, "amount")?;
        let description = require_field(self.description, "description")?;
        let category = require_field(self.category, "category")?;
        let date = require_field(self.date, "date")?;
        let transaction_type = require_field(self.transaction_type, "type")?;

        let amount: f64 = amount.trim().parse().map_err(|_| Error::InvalidAmount)?;
        // NaN fails this comparison too.
        if !(amount > 0.0) {
            return Err(Error::InvalidAmount);
        }

        let category: Category = category.parse()?;
        let transaction_type: TransactionType = transaction_type.parse()?;

        if parse_iso_date(&date).is_none() {
            return Err(Error::InvalidDate);
        }

        Ok(NewTransaction {
            amount,
            description,
            category,
            date,
            transaction_type,
        })
    }
}

/// An empty string counts as missing, matching how an empty query parameter
/// arrives.
fn require_field(value: Option<String>, name: &'static str) -> Result<String, Error> {
    match value {
        Some(text) if !text.is_empty() => Ok(text),
        _ => Err(Error::MissingField(name)),
    }
}
