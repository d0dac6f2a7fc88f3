//! The domain types: transactions, their categories and types, and the
//! validation of incoming transaction data.

mod category;
mod submission;
mod transaction;

pub use category::Category;
pub use submission::TransactionSubmission;
pub use transaction::{
    NewTransaction, Transaction, TransactionId, TransactionType, parse_iso_date,
};
