//! A transaction store backed by a flat CSV table.

use std::{
    fs::{self, OpenOptions},
    path::{Path, PathBuf},
};

use csv::WriterBuilder;

use crate::{
    Error,
    models::{NewTransaction, Transaction, TransactionId},
};

/// The fixed column order of the transaction table.
pub const HEADER: [&str; 6] = ["id", "amount", "description", "category", "date", "type"];

/// Stores transactions as rows of a CSV file.
///
/// The table has the header `id,amount,description,category,date,type` and
/// one row per transaction, in insertion order. Deletion and reindexing
/// rewrite the whole table; there are no random-access record slots in the
/// format, and for single-user volumes the O(n) rewrite is a fair trade for
/// simplicity. Rewrites go through a temporary file and an atomic rename so a
/// failure mid-write cannot leave a truncated table behind.
///
/// The store itself does no locking. [`crate::AppState`] owns it behind a
/// mutex and serializes all access through it.
#[derive(Debug)]
pub struct CsvTransactionStore {
    path: PathBuf,
}

impl CsvTransactionStore {
    /// Create a store that reads and writes the CSV table at `path`.
    ///
    /// The file is not touched until [`CsvTransactionStore::initialize`] or a
    /// write operation is called.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// The path of the backing CSV table.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Create the backing table with its header row if it does not exist.
    ///
    /// A no-op if the file already exists; existing data is never overwritten.
    ///
    /// # Errors
    /// Returns [`Error::Storage`] if the file cannot be created or written.
    pub fn initialize(&self) -> Result<(), Error> {
        if self.path.exists() {
            return Ok(());
        }

        let mut writer = csv::Writer::from_path(&self.path)?;
        writer.write_record(HEADER)?;
        writer.flush()?;

        Ok(())
    }

    /// The ID the next admitted transaction will receive: one more than the
    /// highest stored ID, or 1 when the table is empty or absent.
    ///
    /// # Errors
    /// Returns [`Error::Storage`] if the table exists but cannot be read or
    /// parsed. An unreadable table is not treated as empty: falling back to
    /// ID 1 would silently collide with existing rows.
    pub fn next_id(&self) -> Result<TransactionId, Error> {
        let transactions = self.read_all()?;

        Ok(transactions
            .iter()
            .map(|transaction| transaction.id)
            .max()
            .map_or(1, |max_id| max_id + 1))
    }

    /// Admit a validated transaction: assign it the next free ID and append
    /// exactly one row to the table.
    ///
    /// Existing rows are not rewritten. The header is created first if the
    /// table went missing, so an append can never produce a headerless file.
    ///
    /// # Errors
    /// Returns [`Error::Storage`] if the table cannot be read (for the ID) or
    /// written.
    pub fn append(&mut self, new_transaction: NewTransaction) -> Result<Transaction, Error> {
        self.initialize()?;

        let transaction = Transaction {
            id: self.next_id()?,
            amount: new_transaction.amount,
            description: new_transaction.description,
            category: new_transaction.category,
            date: new_transaction.date,
            transaction_type: new_transaction.transaction_type,
        };

        let file = OpenOptions::new().append(true).open(&self.path)?;
        let mut writer = WriterBuilder::new().has_headers(false).from_writer(file);
        writer.serialize(&transaction)?;
        writer.flush()?;

        Ok(transaction)
    }

    /// Read the full ordered sequence of stored transactions.
    ///
    /// File order is insertion order, except after a delete or reindex which
    /// rewrites rows in the order encountered. Returns an empty vector when
    /// the table does not exist.
    ///
    /// # Errors
    /// Returns [`Error::Storage`] if any row fails to parse; a malformed row
    /// fails the whole read.
    pub fn read_all(&self) -> Result<Vec<Transaction>, Error> {
        if !self.path.exists() {
            return Ok(Vec::new());
        }

        let mut reader = csv::Reader::from_path(&self.path)?;

        reader
            .deserialize()
            .collect::<Result<Vec<Transaction>, _>>()
            .map_err(Error::from)
    }

    /// Delete the transaction with the given ID, then renumber the remaining
    /// rows via [`CsvTransactionStore::reindex`].
    ///
    /// # Errors
    /// Returns [`Error::NotFound`] if no stored transaction has `id` or the
    /// table does not exist; the table is left untouched. Returns
    /// [`Error::Storage`] on read or write failure.
    pub fn delete(&mut self, id: TransactionId) -> Result<(), Error> {
        if !self.path.exists() {
            return Err(Error::NotFound);
        }

        let transactions = self.read_all()?;
        let remaining: Vec<Transaction> = transactions
            .iter()
            .filter(|transaction| transaction.id != id)
            .cloned()
            .collect();

        if remaining.len() == transactions.len() {
            return Err(Error::NotFound);
        }

        self.rewrite(&remaining)?;
        self.reindex()
    }

    /// Rewrite every row's ID to its 1-based position in current file order,
    /// discarding prior ID values.
    ///
    /// Idempotent, and a no-op when the table does not exist.
    ///
    /// # Errors
    /// Returns [`Error::Storage`] on read or write failure.
    pub fn reindex(&mut self) -> Result<(), Error> {
        if !self.path.exists() {
            return Ok(());
        }

        let mut transactions = self.read_all()?;

        for (position, transaction) in transactions.iter_mut().enumerate() {
            transaction.id = position as TransactionId + 1;
        }

        self.rewrite(&transactions)
    }

    /// Replace the table with the given rows, header included.
    ///
    /// Writes to a temporary file next to the table and renames it into
    /// place, so the table is never observed half-written.
    fn rewrite(&self, transactions: &[Transaction]) -> Result<(), Error> {
        let temp_path = self.path.with_extension("csv.tmp");

        let mut writer = WriterBuilder::new()
            .has_headers(false)
            .from_path(&temp_path)?;
        writer.write_record(HEADER)?;

        for transaction in transactions {
            writer.serialize(transaction)?;
        }

        writer.flush()?;
        drop(writer);

        fs::rename(&temp_path, &self.path)?;

        Ok(())
    }
}
