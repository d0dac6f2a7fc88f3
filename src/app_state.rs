//! Implements a struct that holds the state of the REST server.

use std::sync::{Arc, Mutex, MutexGuard};

use crate::{Error, stores::CsvTransactionStore};

/// The state of the REST server.
///
/// The transaction store is process-wide mutable state. All access goes
/// through a mutex so mutating requests (a delete racing an append, two
/// deletes) cannot interleave at the file level and corrupt the table.
#[derive(Debug, Clone)]
pub struct AppState {
    store: Arc<Mutex<CsvTransactionStore>>,
}

impl AppState {
    /// Create a new [AppState] that owns `store`.
    ///
    /// This function will initialize the backing table, creating it with its
    /// header row if it does not exist yet.
    ///
    /// # Errors
    /// Returns an error if the table cannot be created.
    pub fn new(store: CsvTransactionStore) -> Result<Self, Error> {
        store.initialize()?;

        Ok(Self {
            store: Arc::new(Mutex::new(store)),
        })
    }

    /// Acquire exclusive access to the transaction store.
    ///
    /// # Errors
    /// Returns [`Error::StoreLock`] if the lock was poisoned by a panicking
    /// handler.
    pub fn store(&self) -> Result<MutexGuard<'_, CsvTransactionStore>, Error> {
        self.store.lock().map_err(|_| Error::StoreLock)
    }
}
