//! The route handlers of the API, one module per endpoint group.

pub mod status;
pub mod summary;
pub mod transaction;
pub mod transactions;

#[cfg(test)]
pub(crate) mod test_server {
    use axum_test::TestServer;

    use crate::{AppState, build_router, stores::CsvTransactionStore, test_utils::TempCsv};

    /// Spin up a test server over a fresh temp CSV table.
    ///
    /// The returned [TempCsv] must be kept alive for the duration of the
    /// test; dropping it removes the table.
    pub(crate) fn test_server() -> (TestServer, TempCsv) {
        let temp = TempCsv::new();
        let state = AppState::new(CsvTransactionStore::new(temp.path()))
            .expect("could not create app state");
        let server = TestServer::new(build_router(state));

        (server, temp)
    }
}
