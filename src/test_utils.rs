//! Helpers for tests that need a throwaway CSV table on disk.

use std::{
    env, fs,
    path::{Path, PathBuf},
    sync::atomic::{AtomicU64, Ordering},
};

/// A unique path for a test's CSV table, removed again when dropped.
///
/// Tests run in parallel, so each gets its own file under the OS temp
/// directory, made unique by the process ID and a counter.
pub struct TempCsv {
    path: PathBuf,
}

impl TempCsv {
    /// Reserve a fresh path. The file itself is not created.
    pub fn new() -> Self {
        static COUNTER: AtomicU64 = AtomicU64::new(0);
        let count = COUNTER.fetch_add(1, Ordering::Relaxed);

        let path = env::temp_dir().join(format!(
            "spendlog-test-{}-{}.csv",
            std::process::id(),
            count
        ));

        Self { path }
    }

    /// The path of the table.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Drop for TempCsv {
    fn drop(&mut self) {
        let _ = fs::remove_file(&self.path);
        let _ = fs::remove_file(self.path.with_extension("csv.tmp"));
    }
}
