//! Mock implementations of the `RowStore` port.

use async_trait::async_trait;
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

use crate::{
    app_error::{AppError, AppResult},
    application::use_cases::waitlist::RowStore,
};

// ============================================================================
// InMemoryRowStore
// ============================================================================

/// Append-only row store kept in memory. Ranges are recorded but not
/// interpreted; every read returns every row.
#[derive(Default)]
pub struct InMemoryRowStore {
    rows: Mutex<Vec<Vec<String>>>,
    appended_ranges: Mutex<Vec<String>>,
    read_calls: AtomicUsize,
}

impl InMemoryRowStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_rows(rows: Vec<Vec<String>>) -> Self {
        Self {
            rows: Mutex::new(rows),
            ..Self::default()
        }
    }

    pub fn rows(&self) -> Vec<Vec<String>> {
        self.rows.lock().unwrap().clone()
    }

    pub fn appended_ranges(&self) -> Vec<String> {
        self.appended_ranges.lock().unwrap().clone()
    }

    pub fn read_calls(&self) -> usize {
        self.read_calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl RowStore for InMemoryRowStore {
    async fn read_column(&self, _range: &str) -> AppResult<Vec<Vec<String>>> {
        self.read_calls.fetch_add(1, Ordering::SeqCst);
        Ok(self.rows.lock().unwrap().clone())
    }

    async fn append_row(&self, range: &str, values: Vec<String>) -> AppResult<()> {
        self.appended_ranges.lock().unwrap().push(range.to_string());
        self.rows.lock().unwrap().push(values);
        Ok(())
    }
}

// ============================================================================
// FailingRowStore
// ============================================================================

/// Row store whose calls fail the way an unreachable sheet would.
pub struct FailingRowStore {
    fail_reads: bool,
}

impl Default for FailingRowStore {
    fn default() -> Self {
        Self { fail_reads: true }
    }
}

impl FailingRowStore {
    /// Reads succeed with an empty sheet; appends fail.
    pub fn append_only() -> Self {
        Self { fail_reads: false }
    }
}

#[async_trait]
impl RowStore for FailingRowStore {
    async fn read_column(&self, _range: &str) -> AppResult<Vec<Vec<String>>> {
        if self.fail_reads {
            return Err(AppError::Upstream("sheet unavailable".into()));
        }
        Ok(vec![])
    }

    async fn append_row(&self, _range: &str, _values: Vec<String>) -> AppResult<()> {
        Err(AppError::Upstream("sheet unavailable".into()))
    }
}
