//! In-memory row sources for exercising the service without a browser.

use std::collections::VecDeque;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use shared_types::{ExtractionError, RowSource, RowSourceProvider};

/// Serves a fixed list of rows, counting opened and released sessions.
pub struct StaticRowProvider {
    rows: Vec<String>,
    fail_after_rows: bool,
    pub opened: AtomicUsize,
    pub released: Arc<AtomicUsize>,
    pub last_limit: AtomicUsize,
}

impl StaticRowProvider {
    pub fn new(rows: &[&str]) -> Self {
        Self {
            rows: rows.iter().map(|row| row.to_string()).collect(),
            fail_after_rows: false,
            opened: AtomicUsize::new(0),
            released: Arc::new(AtomicUsize::new(0)),
            last_limit: AtomicUsize::new(0),
        }
    }

    /// Yields `rows`, then fails instead of reporting exhaustion.
    pub fn failing(rows: &[&str]) -> Self {
        Self {
            fail_after_rows: true,
            ..Self::new(rows)
        }
    }
}

impl RowSourceProvider for StaticRowProvider {
    fn open(&self, limit: usize) -> Result<Box<dyn RowSource>, ExtractionError> {
        self.opened.fetch_add(1, Ordering::SeqCst);
        self.last_limit.store(limit, Ordering::SeqCst);

        Ok(Box::new(VecRowSource {
            rows: self.rows.iter().cloned().collect(),
            fail_when_exhausted: self.fail_after_rows,
            released: self.released.clone(),
        }))
    }
}

/// A source that can never be opened, like a browser that fails to launch.
pub struct UnavailableRowProvider;

impl RowSourceProvider for UnavailableRowProvider {
    fn open(&self, _limit: usize) -> Result<Box<dyn RowSource>, ExtractionError> {
        Err(ExtractionError::Source(
            "Failed to launch headless Chrome".to_string(),
        ))
    }
}

struct VecRowSource {
    rows: VecDeque<String>,
    fail_when_exhausted: bool,
    released: Arc<AtomicUsize>,
}

impl RowSource for VecRowSource {
    fn next_row(&mut self) -> Result<Option<String>, ExtractionError> {
        match self.rows.pop_front() {
            Some(row) => Ok(Some(row)),
            None if self.fail_when_exhausted => Err(ExtractionError::Source(
                "Failed to read table row: connection closed".to_string(),
            )),
            None => Ok(None),
        }
    }
}

impl Drop for VecRowSource {
    fn drop(&mut self) {
        self.released.fetch_add(1, Ordering::SeqCst);
    }
}
