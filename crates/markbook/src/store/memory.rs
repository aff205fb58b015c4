//! In-memory storage backend for testing.

use std::cell::RefCell;
use std::io::ErrorKind;
use std::rc::Rc;

use crate::error::{MarkbookError, Result};
use crate::record::StudentRecord;

use super::storage::{LoadedRecords, Storage};

#[derive(Debug, Default)]
struct MemoryState {
    records: Vec<StudentRecord>,
    fail_saves: bool,
    load_error: Option<ErrorKind>,
    save_count: usize,
}

/// Storage that keeps records in memory.
///
/// Clones share the same contents, so a test can hand one clone to a
/// [`RecordStore`](super::RecordStore) and inspect what was saved through
/// another.
#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    state: Rc<RefCell<MemoryState>>,
}

impl MemoryStorage {
    /// Create an empty backend.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a backend pre-populated with records.
    pub fn with_records(records: Vec<StudentRecord>) -> Self {
        let storage = Self::new();
        storage.state.borrow_mut().records = records;
        storage
    }

    /// Make subsequent saves fail (or succeed again).
    pub fn fail_saves(&self, fail: bool) {
        self.state.borrow_mut().fail_saves = fail;
    }

    /// Make subsequent loads fail with an I/O error of `kind`, or succeed
    /// again with `None`.
    pub fn fail_loads(&self, kind: Option<ErrorKind>) {
        self.state.borrow_mut().load_error = kind;
    }

    /// Records as of the last successful save.
    pub fn records(&self) -> Vec<StudentRecord> {
        self.state.borrow().records.clone()
    }

    /// Number of successful saves.
    pub fn save_count(&self) -> usize {
        self.state.borrow().save_count
    }
}

impl Storage for MemoryStorage {
    fn load(&self) -> Result<LoadedRecords> {
        if let Some(kind) = self.state.borrow().load_error {
            return Err(MarkbookError::Io {
                path: "memory".into(),
                source: std::io::Error::new(kind, "simulated read failure"),
            });
        }

        Ok(LoadedRecords {
            records: self.records(),
            ..LoadedRecords::default()
        })
    }

    fn save(&self, records: &[StudentRecord]) -> Result<()> {
        let mut state = self.state.borrow_mut();
        if state.fail_saves {
            return Err(MarkbookError::Io {
                path: "memory".into(),
                source: std::io::Error::new(
                    ErrorKind::PermissionDenied,
                    "simulated write failure",
                ),
            });
        }

        state.records = records.to_vec();
        state.save_count += 1;
        Ok(())
    }

    fn describe(&self) -> String {
        "memory".to_string()
    }
}
