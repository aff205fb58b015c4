//! The record store: in-memory records kept in sync with a backing file.
//!
//! Records are loaded once when the store is opened and written back in full
//! after every successful mutation.
//!
//! ```text
//! students.csv  --load-->  RecordStore { records }  --save-->  students.csv
//! ```
//!
//! # Usage
//!
//! ```no_run
//! use markbook::RecordStore;
//!
//! let mut store = RecordStore::open_csv("students.csv").unwrap();
//! store.add("Alice", [70, 80, 90, 60, 50]).unwrap();
//!
//! if let Some(report) = store.analytics() {
//!     println!("Topper: {}", report.topper);
//! }
//! ```

mod csv_file;
mod memory;
mod storage;

pub use csv_file::{CsvStorage, read_records, write_records};
pub use memory::MemoryStorage;
pub use storage::{LoadedRecords, SkippedRow, Storage};

use std::io::ErrorKind;
use std::path::Path;

use tracing::{error, info, warn};

use crate::error::{MarkbookError, Result};
use crate::record::StudentRecord;

/// Outcome of persisting the store after a mutation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SaveStatus {
    /// The backing file now matches memory.
    Saved,
    /// The mutation applied in memory but could not be written.
    Failed(String),
}

impl SaveStatus {
    pub fn is_saved(&self) -> bool {
        matches!(self, SaveStatus::Saved)
    }
}

/// Load records from a backend, recovering from the conditions that
/// should leave the store empty rather than stop the program.
///
/// A missing file, an unreadable file, and a file without the required
/// headers all produce an empty result with a notice. Other failures are
/// returned as errors.
pub fn load(storage: &dyn Storage) -> Result<LoadedRecords> {
    let source = storage.describe();

    let loaded = match storage.load() {
        Ok(loaded) => loaded,
        Err(MarkbookError::Io { source: e, .. }) if e.kind() == ErrorKind::NotFound => {
            info!(file = %source, "backing file not found, starting with an empty store");
            return Ok(LoadedRecords::empty_with_notice(format!(
                "File {} not found. Starting with an empty student list.",
                source
            )));
        }
        Err(MarkbookError::Io { source: e, .. }) if e.kind() == ErrorKind::PermissionDenied => {
            warn!(file = %source, error = %e, "backing file unreadable, starting with an empty store");
            return Ok(LoadedRecords::empty_with_notice(format!(
                "File {} could not be read ({}). Starting with an empty student list.",
                source, e
            )));
        }
        Err(e @ MarkbookError::MissingColumns(_)) => {
            warn!(file = %source, error = %e, "backing file has no usable header");
            return Ok(LoadedRecords::empty_with_notice(format!(
                "File {}: {}. Starting with an empty student list.",
                source, e
            )));
        }
        Err(e) => return Err(e),
    };

    for row in &loaded.skipped {
        warn!(file = %source, line = row.line, reason = %row.reason, "skipping invalid row");
    }
    info!(
        file = %source,
        records = loaded.records.len(),
        skipped = loaded.skipped.len(),
        "loaded student records"
    );

    Ok(loaded)
}

/// Ordered collection of student records bound to a storage backend.
pub struct RecordStore {
    pub(crate) records: Vec<StudentRecord>,
    storage: Box<dyn Storage>,
    skipped: Vec<SkippedRow>,
    notice: Option<String>,
}

impl RecordStore {
    /// Open a store over any backend, loading its records.
    pub fn open(storage: impl Storage + 'static) -> Result<Self> {
        let loaded = load(&storage)?;

        Ok(Self {
            records: loaded.records,
            storage: Box::new(storage),
            skipped: loaded.skipped,
            notice: loaded.notice,
        })
    }

    /// Open a store backed by a CSV file.
    pub fn open_csv(path: impl AsRef<Path>) -> Result<Self> {
        Self::open(CsvStorage::new(path))
    }

    /// Records in insertion order.
    pub fn records(&self) -> &[StudentRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Rows skipped while loading.
    pub fn skipped_rows(&self) -> &[SkippedRow] {
        &self.skipped
    }

    /// File-level condition reported while loading, if any.
    pub fn load_notice(&self) -> Option<&str> {
        self.notice.as_deref()
    }

    /// Where the records are persisted.
    pub fn location(&self) -> String {
        self.storage.describe()
    }

    /// Overwrite the backing store with the current records.
    ///
    /// Returns false on failure; the error is logged, not raised.
    pub fn save(&self) -> bool {
        self.persist().is_saved()
    }

    pub(crate) fn persist(&self) -> SaveStatus {
        match self.storage.save(&self.records) {
            Ok(()) => {
                info!(file = %self.storage.describe(), records = self.records.len(), "saved student records");
                SaveStatus::Saved
            }
            Err(e) => {
                error!(file = %self.storage.describe(), error = %e, "failed to save student records");
                SaveStatus::Failed(e.to_string())
            }
        }
    }
}

impl std::fmt::Debug for RecordStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RecordStore")
            .field("location", &self.storage.describe())
            .field("records", &self.records)
            .finish()
    }
}
