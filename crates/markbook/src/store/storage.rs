//! Storage backend trait and load results.

use crate::error::Result;
use crate::record::StudentRecord;

/// A row of the backing file that could not become a record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedRow {
    /// Line number in the backing file (header is line 1).
    pub line: u64,
    /// Student name, if the row had a usable one.
    pub name: Option<String>,
    /// Why the row was rejected.
    pub reason: String,
}

impl std::fmt::Display for SkippedRow {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.name {
            Some(name) => write!(f, "line {} ({}): {}", self.line, name, self.reason),
            None => write!(f, "line {}: {}", self.line, self.reason),
        }
    }
}

/// Records read from a backend together with load diagnostics.
#[derive(Debug, Clone, Default)]
pub struct LoadedRecords {
    /// Records that passed validation, in file order.
    pub records: Vec<StudentRecord>,
    /// Rows that were skipped.
    pub skipped: Vec<SkippedRow>,
    /// File-level condition that left the store empty (missing file, bad headers).
    pub notice: Option<String>,
}

impl LoadedRecords {
    /// An empty load explained by a notice.
    pub fn empty_with_notice(notice: impl Into<String>) -> Self {
        Self {
            records: Vec::new(),
            skipped: Vec::new(),
            notice: Some(notice.into()),
        }
    }
}

/// Where records are read from and written to.
///
/// Implementations report raw failures; recovery (empty store on a missing
/// file, boolean save results) happens in [`RecordStore`](super::RecordStore).
pub trait Storage {
    /// Read every record. Malformed rows go to [`LoadedRecords::skipped`].
    fn load(&self) -> Result<LoadedRecords>;

    /// Replace the stored contents with `records`.
    fn save(&self, records: &[StudentRecord]) -> Result<()>;

    /// Short description used in diagnostics.
    fn describe(&self) -> String;
}
