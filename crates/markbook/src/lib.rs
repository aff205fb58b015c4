//! Markbook: a file-backed manager for student mark records.
//!
//! Each record holds a student's name and five subject marks (0-100). The
//! records live in memory in a [`RecordStore`] and are written back to a CSV
//! file after every successful change.
//!
//! # Core Principles
//!
//! - **Validated input**: a record never enters the store with a blank name
//!   or an out-of-range mark
//! - **Whole-file persistence**: every mutation rewrites the backing file
//! - **Forgiving load**: a missing file or malformed rows never stop startup
//!
//! # Example
//!
//! ```no_run
//! use markbook::RecordStore;
//!
//! let mut store = RecordStore::open_csv("students.csv").unwrap();
//! store.add("Alice", [70, 80, 90, 60, 50]).unwrap();
//! store.update("Alice", "maths", 85).unwrap();
//!
//! let report = store.analytics().expect("at least one student");
//! println!("Topper: {} ({} passed)", report.topper, report.passed);
//! ```

pub mod analytics;
pub mod error;
pub mod record;
pub mod store;

mod operations;

pub use analytics::{Analytics, PASS_TOTAL, analyze};
pub use error::{MarkbookError, Result};
pub use record::{MAX_MARK, MIN_MARK, StudentRecord, Subject};
pub use store::{
    CsvStorage, LoadedRecords, MemoryStorage, RecordStore, SaveStatus, SkippedRow, Storage,
};
