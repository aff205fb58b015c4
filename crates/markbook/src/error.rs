//! Error types for the Markbook library.

use std::path::PathBuf;
use thiserror::Error;

use crate::record::Subject;

/// Main error type for Markbook operations.
#[derive(Debug, Error)]
pub enum MarkbookError {
    /// Student name is empty after trimming whitespace.
    #[error("Student name must not be empty")]
    EmptyName,

    /// A mark falls outside the inclusive 0-100 range.
    #[error("Invalid mark for {subject}: {value} (must be between 0 and 100)")]
    InvalidMark { subject: Subject, value: i64 },

    /// Subject name is not one of the five recognized subjects.
    #[error(
        "Invalid subject '{0}'. Use: maths, science, english, social_studies, or language."
    )]
    InvalidSubject(String),

    /// No record with the given name exists.
    #[error("Student '{0}' not found")]
    NotFound(String),

    /// Backing file lacks one or more required column headers.
    #[error("Missing required columns: {}", .0.join(", "))]
    MissingColumns(Vec<String>),

    /// Error reading or writing a file.
    #[error("IO error for '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Error from the CSV library.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}

/// Result type alias for Markbook operations.
pub type Result<T> = std::result::Result<T, MarkbookError>;
