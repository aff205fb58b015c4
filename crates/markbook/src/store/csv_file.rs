//! CSV file backend.

use std::fs::{self, File};
use std::io::{BufWriter, Read, Write};
use std::num::IntErrorKind;
use std::path::{Path, PathBuf};

use crate::error::{MarkbookError, Result};
use crate::record::{self, NAME_COLUMN, StudentRecord, Subject};

use super::storage::{LoadedRecords, SkippedRow, Storage};

/// Stores records in a comma-separated file with a header row.
#[derive(Debug, Clone)]
pub struct CsvStorage {
    path: PathBuf,
}

impl CsvStorage {
    /// Create a backend for the file at `path`. The file need not exist.
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    /// Path of the backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn io_error(&self, source: std::io::Error) -> MarkbookError {
        MarkbookError::Io {
            path: self.path.clone(),
            source,
        }
    }
}

impl Storage for CsvStorage {
    fn load(&self) -> Result<LoadedRecords> {
        let file = File::open(&self.path).map_err(|e| self.io_error(e))?;
        read_records(file)
    }

    fn save(&self, records: &[StudentRecord]) -> Result<()> {
        // Create parent directory if needed
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent).map_err(|e| MarkbookError::Io {
                    path: parent.to_path_buf(),
                    source: e,
                })?;
            }
        }

        let file = File::create(&self.path).map_err(|e| self.io_error(e))?;
        let mut writer = BufWriter::new(file);
        write_records(&mut writer, records)?;
        writer.flush().map_err(|e| self.io_error(e))?;

        Ok(())
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}

/// Positions of the required columns within a header row.
struct ColumnPositions {
    name: usize,
    marks: [usize; 5],
}

fn locate_columns(headers: &csv::StringRecord) -> Result<ColumnPositions> {
    let find = |column: &str| headers.iter().position(|h| h == column);

    let missing: Vec<String> = record::columns()
        .into_iter()
        .filter(|&column| find(column).is_none())
        .map(str::to_string)
        .collect();
    if !missing.is_empty() {
        return Err(MarkbookError::MissingColumns(missing));
    }

    let mut marks = [0; 5];
    for (slot, subject) in marks.iter_mut().zip(Subject::ALL) {
        *slot = find(subject.column()).unwrap_or_default();
    }

    Ok(ColumnPositions {
        name: find(NAME_COLUMN).unwrap_or_default(),
        marks,
    })
}

/// Parse CSV data with a header row into records.
///
/// Rows with a blank name, a missing field, a non-numeric mark, a mark
/// outside 0-100, or bytes that are not UTF-8 are skipped and reported. Columns are matched by header
/// name; extra columns are ignored.
pub fn read_records<R: Read>(reader: R) -> Result<LoadedRecords> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .trim(csv::Trim::Headers)
        .from_reader(reader);

    let positions = locate_columns(reader.headers()?)?;
    let mut loaded = LoadedRecords::default();

    for result in reader.records() {
        let row = match result {
            Ok(row) => row,
            Err(e) if e.is_io_error() => return Err(e.into()),
            Err(e) => {
                let line = e.position().map(|p| p.line()).unwrap_or_default();
                loaded.skipped.push(SkippedRow {
                    line,
                    name: None,
                    reason: format!("unreadable row: {}", e),
                });
                continue;
            }
        };

        let line = row.position().map(|p| p.line()).unwrap_or_default();
        match parse_row(&row, &positions) {
            Ok(record) => loaded.records.push(record),
            Err(reason) => loaded.skipped.push(SkippedRow {
                line,
                name: row
                    .get(positions.name)
                    .map(str::trim)
                    .filter(|name| !name.is_empty())
                    .map(str::to_string),
                reason,
            }),
        }
    }

    Ok(loaded)
}

fn parse_row(
    row: &csv::StringRecord,
    positions: &ColumnPositions,
) -> std::result::Result<StudentRecord, String> {
    let name = row.get(positions.name).unwrap_or_default();
    let name = record::validate_name(name).map_err(|e| e.to_string())?;

    let mut marks = [0i64; 5];
    for ((mark, subject), index) in marks.iter_mut().zip(Subject::ALL).zip(positions.marks) {
        let raw = row
            .get(index)
            .ok_or_else(|| format!("missing {}", subject.column()))?
            .trim();
        let value: i64 = raw.parse().map_err(|e: std::num::ParseIntError| match e.kind() {
            IntErrorKind::PosOverflow | IntErrorKind::NegOverflow => {
                format!("out of range {} '{}'", subject.column(), raw)
            }
            _ => format!("non-numeric {} '{}'", subject.column(), raw),
        })?;
        *mark = record::validate_mark(subject, value).map_err(|e| e.to_string())?;
    }

    StudentRecord::new(&name, marks).map_err(|e| e.to_string())
}

/// Write a header row and one row per record in fixed column order.
pub fn write_records<W: Write>(writer: W, records: &[StudentRecord]) -> Result<()> {
    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(writer);

    writer.write_record(record::columns())?;
    for record in records {
        writer.serialize(record)?;
    }
    writer.flush().map_err(csv::Error::from)?;

    Ok(())
}
