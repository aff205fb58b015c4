//! Add command - append a student record.

use std::path::PathBuf;

use super::{open_store, require_saved};

pub fn run(
    file: PathBuf,
    name: String,
    marks: [i64; 5],
    verbose: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut store = open_store(&file, verbose)?;
    let status = store.add(&name, marks)?;
    require_saved(status, "Student added successfully.")
}
