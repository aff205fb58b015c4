//! Delete command - remove a student record.

use std::path::PathBuf;

use super::{open_store, require_saved};

pub fn run(file: PathBuf, name: String, verbose: bool) -> Result<(), Box<dyn std::error::Error>> {
    let mut store = open_store(&file, verbose)?;
    let status = store.delete(&name)?;
    require_saved(status, "Student deleted successfully.")
}
