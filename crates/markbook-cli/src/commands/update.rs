//! Update command - change one subject mark.

use std::path::PathBuf;

use super::{open_store, require_saved};

pub fn run(
    file: PathBuf,
    name: String,
    subject: String,
    mark: i64,
    verbose: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut store = open_store(&file, verbose)?;
    let status = store.update(&name, &subject, mark)?;
    require_saved(status, "Student updated successfully.")
}
