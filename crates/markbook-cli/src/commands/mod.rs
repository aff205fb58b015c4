//! CLI command implementations.

pub mod add;
pub mod analytics;
pub mod delete;
pub mod list;
pub mod menu;
pub mod update;

use std::path::Path;

use colored::Colorize;
use markbook::{RecordStore, SaveStatus};

/// Open the store and tell the user about anything odd in the file.
pub fn open_store(file: &Path, verbose: bool) -> Result<RecordStore, Box<dyn std::error::Error>> {
    let store = RecordStore::open_csv(file)?;

    if let Some(notice) = store.load_notice() {
        eprintln!("{} {}", "Note:".yellow(), notice);
    }

    let skipped = store.skipped_rows();
    if !skipped.is_empty() {
        eprintln!(
            "{} skipped {} invalid row(s) in {}",
            "Warning:".yellow().bold(),
            skipped.len(),
            file.display()
        );
        if verbose {
            for row in skipped {
                eprintln!("  {} {}", "•".dimmed(), row);
            }
        }
    }

    Ok(store)
}

/// Turn a save outcome into a command result.
pub fn require_saved(status: SaveStatus, success: &str) -> Result<(), Box<dyn std::error::Error>> {
    match status {
        SaveStatus::Saved => {
            println!("{}", success.green());
            Ok(())
        }
        SaveStatus::Failed(reason) => {
            Err(format!("change applied but could not be saved: {}", reason).into())
        }
    }
}
