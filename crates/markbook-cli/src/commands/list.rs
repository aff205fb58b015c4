//! List command - show every student with marks and total.

use std::path::PathBuf;

use colored::Colorize;
use markbook::{PASS_TOTAL, StudentRecord, Subject};

use super::open_store;

/// Header line for the record table.
pub fn table_header() -> String {
    let mut header = format!("{:<24}", "Name");
    for subject in Subject::ALL {
        header.push_str(&format!(" {:>8}", short_label(subject)));
    }
    header.push_str(&format!(" {:>6}", "Total"));
    header
}

/// One table row for a record.
pub fn table_row(record: &StudentRecord) -> String {
    let mut row = format!("{:<24}", record.name);
    for mark in record.marks() {
        row.push_str(&format!(" {:>8}", mark));
    }
    row.push_str(&format!(" {:>6}", record.total()));
    row
}

fn short_label(subject: Subject) -> &'static str {
    match subject {
        Subject::SocialStudies => "Social",
        other => other.label(),
    }
}

pub fn run(file: PathBuf, json_output: bool, verbose: bool) -> Result<(), Box<dyn std::error::Error>> {
    let store = open_store(&file, verbose)?;

    if json_output {
        println!("{}", serde_json::to_string_pretty(store.records())?);
        return Ok(());
    }

    if store.is_empty() {
        println!("{}", "No students available.".yellow());
        return Ok(());
    }

    println!("{}", table_header().yellow().bold());
    for record in store.records() {
        let row = table_row(record);
        if record.total() >= PASS_TOTAL {
            println!("{}", row);
        } else {
            println!("{}", row.red());
        }
    }

    Ok(())
}
