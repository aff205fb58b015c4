//! Analytics command - class summary over all students.

use std::path::PathBuf;

use colored::Colorize;
use markbook::Analytics;

use super::open_store;

/// Message shown when there is nothing to report on.
pub const NO_DATA: &str = "No students available.";

/// Human-readable lines for a report.
pub fn report_lines(report: &Analytics) -> Vec<String> {
    let mut lines = vec![
        format!("Topper: {}", report.topper.white().bold()),
        format!("Passed: {}", report.passed.to_string().green()),
        format!("Failed: {}", report.failed.to_string().red()),
        format!("Mean score: {:.2}", report.mean),
        format!("Lowest score: {}", report.lowest),
        format!("Highest score: {}", report.highest),
    ];

    if !report.skipped.is_empty() {
        lines.push(format!(
            "{} {} student(s) with invalid marks left out: {}",
            "Note:".yellow(),
            report.skipped.len(),
            report.skipped.join(", ")
        ));
    }

    lines
}

pub fn run(file: PathBuf, json_output: bool, verbose: bool) -> Result<(), Box<dyn std::error::Error>> {
    let store = open_store(&file, verbose)?;
    let report = store.analytics();

    if json_output {
        // `null` when there is no data
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    match report {
        Some(report) => {
            println!(
                "{} {} ({} students)",
                "Analytics for".cyan().bold(),
                file.display().to_string().white(),
                report.count
            );
            println!();
            for line in report_lines(&report) {
                println!("{}", line);
            }
        }
        None => println!("{}", NO_DATA.yellow()),
    }

    Ok(())
}
