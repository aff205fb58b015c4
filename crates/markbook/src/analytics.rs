//! Class-wide report over the records in a store.

use serde::Serialize;
use tracing::warn;

use crate::record::{StudentRecord, Subject, validate_mark};
use crate::store::RecordStore;

/// Minimum total (out of 500) counted as a pass.
pub const PASS_TOTAL: i64 = 200;

/// Summary statistics over every record with valid marks.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Analytics {
    /// Name of the first record with the highest total.
    pub topper: String,
    /// Records with a total of at least [`PASS_TOTAL`].
    pub passed: usize,
    /// Records below [`PASS_TOTAL`].
    pub failed: usize,
    /// Mean total, rounded to two decimal places.
    pub mean: f64,
    pub lowest: i64,
    pub highest: i64,
    /// Records included in the report.
    pub count: usize,
    /// Names of records left out because a mark was invalid.
    pub skipped: Vec<String>,
}

fn has_valid_marks(record: &StudentRecord) -> bool {
    Subject::ALL
        .into_iter()
        .all(|subject| validate_mark(subject, record.mark(subject)).is_ok())
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Compute the report. Returns `None` when no record has valid marks.
pub fn analyze(records: &[StudentRecord]) -> Option<Analytics> {
    let mut skipped = Vec::new();
    let mut topper: Option<(&str, i64)> = None;
    let mut lowest = i64::MAX;
    let mut sum = 0i64;
    let mut count = 0usize;
    let mut passed = 0usize;

    for record in records {
        if !has_valid_marks(record) {
            warn!(name = %record.name, "skipping record with invalid marks");
            skipped.push(record.name.clone());
            continue;
        }

        let total = record.total();
        count += 1;
        sum += total;
        lowest = lowest.min(total);
        if total >= PASS_TOTAL {
            passed += 1;
        }
        // Strictly greater keeps the earliest record on ties.
        if topper.is_none_or(|(_, best)| total > best) {
            topper = Some((record.name.as_str(), total));
        }
    }

    let (topper, highest) = topper?;

    Some(Analytics {
        topper: topper.to_string(),
        passed,
        failed: count - passed,
        mean: round2(sum as f64 / count as f64),
        lowest,
        highest,
        count,
        skipped,
    })
}

impl RecordStore {
    /// Report over the current records, or `None` when there is no data.
    pub fn analytics(&self) -> Option<Analytics> {
        analyze(&self.records)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(name: &str, marks: [i64; 5]) -> StudentRecord {
        StudentRecord::new(name, marks).unwrap()
    }

    #[test]
    fn test_analyze_extremes() {
        let records = vec![
            record("Alice", [100, 100, 100, 100, 100]),
            record("Bob", [0, 0, 0, 0, 0]),
        ];
        let report = analyze(&records).unwrap();

        assert_eq!(report.topper, "Alice");
        assert_eq!(report.highest, 500);
        assert_eq!(report.lowest, 0);
        assert_eq!(report.passed, 1);
        assert_eq!(report.failed, 1);
        assert_eq!(report.mean, 250.0);
        assert_eq!(report.count, 2);
        assert!(report.skipped.is_empty());
    }

    #[test]
    fn test_analyze_empty() {
        assert_eq!(analyze(&[]), None);
    }

    #[test]
    fn test_pass_threshold_is_inclusive() {
        let records = vec![
            record("Exactly", [40, 40, 40, 40, 40]),
            record("Below", [40, 40, 40, 40, 39]),
        ];
        let report = analyze(&records).unwrap();
        assert_eq!(report.passed, 1);
        assert_eq!(report.failed, 1);
    }

    #[test]
    fn test_topper_tie_goes_to_first() {
        let records = vec![
            record("Low", [10, 10, 10, 10, 10]),
            record("First", [90, 90, 90, 90, 90]),
            record("Second", [90, 90, 90, 90, 90]),
        ];
        assert_eq!(analyze(&records).unwrap().topper, "First");
    }

    #[test]
    fn test_mean_rounds_to_two_places() {
        let records = vec![
            record("A", [1, 0, 0, 0, 0]),
            record("B", [0, 0, 0, 0, 0]),
            record("C", [0, 0, 0, 0, 0]),
        ];
        // 1 / 3
        assert_eq!(analyze(&records).unwrap().mean, 0.33);

        let records = vec![
            record("A", [2, 0, 0, 0, 0]),
            record("B", [0, 0, 0, 0, 0]),
            record("C", [0, 0, 0, 0, 0]),
        ];
        // 2 / 3
        assert_eq!(analyze(&records).unwrap().mean, 0.67);
    }

    #[test]
    fn test_invalid_records_are_skipped() {
        let mut broken = record("Broken", [100, 100, 100, 100, 100]);
        broken.maths = -10;

        let records = vec![broken, record("Carol", [50, 50, 50, 50, 50])];
        let report = analyze(&records).unwrap();

        assert_eq!(report.topper, "Carol");
        assert_eq!(report.count, 1);
        assert_eq!(report.skipped, vec!["Broken".to_string()]);
    }

    #[test]
    fn test_all_invalid_is_no_data() {
        let mut broken = record("Broken", [1, 1, 1, 1, 1]);
        broken.language = 250;
        assert_eq!(analyze(&[broken]), None);
    }
}
