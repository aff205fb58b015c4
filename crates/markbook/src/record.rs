//! Student records and the subjects they are marked in.

use serde::{Deserialize, Serialize};

use crate::error::{MarkbookError, Result};

/// Lowest accepted mark (inclusive).
pub const MIN_MARK: i64 = 0;

/// Highest accepted mark (inclusive).
pub const MAX_MARK: i64 = 100;

/// Header of the name column in the backing file.
pub const NAME_COLUMN: &str = "student_name";

/// One of the five marked subjects, in backing-file column order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Subject {
    Maths,
    Science,
    English,
    SocialStudies,
    Language,
}

impl Subject {
    /// All subjects in column order.
    pub const ALL: [Subject; 5] = [
        Subject::Maths,
        Subject::Science,
        Subject::English,
        Subject::SocialStudies,
        Subject::Language,
    ];

    /// Short name used on the command line and in prompts.
    pub fn name(&self) -> &'static str {
        match self {
            Subject::Maths => "maths",
            Subject::Science => "science",
            Subject::English => "english",
            Subject::SocialStudies => "social_studies",
            Subject::Language => "language",
        }
    }

    /// Column header in the backing file.
    pub fn column(&self) -> &'static str {
        match self {
            Subject::Maths => "maths_marks",
            Subject::Science => "science_marks",
            Subject::English => "english_marks",
            Subject::SocialStudies => "social_studies_marks",
            Subject::Language => "language_marks",
        }
    }

    /// Human-readable label.
    pub fn label(&self) -> &'static str {
        match self {
            Subject::Maths => "Maths",
            Subject::Science => "Science",
            Subject::English => "English",
            Subject::SocialStudies => "Social Studies",
            Subject::Language => "Language",
        }
    }
}

impl std::str::FromStr for Subject {
    type Err = MarkbookError;

    fn from_str(s: &str) -> Result<Self> {
        let normalized = s.trim().to_lowercase().replace([' ', '-'], "_");
        let key = normalized.strip_suffix("_marks").unwrap_or(&normalized);
        match key {
            "maths" | "math" => Ok(Subject::Maths),
            "science" => Ok(Subject::Science),
            "english" => Ok(Subject::English),
            "social_studies" => Ok(Subject::SocialStudies),
            "language" => Ok(Subject::Language),
            _ => Err(MarkbookError::InvalidSubject(s.trim().to_string())),
        }
    }
}

impl std::fmt::Display for Subject {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Column headers of the backing file, in order.
pub fn columns() -> [&'static str; 6] {
    [
        NAME_COLUMN,
        Subject::Maths.column(),
        Subject::Science.column(),
        Subject::English.column(),
        Subject::SocialStudies.column(),
        Subject::Language.column(),
    ]
}

/// Check a mark against the inclusive range.
pub fn validate_mark(subject: Subject, value: i64) -> Result<i64> {
    if (MIN_MARK..=MAX_MARK).contains(&value) {
        Ok(value)
    } else {
        Err(MarkbookError::InvalidMark { subject, value })
    }
}

/// Trim a name and reject it if nothing is left.
pub fn validate_name(name: &str) -> Result<String> {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        Err(MarkbookError::EmptyName)
    } else {
        Ok(trimmed.to_string())
    }
}

/// A student's name and their five subject marks.
///
/// Field names serialize to the backing-file column headers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StudentRecord {
    #[serde(rename = "student_name")]
    pub name: String,
    #[serde(rename = "maths_marks")]
    pub maths: i64,
    #[serde(rename = "science_marks")]
    pub science: i64,
    #[serde(rename = "english_marks")]
    pub english: i64,
    #[serde(rename = "social_studies_marks")]
    pub social_studies: i64,
    #[serde(rename = "language_marks")]
    pub language: i64,
}

impl StudentRecord {
    /// Create a validated record. Marks are given in column order.
    pub fn new(name: &str, marks: [i64; 5]) -> Result<Self> {
        let name = validate_name(name)?;
        for (subject, value) in Subject::ALL.into_iter().zip(marks) {
            validate_mark(subject, value)?;
        }

        let [maths, science, english, social_studies, language] = marks;
        Ok(Self {
            name,
            maths,
            science,
            english,
            social_studies,
            language,
        })
    }

    /// Mark for a single subject.
    pub fn mark(&self, subject: Subject) -> i64 {
        match subject {
            Subject::Maths => self.maths,
            Subject::Science => self.science,
            Subject::English => self.english,
            Subject::SocialStudies => self.social_studies,
            Subject::Language => self.language,
        }
    }

    fn mark_mut(&mut self, subject: Subject) -> &mut i64 {
        match subject {
            Subject::Maths => &mut self.maths,
            Subject::Science => &mut self.science,
            Subject::English => &mut self.english,
            Subject::SocialStudies => &mut self.social_studies,
            Subject::Language => &mut self.language,
        }
    }

    /// Replace one subject's mark, rejecting out-of-range values.
    pub fn set_mark(&mut self, subject: Subject, value: i64) -> Result<()> {
        *self.mark_mut(subject) = validate_mark(subject, value)?;
        Ok(())
    }

    /// All five marks in column order.
    pub fn marks(&self) -> [i64; 5] {
        Subject::ALL.map(|subject| self.mark(subject))
    }

    /// Sum of the five marks.
    pub fn total(&self) -> i64 {
        self.marks().iter().sum()
    }

    /// Check the name and every mark against the record invariants.
    ///
    /// Fields are public, so a record built by hand may not hold them.
    pub fn validate(&self) -> Result<()> {
        validate_name(&self.name)?;
        for subject in Subject::ALL {
            validate_mark(subject, self.mark(subject))?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_subject_from_str() {
        assert_eq!("maths".parse::<Subject>().unwrap(), Subject::Maths);
        assert_eq!("  Science ".parse::<Subject>().unwrap(), Subject::Science);
        assert_eq!("ENGLISH".parse::<Subject>().unwrap(), Subject::English);
        assert_eq!(
            "social_studies".parse::<Subject>().unwrap(),
            Subject::SocialStudies
        );
        assert_eq!(
            "Social Studies".parse::<Subject>().unwrap(),
            Subject::SocialStudies
        );
        assert_eq!(
            "social-studies".parse::<Subject>().unwrap(),
            Subject::SocialStudies
        );
        assert_eq!(
            "language_marks".parse::<Subject>().unwrap(),
            Subject::Language
        );
    }

    #[test]
    fn test_subject_from_str_rejects_unknown() {
        let err = "art".parse::<Subject>().unwrap_err();
        assert!(matches!(err, MarkbookError::InvalidSubject(ref s) if s == "art"));
        assert!("".parse::<Subject>().is_err());
    }

    #[test]
    fn test_columns_order() {
        assert_eq!(
            columns(),
            [
                "student_name",
                "maths_marks",
                "science_marks",
                "english_marks",
                "social_studies_marks",
                "language_marks"
            ]
        );
    }

    #[test]
    fn test_new_trims_name() {
        let record = StudentRecord::new("  Alice ", [70, 80, 90, 60, 50]).unwrap();
        assert_eq!(record.name, "Alice");
        assert_eq!(record.total(), 350);
    }

    #[test]
    fn test_new_rejects_empty_name() {
        let err = StudentRecord::new("   ", [1, 2, 3, 4, 5]).unwrap_err();
        assert!(matches!(err, MarkbookError::EmptyName));
    }

    #[test]
    fn test_new_rejects_out_of_range_marks() {
        let err = StudentRecord::new("Alice", [70, 101, 90, 60, 50]).unwrap_err();
        assert!(matches!(
            err,
            MarkbookError::InvalidMark {
                subject: Subject::Science,
                value: 101
            }
        ));

        let err = StudentRecord::new("Alice", [70, 80, 90, 60, -1]).unwrap_err();
        assert!(matches!(
            err,
            MarkbookError::InvalidMark {
                subject: Subject::Language,
                value: -1
            }
        ));
    }

    #[test]
    fn test_range_is_inclusive() {
        assert!(StudentRecord::new("Edge", [0, 100, 0, 100, 0]).is_ok());
    }

    #[test]
    fn test_set_mark_touches_one_field() {
        let mut record = StudentRecord::new("Alice", [70, 80, 90, 60, 50]).unwrap();
        record.set_mark(Subject::SocialStudies, 99).unwrap();
        assert_eq!(record.marks(), [70, 80, 90, 99, 50]);

        assert!(record.set_mark(Subject::Maths, 150).is_err());
        assert_eq!(record.maths, 70);
    }

    #[test]
    fn test_validate_hand_built_record() {
        let record = StudentRecord {
            name: "Broken".to_string(),
            maths: -5,
            science: 0,
            english: 0,
            social_studies: 0,
            language: 0,
        };
        assert!(record.validate().is_err());
    }
}
