//! Add, update, and delete operations on the record store.
//!
//! Validation and lookup failures return an error and leave the store
//! untouched. Once a mutation has been applied, the whole store is written
//! back and the outcome of that write is returned as a [`SaveStatus`].

use tracing::debug;

use crate::error::{MarkbookError, Result};
use crate::record::{StudentRecord, Subject};
use crate::store::{RecordStore, SaveStatus};

impl RecordStore {
    /// Index of the first record whose name matches exactly.
    fn position(&self, name: &str) -> Option<usize> {
        self.records.iter().position(|r| r.name == name)
    }

    /// First record whose name matches exactly.
    pub fn find(&self, name: &str) -> Option<&StudentRecord> {
        self.position(name).map(|i| &self.records[i])
    }

    /// Append a new record and persist.
    ///
    /// Marks are given in column order: maths, science, english,
    /// social studies, language.
    pub fn add(&mut self, name: &str, marks: [i64; 5]) -> Result<SaveStatus> {
        let record = StudentRecord::new(name, marks)?;
        debug!(name = %record.name, total = record.total(), "adding student");

        self.records.push(record);
        Ok(self.persist())
    }

    /// Change one subject's mark on the first record named `name`.
    ///
    /// Fails with [`MarkbookError::NotFound`], then
    /// [`MarkbookError::InvalidSubject`], then [`MarkbookError::InvalidMark`],
    /// checked in that order.
    pub fn update(&mut self, name: &str, subject: &str, mark: i64) -> Result<SaveStatus> {
        if self.position(name).is_none() {
            return Err(MarkbookError::NotFound(name.to_string()));
        }
        let subject: Subject = subject.parse()?;

        self.update_subject(name, subject, mark)
    }

    /// Change `subject` on the first record named `name` and persist.
    pub fn update_subject(
        &mut self,
        name: &str,
        subject: Subject,
        mark: i64,
    ) -> Result<SaveStatus> {
        let index = self
            .position(name)
            .ok_or_else(|| MarkbookError::NotFound(name.to_string()))?;

        self.records[index].set_mark(subject, mark)?;
        debug!(name, %subject, mark, "updated mark");

        Ok(self.persist())
    }

    /// Remove the first record named `name` and persist.
    pub fn delete(&mut self, name: &str) -> Result<SaveStatus> {
        let index = self
            .position(name)
            .ok_or_else(|| MarkbookError::NotFound(name.to_string()))?;

        let removed = self.records.remove(index);
        debug!(name = %removed.name, "deleted student");

        Ok(self.persist())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemoryStorage;

    fn store_with(records: &[(&str, [i64; 5])]) -> (RecordStore, MemoryStorage) {
        let records = records
            .iter()
            .map(|(name, marks)| StudentRecord::new(name, *marks).unwrap())
            .collect();
        let storage = MemoryStorage::with_records(records);
        let store = RecordStore::open(storage.clone()).unwrap();
        (store, storage)
    }

    #[test]
    fn test_add_appends_and_persists() {
        let (mut store, storage) = store_with(&[("Alice", [70, 80, 90, 60, 50])]);

        let status = store.add("Bob", [10, 20, 30, 40, 50]).unwrap();

        assert_eq!(status, SaveStatus::Saved);
        assert_eq!(store.len(), 2);
        assert_eq!(store.records()[1].name, "Bob");
        assert_eq!(storage.records(), store.records());
    }

    #[test]
    fn test_add_rejects_invalid_input() {
        let (mut store, storage) = store_with(&[("Alice", [70, 80, 90, 60, 50])]);

        assert!(matches!(
            store.add("", [1, 2, 3, 4, 5]),
            Err(MarkbookError::EmptyName)
        ));
        assert!(matches!(
            store.add("Bob", [1, 2, 3, 4, 101]),
            Err(MarkbookError::InvalidMark {
                subject: Subject::Language,
                value: 101
            })
        ));
        assert!(store.add("Bob", [-1, 2, 3, 4, 5]).is_err());

        assert_eq!(store.len(), 1);
        assert_eq!(storage.save_count(), 0);
    }

    #[test]
    fn test_update_changes_single_field() {
        let (mut store, _) = store_with(&[
            ("Alice", [70, 80, 90, 60, 50]),
            ("Carol", [1, 2, 3, 4, 5]),
        ]);

        store.update("Alice", "maths", 85).unwrap();

        assert_eq!(store.records()[0].marks(), [85, 80, 90, 60, 50]);
        assert_eq!(store.records()[1].marks(), [1, 2, 3, 4, 5]);
    }

    #[test]
    fn test_update_acts_on_first_match() {
        let (mut store, _) = store_with(&[
            ("Alice", [70, 80, 90, 60, 50]),
            ("Alice", [70, 80, 90, 60, 50]),
        ]);

        store.update_subject("Alice", Subject::English, 10).unwrap();

        assert_eq!(store.records()[0].english, 10);
        assert_eq!(store.records()[1].english, 90);
    }

    #[test]
    fn test_update_failures_leave_store_unchanged() {
        let (mut store, storage) = store_with(&[("Alice", [70, 80, 90, 60, 50])]);
        let before = store.records().to_vec();

        assert!(matches!(
            store.update("Bob", "maths", 50),
            Err(MarkbookError::NotFound(ref n)) if n == "Bob"
        ));
        assert!(matches!(
            store.update("Alice", "art", 50),
            Err(MarkbookError::InvalidSubject(_))
        ));
        assert!(matches!(
            store.update("Alice", "maths", 101),
            Err(MarkbookError::InvalidMark { .. })
        ));
        // Not found is reported before the subject is looked at.
        assert!(matches!(
            store.update("Bob", "art", 500),
            Err(MarkbookError::NotFound(_))
        ));

        assert_eq!(store.records(), before.as_slice());
        assert_eq!(storage.save_count(), 0);
    }

    #[test]
    fn test_update_subject_checks() {
        let (mut store, storage) = store_with(&[("Alice", [70, 80, 90, 60, 50])]);

        assert!(matches!(
            store.update_subject("Bob", Subject::Maths, 50),
            Err(MarkbookError::NotFound(_))
        ));
        assert!(matches!(
            store.update_subject("Alice", Subject::SocialStudies, -3),
            Err(MarkbookError::InvalidMark {
                subject: Subject::SocialStudies,
                value: -3
            })
        ));
        assert_eq!(storage.save_count(), 0);

        let status = store
            .update_subject("Alice", Subject::SocialStudies, 0)
            .unwrap();
        assert!(status.is_saved());
        assert_eq!(store.records()[0].social_studies, 0);
        assert_eq!(storage.records(), store.records());
    }

    #[test]
    fn test_delete() {
        let (mut store, storage) = store_with(&[
            ("Alice", [70, 80, 90, 60, 50]),
            ("Bob", [10, 20, 30, 40, 50]),
            ("Alice", [1, 1, 1, 1, 1]),
        ]);

        store.delete("Alice").unwrap();
        assert_eq!(store.len(), 2);
        assert_eq!(store.records()[0].name, "Bob");
        assert_eq!(store.records()[1].total(), 5);
        assert_eq!(storage.records().len(), 2);

        assert!(matches!(
            store.delete("Zed"),
            Err(MarkbookError::NotFound(_))
        ));
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn test_failed_save_keeps_mutation_in_memory() {
        let (mut store, storage) = store_with(&[("Alice", [70, 80, 90, 60, 50])]);
        storage.fail_saves(true);

        let status = store.add("Bob", [10, 20, 30, 40, 50]).unwrap();

        assert!(matches!(status, SaveStatus::Failed(ref reason) if reason.contains("simulated")));
        assert_eq!(store.len(), 2);
        assert_eq!(storage.records().len(), 1);
    }

    #[test]
    fn test_find() {
        let (store, _) = store_with(&[("Alice", [70, 80, 90, 60, 50])]);
        assert_eq!(store.find("Alice").map(|r| r.total()), Some(350));
        assert!(store.find("alice").is_none());
    }
}
