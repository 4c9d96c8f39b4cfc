//! Record store implementation
//!
//! Vec-backed store with incremental sorted insertion.

use tracing::debug;

use crate::error::{Result, RollbookError};
use crate::record::{Date, Student};

/// Sorted collection of student records
#[derive(Debug, Clone, Default)]
pub struct RecordStore {
    /// Records in non-decreasing surname order
    records: Vec<Student>,
}

impl RecordStore {
    /// Create a new empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a record, keeping surname order
    ///
    /// The record becomes the head when the store is empty or its surname
    /// sorts before the head's. Otherwise it goes in front of the first
    /// record after the head whose surname is not less than its own.
    ///
    /// Space is reserved before anything moves, so on
    /// `AllocationFailure` the store is left exactly as it was.
    pub fn insert(&mut self, record: Student) -> Result<()> {
        let position = self.insert_position(record.surname());

        self.records.try_reserve(1).map_err(|e| {
            RollbookError::AllocationFailure(format!(
                "not enough memory for '{}': {}",
                record.surname(),
                e
            ))
        })?;

        debug!(surname = record.surname(), position, "inserting record");
        self.records.insert(position, record);
        Ok(())
    }

    /// First record whose surname matches exactly (case-sensitive)
    pub fn find(&self, surname: &str) -> Option<&Student> {
        self.records.iter().find(|r| r.surname() == surname)
    }

    /// Remove every record matching `predicate` in one pass
    ///
    /// Survivors keep their relative order. Returns the number removed.
    pub fn delete_where<F>(&mut self, mut predicate: F) -> usize
    where
        F: FnMut(&Student) -> bool,
    {
        let before = self.records.len();
        self.records.retain(|record| !predicate(record));
        let removed = before - self.records.len();

        debug!(removed, remaining = self.records.len(), "deleted records");
        removed
    }

    /// Mean age in years on `reference`, 0.0 when empty
    pub fn average_age(&self, reference: &Date) -> f64 {
        if self.records.is_empty() {
            return 0.0;
        }

        let total: i64 = self
            .records
            .iter()
            .map(|r| i64::from(r.age_at(reference)))
            .sum();
        total as f64 / self.records.len() as f64
    }

    /// Iterate over records in current sorted order
    pub fn iter(&self) -> Iter<'_> {
        Iter {
            inner: self.records.iter(),
        }
    }

    /// Get the record count
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Check if the store holds no records
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// The record with the smallest surname
    pub fn first(&self) -> Option<&Student> {
        self.records.first()
    }

    /// Drop every record
    pub fn clear(&mut self) {
        self.records.clear();
    }

    // =========================================================================
    // Private Helpers
    // =========================================================================

    /// Slot a record with `surname` goes into
    fn insert_position(&self, surname: &str) -> usize {
        match self.records.first() {
            None => 0,
            Some(head) if head.surname() > surname => 0,
            Some(_) => {
                // Scan from the head while the next record sorts strictly before
                let mut position = 1;
                while position < self.records.len()
                    && self.records[position].surname() < surname
                {
                    position += 1;
                }
                position
            }
        }
    }
}

impl<'a> IntoIterator for &'a RecordStore {
    type Item = &'a Student;
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Iterator over store records in surname order
pub struct Iter<'a> {
    inner: std::slice::Iter<'a, Student>,
}

impl<'a> Iterator for Iter<'a> {
    type Item = &'a Student;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl ExactSizeIterator for Iter<'_> {}
