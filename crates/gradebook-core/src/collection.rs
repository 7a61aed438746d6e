//! # Record Collection
//!
//! An insertion-ordered sequence of records of one kind, plus the counter
//! that hands out identifiers for new records.
//!
//! Identifiers come from a monotonic counter, not from the collection
//! length. Removing a record never lowers the counter, so an identifier is
//! never issued twice within a process. Once the counter passes `i32::MAX`
//! the collection refuses further inserts.

use crate::types::{GradebookError, Record, RecordId};

/// Insertion-ordered records of a single kind.
#[derive(Debug, Clone)]
pub struct Collection<T: Record> {
    records: Vec<T>,
    /// `None` once every identifier has been issued.
    next_id: Option<RecordId>,
}

impl<T: Record> Default for Collection<T> {
    fn default() -> Self {
        Self {
            records: Vec::new(),
            next_id: Some(RecordId::FIRST),
        }
    }
}

impl<T: Record> Collection<T> {
    /// Create an empty collection.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a collection seeded with existing records.
    ///
    /// The counter starts one past the largest identifier present, or at
    /// [`RecordId::FIRST`] when that would be lower. A record carrying
    /// `i32::MAX` leaves the counter exhausted.
    #[must_use]
    pub fn from_records(records: Vec<T>) -> Self {
        let next_id = match records.iter().map(Record::id).max() {
            Some(max) => max.checked_next().map(|id| id.max(RecordId::FIRST)),
            None => Some(RecordId::FIRST),
        };
        Self { records, next_id }
    }

    /// All records, in insertion order.
    #[must_use]
    pub fn all(&self) -> &[T] {
        &self.records
    }

    /// The first record with the given identifier.
    #[must_use]
    pub fn get(&self, id: RecordId) -> Option<&T> {
        find_by_id(&self.records, id)
    }

    /// Build a record with the next identifier, append it and return it.
    ///
    /// Fails without touching the collection once identifiers run out.
    pub fn insert_with(
        &mut self,
        build: impl FnOnce(RecordId) -> T,
    ) -> Result<&T, GradebookError> {
        let id = self
            .next_id
            .ok_or(GradebookError::IdSpaceExhausted(T::KIND))?;
        self.next_id = id.checked_next();
        let index = self.records.len();
        self.records.push(build(id));
        Ok(&self.records[index])
    }

    /// Remove every record with the given identifier, returning them in
    /// their original order.
    pub fn remove(&mut self, id: RecordId) -> Vec<T> {
        let (removed, kept): (Vec<T>, Vec<T>) = std::mem::take(&mut self.records)
            .into_iter()
            .partition(|record| record.id() == id);
        self.records = kept;
        removed
    }

    /// The identifier the next inserted record will receive, if any.
    #[must_use]
    pub fn next_id(&self) -> Option<RecordId> {
        self.next_id
    }

    /// Number of records.
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the collection holds no records.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

/// First record in `records` whose identifier equals `id`.
#[must_use]
pub fn find_by_id<T: Record>(records: &[T], id: RecordId) -> Option<&T> {
    records.iter().find(|record| record.id() == id)
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Course, RecordKind};

    fn course(id: i32, name: &str) -> Course {
        Course::new(RecordId(id), name, "")
    }

    #[test]
    fn empty_collection_starts_at_one() {
        let mut courses: Collection<Course> = Collection::new();
        assert!(courses.is_empty());

        let created = courses
            .insert_with(|id| Course::new(id, "Math", "Algebra"))
            .expect("insert");
        assert_eq!(created.id, RecordId(1));
        assert_eq!(courses.len(), 1);
    }

    #[test]
    fn seeded_counter_follows_max_id() {
        let courses = Collection::from_records(vec![course(3, "a"), course(7, "b"), course(5, "c")]);
        assert_eq!(courses.next_id(), Some(RecordId(8)));
    }

    #[test]
    fn seeded_counter_never_below_first() {
        let courses = Collection::from_records(vec![course(-4, "neg")]);
        assert_eq!(courses.next_id(), Some(RecordId::FIRST));
    }

    #[test]
    fn remove_returns_all_matches_in_order() {
        let mut courses =
            Collection::from_records(vec![course(1, "a"), course(2, "b"), course(1, "c")]);

        let removed = courses.remove(RecordId(1));

        let names: Vec<_> = removed.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["a", "c"]);
        assert_eq!(courses.all(), &[course(2, "b")]);
    }

    #[test]
    fn remove_missing_is_noop() {
        let mut courses = Collection::from_records(vec![course(1, "a"), course(2, "b")]);

        assert!(courses.remove(RecordId(9999)).is_empty());
        assert_eq!(courses.len(), 2);
    }

    #[test]
    fn delete_then_insert_does_not_reuse_id() {
        let mut courses = Collection::from_records(vec![course(1, "a"), course(2, "b")]);

        courses.remove(RecordId(2));
        let created = courses
            .insert_with(|id| Course::new(id, "c", ""))
            .expect("insert");

        assert_eq!(created.id, RecordId(3));
    }

    #[test]
    fn max_id_in_dataset_exhausts_counter() {
        let mut courses = Collection::from_records(vec![course(i32::MAX, "last")]);
        assert_eq!(courses.next_id(), None);

        let err = courses
            .insert_with(|id| Course::new(id, "dup", ""))
            .expect_err("no ids left");

        assert!(matches!(
            err,
            GradebookError::IdSpaceExhausted(RecordKind::Course)
        ));
        assert_eq!(courses.len(), 1);
    }

    #[test]
    fn last_id_is_issued_once() {
        let mut courses = Collection::from_records(vec![course(i32::MAX - 1, "a")]);

        let created = courses
            .insert_with(|id| Course::new(id, "b", ""))
            .expect("insert");
        assert_eq!(created.id, RecordId(i32::MAX));

        assert!(courses.insert_with(|id| Course::new(id, "c", "")).is_err());
        assert_eq!(courses.len(), 2);
    }

    #[test]
    fn get_returns_first_match() {
        let courses = Collection::from_records(vec![course(1, "first"), course(1, "second")]);
        assert_eq!(courses.get(RecordId(1)).map(|c| c.name.as_str()), Some("first"));
        assert!(courses.get(RecordId(2)).is_none());
    }
}
