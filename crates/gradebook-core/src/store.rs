//! # Store
//!
//! The three record collections and every operation the API performs on
//! them.
//!
//! A `Store` is an ordinary value. The server keeps one behind a lock for the
//! lifetime of the process; tests build as many fresh ones as they need.
//!
//! ## Operations
//!
//! - Queries: list a whole collection, or fetch one record by id
//! - Mutations: append a record with a fresh id, or remove records by id
//! - Relations: delegate to [`crate::resolve`]

use crate::collection::Collection;
use crate::dataset::Dataset;
use crate::resolve;
use crate::{Course, Grade, GradebookError, RecordId, Student};

/// In-memory students, courses and grades.
#[derive(Debug, Clone, Default)]
pub struct Store {
    students: Collection<Student>,
    courses: Collection<Course>,
    grades: Collection<Grade>,
}

/// Collection sizes and id counters at a point in time. A `None` counter
/// means that collection has run out of identifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StoreMetrics {
    pub student_count: usize,
    pub course_count: usize,
    pub grade_count: usize,
    pub next_student_id: Option<RecordId>,
    pub next_course_id: Option<RecordId>,
    pub next_grade_id: Option<RecordId>,
}

impl Store {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store seeded from a dataset.
    #[must_use]
    pub fn from_dataset(dataset: Dataset) -> Self {
        Self {
            students: Collection::from_records(dataset.students),
            courses: Collection::from_records(dataset.courses),
            grades: Collection::from_records(dataset.grades),
        }
    }

    /// Current sizes and counters.
    #[must_use]
    pub fn metrics(&self) -> StoreMetrics {
        StoreMetrics {
            student_count: self.students.len(),
            course_count: self.courses.len(),
            grade_count: self.grades.len(),
            next_student_id: self.students.next_id(),
            next_course_id: self.courses.next_id(),
            next_grade_id: self.grades.next_id(),
        }
    }

    // =========================================================================
    // QUERIES
    // =========================================================================

    /// All students, in insertion order.
    #[must_use]
    pub fn students(&self) -> &[Student] {
        self.students.all()
    }

    /// All courses, in insertion order.
    #[must_use]
    pub fn courses(&self) -> &[Course] {
        self.courses.all()
    }

    /// All grades, in insertion order.
    #[must_use]
    pub fn grades(&self) -> &[Grade] {
        self.grades.all()
    }

    #[must_use]
    pub fn student(&self, id: RecordId) -> Option<&Student> {
        self.students.get(id)
    }

    #[must_use]
    pub fn course(&self, id: RecordId) -> Option<&Course> {
        self.courses.get(id)
    }

    #[must_use]
    pub fn grade(&self, id: RecordId) -> Option<&Grade> {
        self.grades.get(id)
    }

    // =========================================================================
    // MUTATIONS
    // =========================================================================

    /// Append a student. `course_id` is not checked against the courses.
    pub fn add_student(
        &mut self,
        name: impl Into<String>,
        lastname: impl Into<String>,
        course_id: RecordId,
    ) -> Result<Student, GradebookError> {
        self.students
            .insert_with(|id| Student::new(id, name, lastname, course_id))
            .cloned()
    }

    /// Append a course.
    pub fn add_course(
        &mut self,
        name: impl Into<String>,
        description: impl Into<String>,
    ) -> Result<Course, GradebookError> {
        self.courses
            .insert_with(|id| Course::new(id, name, description))
            .cloned()
    }

    /// Append a grade. Neither foreign key is checked.
    pub fn add_grade(
        &mut self,
        grade: impl Into<String>,
        course_id: RecordId,
        student_id: RecordId,
    ) -> Result<Grade, GradebookError> {
        self.grades
            .insert_with(|id| Grade::new(id, grade, course_id, student_id))
            .cloned()
    }

    /// Remove every student with `id`. Grades and courses are untouched.
    pub fn delete_student(&mut self, id: RecordId) -> Vec<Student> {
        self.students.remove(id)
    }

    /// Remove every course with `id`. Enrolled students keep their `course_id`.
    pub fn delete_course(&mut self, id: RecordId) -> Vec<Course> {
        self.courses.remove(id)
    }

    pub fn delete_grade(&mut self, id: RecordId) -> Vec<Grade> {
        self.grades.remove(id)
    }

    // =========================================================================
    // RELATIONS
    // =========================================================================

    #[must_use]
    pub fn course_of_student(&self, student: &Student) -> Option<&Course> {
        resolve::course_of_student(student, self.courses.all())
    }

    #[must_use]
    pub fn students_of_course(&self, course: &Course) -> Vec<&Student> {
        resolve::students_of_course(course, self.students.all())
    }

    #[must_use]
    pub fn course_of_grade(&self, grade: &Grade) -> Option<&Course> {
        resolve::course_of_grade(grade, self.courses.all())
    }

    #[must_use]
    pub fn student_of_grade(&self, grade: &Grade) -> Option<&Student> {
        resolve::student_of_grade(grade, self.students.all())
    }
}

// =============================================================================
// TESTS
// =============================================================================
