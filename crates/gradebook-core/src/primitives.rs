//! # Primitives
//!
//! Fixed constants for dataset loading.

/// File name of the student records inside a data directory.
pub const STUDENT_FILE: &str = "student.json";

/// File name of the course records inside a data directory.
pub const COURSE_FILE: &str = "course.json";

/// File name of the grade records inside a data directory.
pub const GRADE_FILE: &str = "grade.json";

/// Maximum size of a single dataset file (16 MiB).
///
/// Checked against file metadata before the file is read.
pub const MAX_DATASET_FILE_SIZE: u64 = 16 * 1024 * 1024;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn file_names_are_distinct() {
        assert_ne!(STUDENT_FILE, COURSE_FILE);
        assert_ne!(COURSE_FILE, GRADE_FILE);
        assert_ne!(STUDENT_FILE, GRADE_FILE);
    }
}
