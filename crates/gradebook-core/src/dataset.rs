//! # Dataset Loading
//!
//! Reads the three JSON record files a store is seeded from.
//!
//! Each file holds a JSON array of records with camelCase field names:
//!
//! ```text
//! data/
//! ├── student.json   [{"id":1,"name":"Ann","lastname":"Lee","courseId":1}, ...]
//! ├── course.json    [{"id":1,"name":"Math","description":"Algebra"}, ...]
//! └── grade.json     [{"id":1,"grade":"A","courseId":1,"studentId":1}, ...]
//! ```
//!
//! Only field presence and types are checked. Duplicate identifiers and
//! dangling foreign keys are loaded as-is.

use crate::primitives::{COURSE_FILE, GRADE_FILE, MAX_DATASET_FILE_SIZE, STUDENT_FILE};
use crate::{Course, Grade, GradebookError, Student};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// The initial contents of a store.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dataset {
    pub students: Vec<Student>,
    pub courses: Vec<Course>,
    pub grades: Vec<Grade>,
}

impl Dataset {
    /// Load `student.json`, `course.json` and `grade.json` from a directory.
    pub fn from_dir(dir: impl AsRef<Path>) -> Result<Self, GradebookError> {
        let dir = dir.as_ref();
        Ok(Self {
            students: read_records(&dir.join(STUDENT_FILE))?,
            courses: read_records(&dir.join(COURSE_FILE))?,
            grades: read_records(&dir.join(GRADE_FILE))?,
        })
    }

    /// Total number of records across all three collections.
    #[must_use]
    pub fn record_count(&self) -> usize {
        self.students.len() + self.courses.len() + self.grades.len()
    }
}

/// Read one JSON array of records, rejecting oversized files up front.
fn read_records<T: DeserializeOwned>(path: &Path) -> Result<Vec<T>, GradebookError> {
    let metadata = std::fs::metadata(path).map_err(|e| {
        GradebookError::IoError(format!("Cannot read '{}': {}", path.display(), e))
    })?;

    if metadata.len() > MAX_DATASET_FILE_SIZE {
        return Err(GradebookError::FileTooLarge {
            path: path.display().to_string(),
            size: metadata.len(),
            max: MAX_DATASET_FILE_SIZE,
        });
    }

    let contents = std::fs::read(path).map_err(|e| {
        GradebookError::IoError(format!("Cannot read '{}': {}", path.display(), e))
    })?;

    serde_json::from_slice(&contents).map_err(|e| {
        GradebookError::DeserializationError(format!("{}: {}", path.display(), e))
    })
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::RecordId;
    use tempfile::tempdir;

    fn write(dir: &Path, name: &str, contents: &str) {
        std::fs::write(dir.join(name), contents).expect("write");
    }

    #[test]
    fn loads_all_three_files() {
        let dir = tempdir().expect("tempdir");
        write(
            dir.path(),
            STUDENT_FILE,
            r#"[{"id":1,"name":"Ann","lastname":"Lee","courseId":1}]"#,
        );
        write(
            dir.path(),
            COURSE_FILE,
            r#"[{"id":1,"name":"Math","description":"Algebra"}]"#,
        );
        write(
            dir.path(),
            GRADE_FILE,
            r#"[{"id":1,"grade":"A","courseId":1,"studentId":1}]"#,
        );

        let dataset = Dataset::from_dir(dir.path()).expect("load");

        assert_eq!(dataset.record_count(), 3);
        assert_eq!(
            dataset.students[0],
            Student::new(RecordId(1), "Ann", "Lee", RecordId(1))
        );
        assert_eq!(dataset.grades[0].grade, "A");
    }

    #[test]
    fn missing_file_is_io_error() {
        let dir = tempdir().expect("tempdir");
        write(dir.path(), STUDENT_FILE, "[]");
        write(dir.path(), COURSE_FILE, "[]");

        let err = Dataset::from_dir(dir.path()).expect_err("grade.json is missing");
        assert!(matches!(err, GradebookError::IoError(_)));
    }

    #[test]
    fn missing_field_is_rejected() {
        let dir = tempdir().expect("tempdir");
        write(dir.path(), STUDENT_FILE, r#"[{"id":1,"name":"Ann","courseId":1}]"#);
        write(dir.path(), COURSE_FILE, "[]");
        write(dir.path(), GRADE_FILE, "[]");

        let err = Dataset::from_dir(dir.path()).expect_err("lastname is missing");
        assert!(matches!(err, GradebookError::DeserializationError(_)));
    }

    #[test]
    fn empty_arrays_load() {
        let dir = tempdir().expect("tempdir");
        for name in [STUDENT_FILE, COURSE_FILE, GRADE_FILE] {
            write(dir.path(), name, "[]");
        }

        let dataset = Dataset::from_dir(dir.path()).expect("load");
        assert_eq!(dataset, Dataset::default());
    }
}
