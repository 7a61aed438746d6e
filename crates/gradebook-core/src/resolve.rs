//! # Entity Resolvers
//!
//! Typed accessors from one record to the records its foreign keys point at.
//!
//! Every resolver is a linear scan over the slice it is given. A dangling
//! foreign key resolves to `None` (or an empty list), never an error.

use crate::collection::find_by_id;
use crate::{Course, Grade, Student};

/// The course a student is enrolled in.
#[must_use]
pub fn course_of_student<'a>(student: &Student, courses: &'a [Course]) -> Option<&'a Course> {
    find_by_id(courses, student.course_id)
}

/// Every student enrolled in a course, in collection order.
#[must_use]
pub fn students_of_course<'a>(course: &Course, students: &'a [Student]) -> Vec<&'a Student> {
    students
        .iter()
        .filter(|student| student.course_id == course.id)
        .collect()
}

/// The course a grade was awarded for.
#[must_use]
pub fn course_of_grade<'a>(grade: &Grade, courses: &'a [Course]) -> Option<&'a Course> {
    find_by_id(courses, grade.course_id)
}

/// The student a grade was awarded to.
#[must_use]
pub fn student_of_grade<'a>(grade: &Grade, students: &'a [Student]) -> Option<&'a Student> {
    find_by_id(students, grade.student_id)
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::RecordId;

    fn courses() -> Vec<Course> {
        vec![
            Course::new(RecordId(1), "Math", "Algebra"),
            Course::new(RecordId(2), "History", "Rome"),
        ]
    }

    fn students() -> Vec<Student> {
        vec![
            Student::new(RecordId(1), "Ann", "Lee", RecordId(2)),
            Student::new(RecordId(2), "Bob", "Ray", RecordId(1)),
            Student::new(RecordId(3), "Cid", "Moe", RecordId(2)),
            Student::new(RecordId(4), "Dee", "Fox", RecordId(42)),
        ]
    }

    #[test]
    fn student_course_resolves() {
        let courses = courses();
        let students = students();

        let course = course_of_student(&students[0], &courses).expect("course");
        assert_eq!(course.name, "History");
    }

    #[test]
    fn dangling_course_id_is_absent() {
        let courses = courses();
        let students = students();

        assert!(course_of_student(&students[3], &courses).is_none());
    }

    #[test]
    fn course_students_preserve_order() {
        let courses = courses();
        let students = students();

        let enrolled: Vec<_> = students_of_course(&courses[1], &students)
            .into_iter()
            .map(|s| s.name.as_str())
            .collect();
        assert_eq!(enrolled, vec!["Ann", "Cid"]);
    }

    #[test]
    fn course_without_students_is_empty() {
        let lonely = Course::new(RecordId(9), "Latin", "");
        assert!(students_of_course(&lonely, &students()).is_empty());
    }

    #[test]
    fn grade_resolves_both_sides() {
        let courses = courses();
        let students = students();
        let grade = Grade::new(RecordId(1), "B+", RecordId(1), RecordId(2));

        assert_eq!(
            course_of_grade(&grade, &courses).map(|c| c.name.as_str()),
            Some("Math")
        );
        assert_eq!(
            student_of_grade(&grade, &students).map(|s| s.name.as_str()),
            Some("Bob")
        );
    }

    #[test]
    fn grade_with_unknown_student_is_absent() {
        let grade = Grade::new(RecordId(1), "C", RecordId(1), RecordId(77));
        assert!(student_of_grade(&grade, &students()).is_none());
    }
}
