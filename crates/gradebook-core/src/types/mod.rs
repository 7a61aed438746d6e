//! # Core Type Definitions
//!
//! This module contains the record types held by the store:
//! - The shared identifier (`RecordId`)
//! - The three record kinds (`Student`, `Course`, `Grade`)
//! - The `Record` trait that abstracts over them
//! - Error types (`GradebookError`)
//!
//! Foreign keys (`course_id`, `student_id`) are plain identifiers. Nothing
//! checks that the referenced record exists.

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

// =============================================================================
// IDENTIFIERS
// =============================================================================

/// Identifier of a record within its own collection.
///
/// Stored as `i32` so it maps one-to-one onto the GraphQL `Int` scalar.
/// Serialized as a bare integer.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default,
)]
#[serde(transparent)]
pub struct RecordId(pub i32);

impl RecordId {
    /// The first identifier handed out by an empty collection.
    pub const FIRST: Self = Self(1);

    /// The identifier that follows this one, or `None` past `i32::MAX`.
    #[must_use]
    pub const fn checked_next(self) -> Option<Self> {
        match self.0.checked_add(1) {
            Some(next) => Some(Self(next)),
            None => None,
        }
    }

    /// Get the raw identifier value.
    #[must_use]
    pub const fn value(self) -> i32 {
        self.0
    }
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// =============================================================================
// RECORD TRAIT
// =============================================================================

/// Which collection a record belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RecordKind {
    Student,
    Course,
    Grade,
}

impl RecordKind {
    /// Lowercase name, as used in GraphQL type names and error messages.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Student => "student",
            Self::Course => "course",
            Self::Grade => "grade",
        }
    }
}

impl fmt::Display for RecordKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A record that can live in a [`Collection`](crate::Collection).
pub trait Record: Clone {
    /// The collection this record kind is stored in.
    const KIND: RecordKind;

    /// The record's identifier.
    fn id(&self) -> RecordId;
}

// =============================================================================
// RECORDS
// =============================================================================

/// A student enrolled in (at most) one course.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Student {
    pub id: RecordId,
    pub name: String,
    pub lastname: String,
    pub course_id: RecordId,
}

impl Student {
    /// Create a new student.
    #[must_use]
    pub fn new(
        id: RecordId,
        name: impl Into<String>,
        lastname: impl Into<String>,
        course_id: RecordId,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            lastname: lastname.into(),
            course_id,
        }
    }
}

impl Record for Student {
    const KIND: RecordKind = RecordKind::Student;

    fn id(&self) -> RecordId {
        self.id
    }
}

/// A course.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Course {
    pub id: RecordId,
    pub name: String,
    pub description: String,
}

impl Course {
    /// Create a new course.
    #[must_use]
    pub fn new(id: RecordId, name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            description: description.into(),
        }
    }
}

impl Record for Course {
    const KIND: RecordKind = RecordKind::Course;

    fn id(&self) -> RecordId {
        self.id
    }
}

/// A grade awarded to a student for a course.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Grade {
    pub id: RecordId,
    pub grade: String,
    pub course_id: RecordId,
    pub student_id: RecordId,
}

impl Grade {
    /// Create a new grade.
    #[must_use]
    pub fn new(
        id: RecordId,
        grade: impl Into<String>,
        course_id: RecordId,
        student_id: RecordId,
    ) -> Self {
        Self {
            id,
            grade: grade.into(),
            course_id,
            student_id,
        }
    }
}

impl Record for Grade {
    const KIND: RecordKind = RecordKind::Grade;

    fn id(&self) -> RecordId {
        self.id
    }
}

// =============================================================================
// ERROR TYPES
// =============================================================================

/// Errors that can occur in the Gradebook system.
///
/// Lookups and deletes that match nothing are not errors; they return
/// `None` or an empty `Vec`.
#[derive(Debug, Error)]
pub enum GradebookError {
    /// An I/O error occurred.
    #[error("I/O error: {0}")]
    IoError(String),

    /// A dataset file could not be decoded.
    #[error("Deserialization error: {0}")]
    DeserializationError(String),

    /// A dataset file exceeds the size limit.
    #[error("File {path} is {size} bytes, maximum allowed is {max} bytes")]
    FileTooLarge { path: String, size: u64, max: u64 },

    /// Invalid or unreadable configuration.
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// Every identifier up to `i32::MAX` has been issued for this kind.
    #[error("No {0} identifiers left to issue")]
    IdSpaceExhausted(RecordKind),
}

// =============================================================================
// TESTS
// =============================================================================
