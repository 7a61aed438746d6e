//! # API Response Types
//!
//! JSON bodies for the non-GraphQL endpoints.

use gradebook_core::{RecordId, StoreMetrics};
use serde::{Deserialize, Serialize};

// =============================================================================
// HEALTH RESPONSE
// =============================================================================

/// Health check response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
}

impl Default for HealthResponse {
    fn default() -> Self {
        Self {
            status: "ok".to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        }
    }
}

// =============================================================================
// STATUS RESPONSE
// =============================================================================

/// Collection sizes and the ids the next records will receive (`null` once a
/// collection has run out of ids).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusResponse {
    pub students: usize,
    pub courses: usize,
    pub grades: usize,
    pub next_student_id: Option<i32>,
    pub next_course_id: Option<i32>,
    pub next_grade_id: Option<i32>,
}

impl From<StoreMetrics> for StatusResponse {
    fn from(metrics: StoreMetrics) -> Self {
        Self {
            students: metrics.student_count,
            courses: metrics.course_count,
            grades: metrics.grade_count,
            next_student_id: metrics.next_student_id.map(RecordId::value),
            next_course_id: metrics.next_course_id.map(RecordId::value),
            next_grade_id: metrics.next_grade_id.map(RecordId::value),
        }
    }
}
