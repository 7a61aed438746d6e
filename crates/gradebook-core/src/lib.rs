//! # gradebook-core
//!
//! The in-memory record layer behind the Gradebook API - THE LOGIC.
//!
//! Three collections (students, courses, grades) are seeded once from JSON
//! files and then changed only by add and delete operations. Relationships
//! between records are plain foreign-key integers resolved by linear scan.
//!
//! ## Architectural Constraints
//!
//! - Synchronous: no async, no network dependencies
//! - No global state: callers own the [`Store`] and decide how to share it
//! - No referential integrity: a dangling foreign key resolves to nothing

// =============================================================================
// MODULES
// =============================================================================

pub mod collection;
pub mod dataset;
pub mod primitives;
pub mod resolve;
pub mod store;
pub mod types;

// =============================================================================
// RE-EXPORTS
// =============================================================================

pub use collection::{Collection, find_by_id};
pub use dataset::Dataset;
pub use store::{Store, StoreMetrics};
pub use types::{Course, Grade, GradebookError, Record, RecordId, RecordKind, Student};
