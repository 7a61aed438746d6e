//! # GraphQL Schema
//!
//! Object types, query root and mutation root over the shared [`Store`].
//!
//! Relationship fields (`student.course`, `course.student`, `grade.course`,
//! `grade.student`) take their own read lock when, and only when, they are
//! selected. No resolver holds the lock across another acquisition.
//!
//! ```graphql
//! query {
//!   course(id: 1) {
//!     name
//!     student { name lastname }
//!   }
//! }
//!
//! mutation {
//!   addGrade(grade: "A", courseId: 1, studentId: 2) { id grade }
//! }
//! ```

use async_graphql::{Context, EmptySubscription, Object, Result, Schema};
use gradebook_core::{Course, Grade, Record, RecordId, Store, Student};
use std::sync::Arc;
use tokio::sync::RwLock;

/// The store as shared between HTTP handlers and resolvers.
pub type SharedStore = Arc<RwLock<Store>>;

/// The full GraphQL schema type for Gradebook.
pub type GradebookSchema = Schema<QueryRoot, MutationRoot, EmptySubscription>;

/// Build the schema with the shared store attached as context data.
pub fn build_schema(store: SharedStore) -> GradebookSchema {
    Schema::build(QueryRoot, MutationRoot, EmptySubscription)
        .data(store)
        .finish()
}

fn shared_store<'a>(ctx: &Context<'a>) -> Result<&'a SharedStore> {
    ctx.data::<SharedStore>()
}

// =============================================================================
// OBJECT TYPES
// =============================================================================

pub struct StudentObject(pub Student);

/// Represent students
#[Object(name = "student")]
impl StudentObject {
    async fn id(&self) -> i32 {
        self.0.id.value()
    }

    async fn name(&self) -> &str {
        &self.0.name
    }

    async fn lastname(&self) -> &str {
        &self.0.lastname
    }

    async fn course_id(&self) -> i32 {
        self.0.course_id.value()
    }

    /// The course this student is enrolled in, if it exists
    async fn course(&self, ctx: &Context<'_>) -> Result<Option<CourseObject>> {
        let store = shared_store(ctx)?.read().await;
        Ok(store.course_of_student(&self.0).cloned().map(CourseObject))
    }
}

pub struct CourseObject(pub Course);

/// Represent courses
#[Object(name = "course")]
impl CourseObject {
    async fn id(&self) -> i32 {
        self.0.id.value()
    }

    async fn name(&self) -> &str {
        &self.0.name
    }

    async fn description(&self) -> &str {
        &self.0.description
    }

    /// Students enrolled in this course
    async fn student(&self, ctx: &Context<'_>) -> Result<Vec<StudentObject>> {
        let store = shared_store(ctx)?.read().await;
        Ok(store
            .students_of_course(&self.0)
            .into_iter()
            .cloned()
            .map(StudentObject)
            .collect())
    }
}

pub struct GradeObject(pub Grade);

/// Represent grades
#[Object(name = "grade")]
impl GradeObject {
    async fn id(&self) -> i32 {
        self.0.id.value()
    }

    async fn grade(&self) -> &str {
        &self.0.grade
    }

    async fn course_id(&self) -> i32 {
        self.0.course_id.value()
    }

    async fn student_id(&self) -> i32 {
        self.0.student_id.value()
    }

    /// The course this grade was given in, if it exists
    async fn course(&self, ctx: &Context<'_>) -> Result<Option<CourseObject>> {
        let store = shared_store(ctx)?.read().await;
        Ok(store.course_of_grade(&self.0).cloned().map(CourseObject))
    }

    /// The student this grade was given to, if it exists
    async fn student(&self, ctx: &Context<'_>) -> Result<Option<StudentObject>> {
        let store = shared_store(ctx)?.read().await;
        Ok(store.student_of_grade(&self.0).cloned().map(StudentObject))
    }
}

// =============================================================================
// QUERY ROOT
// =============================================================================

pub struct QueryRoot;

/// Root Query
#[Object(name = "Query")]
impl QueryRoot {
    /// List of All Students
    async fn students(&self, ctx: &Context<'_>) -> Result<Vec<StudentObject>> {
        let store = shared_store(ctx)?.read().await;
        Ok(store.students().iter().cloned().map(StudentObject).collect())
    }

    /// List of All courses
    async fn courses(&self, ctx: &Context<'_>) -> Result<Vec<CourseObject>> {
        let store = shared_store(ctx)?.read().await;
        Ok(store.courses().iter().cloned().map(CourseObject).collect())
    }

    /// List of All grades
    async fn grades(&self, ctx: &Context<'_>) -> Result<Vec<GradeObject>> {
        let store = shared_store(ctx)?.read().await;
        Ok(store.grades().iter().cloned().map(GradeObject).collect())
    }

    /// Particular student
    async fn student(&self, ctx: &Context<'_>, id: Option<i32>) -> Result<Option<StudentObject>> {
        let Some(id) = id else {
            return Ok(None);
        };
        let store = shared_store(ctx)?.read().await;
        Ok(store.student(RecordId(id)).cloned().map(StudentObject))
    }

    /// Particular course
    async fn course(&self, ctx: &Context<'_>, id: Option<i32>) -> Result<Option<CourseObject>> {
        let Some(id) = id else {
            return Ok(None);
        };
        let store = shared_store(ctx)?.read().await;
        Ok(store.course(RecordId(id)).cloned().map(CourseObject))
    }

    /// Particular grade
    async fn grade(&self, ctx: &Context<'_>, id: Option<i32>) -> Result<Option<GradeObject>> {
        let Some(id) = id else {
            return Ok(None);
        };
        let store = shared_store(ctx)?.read().await;
        Ok(store.grade(RecordId(id)).cloned().map(GradeObject))
    }
}

// =============================================================================
// MUTATION ROOT
// =============================================================================

pub struct MutationRoot;

/// Root Mutation
#[Object(name = "Mutation")]
impl MutationRoot {
    /// Add a student
    async fn add_student(
        &self,
        ctx: &Context<'_>,
        name: String,
        lastname: String,
        course_id: i32,
    ) -> Result<StudentObject> {
        let student = shared_store(ctx)?
            .write()
            .await
            .add_student(name, lastname, RecordId(course_id))
            .inspect_err(|e| {
                tracing::warn!(event = "add_rejected", kind = %Student::KIND, "{}", e);
            })?;

        tracing::info!(
            event = "student_added",
            id = student.id.value(),
            course_id,
            "Student added"
        );
        Ok(StudentObject(student))
    }

    /// Add a course
    async fn add_course(
        &self,
        ctx: &Context<'_>,
        name: String,
        description: String,
    ) -> Result<CourseObject> {
        let course = shared_store(ctx)?
            .write()
            .await
            .add_course(name, description)
            .inspect_err(|e| {
                tracing::warn!(event = "add_rejected", kind = %Course::KIND, "{}", e);
            })?;

        tracing::info!(event = "course_added", id = course.id.value(), "Course added");
        Ok(CourseObject(course))
    }

    /// Add a grade
    async fn add_grade(
        &self,
        ctx: &Context<'_>,
        grade: String,
        course_id: i32,
        student_id: i32,
    ) -> Result<GradeObject> {
        let grade = shared_store(ctx)?
            .write()
            .await
            .add_grade(grade, RecordId(course_id), RecordId(student_id))
            .inspect_err(|e| {
                tracing::warn!(event = "add_rejected", kind = %Grade::KIND, "{}", e);
            })?;

        tracing::info!(
            event = "grade_added",
            id = grade.id.value(),
            course_id,
            student_id,
            "Grade added"
        );
        Ok(GradeObject(grade))
    }

    /// Delete a student.
    async fn delete_student(&self, ctx: &Context<'_>, id: i32) -> Result<Vec<StudentObject>> {
        let removed = shared_store(ctx)?.write().await.delete_student(RecordId(id));

        tracing::info!(event = "student_deleted", id, removed = removed.len(), "Student delete");
        Ok(removed.into_iter().map(StudentObject).collect())
    }

    /// Delete a course.
    async fn delete_course(&self, ctx: &Context<'_>, id: i32) -> Result<Vec<CourseObject>> {
        let removed = shared_store(ctx)?.write().await.delete_course(RecordId(id));

        tracing::info!(event = "course_deleted", id, removed = removed.len(), "Course delete");
        Ok(removed.into_iter().map(CourseObject).collect())
    }

    /// Delete a grade.
    async fn delete_grade(&self, ctx: &Context<'_>, id: i32) -> Result<Vec<GradeObject>> {
        let removed = shared_store(ctx)?.write().await.delete_grade(RecordId(id));

        tracing::info!(event = "grade_deleted", id, removed = removed.len(), "Grade delete");
        Ok(removed.into_iter().map(GradeObject).collect())
    }
}

// =============================================================================
// TESTS
// =============================================================================
