//! # CLI Command Implementations
//!
//! This module contains the actual implementations of CLI commands.

use crate::api::{self, SharedStore, build_schema};
use crate::config::Config;
use gradebook_core::{Dataset, GradebookError, RecordId, Store};
use std::sync::Arc;
use tokio::sync::RwLock;

// =============================================================================
// SERVER COMMAND
// =============================================================================

/// Start the HTTP server.
pub async fn cmd_server(
    mut config: Config,
    host: Option<String>,
    port: Option<u16>,
) -> Result<(), GradebookError> {
    if let Some(host) = host {
        config.server.host = host;
    }
    if let Some(port) = port {
        config.server.port = port;
    }

    let store = load_store(&config)?;
    let metrics = store.metrics();

    println!("Gradebook GraphQL Server Starting...");
    println!();
    println!("Configuration:");
    println!("  Host:     {}", config.server.host);
    println!("  Port:     {}", config.server.port);
    println!("  Data:     {:?}", config.data.dir);
    println!(
        "  Records:  {} students, {} courses, {} grades",
        metrics.student_count, metrics.course_count, metrics.grade_count
    );
    println!();
    println!("Endpoints:");
    println!("  POST /graphql - Execute a query or mutation");
    if config.server.graphiql {
        println!("  GET  /graphql - GraphiQL explorer");
    }
    println!("  GET  /status  - Collection sizes");
    println!("  GET  /health  - Health check");
    println!();
    println!("Press Ctrl+C to stop");
    println!();

    api::run_server(&config.server, store).await
}

// =============================================================================
// STATUS COMMAND
// =============================================================================

/// Show dataset sizes.
pub fn cmd_status(config: &Config, json_mode: bool) -> Result<(), GradebookError> {
    let store = load_store(config)?;
    let metrics = store.metrics();

    if json_mode {
        let output = serde_json::json!({
            "data_dir": config.data.dir.to_string_lossy(),
            "students": metrics.student_count,
            "courses": metrics.course_count,
            "grades": metrics.grade_count,
            "next_ids": {
                "student": metrics.next_student_id.map(RecordId::value),
                "course": metrics.next_course_id.map(RecordId::value),
                "grade": metrics.next_grade_id.map(RecordId::value)
            }
        });
        println!(
            "{}",
            serde_json::to_string_pretty(&output).unwrap_or_default()
        );
        return Ok(());
    }

    println!("Gradebook Dataset Status");
    println!("========================");
    println!("Data: {:?}", config.data.dir);
    println!();
    println!(
        "Students: {} (next id {})",
        metrics.student_count,
        next_id_label(metrics.next_student_id)
    );
    println!(
        "Courses:  {} (next id {})",
        metrics.course_count,
        next_id_label(metrics.next_course_id)
    );
    println!(
        "Grades:   {} (next id {})",
        metrics.grade_count,
        next_id_label(metrics.next_grade_id)
    );

    Ok(())
}

fn next_id_label(id: Option<RecordId>) -> String {
    id.map_or_else(|| "exhausted".to_string(), |id| id.to_string())
}

// =============================================================================
// SCHEMA COMMAND
// =============================================================================

/// Print the schema in SDL form.
pub fn cmd_schema() {
    let store: SharedStore = Arc::new(RwLock::new(Store::new()));
    println!("{}", build_schema(store).sdl());
}

// =============================================================================
// QUERY COMMAND
// =============================================================================

/// Run one GraphQL document against the dataset and print the response.
///
/// Mutations apply to the in-memory copy only and are gone when the command
/// exits.
pub async fn cmd_query(
    config: &Config,
    document: &str,
    variables: Option<&str>,
) -> Result<(), GradebookError> {
    let request = build_request(document, variables)?;
    let store = load_store(config)?;
    let schema = build_schema(Arc::new(RwLock::new(store)));

    let response = schema.execute(request).await;
    if response.is_err() {
        tracing::warn!("Query returned {} error(s)", response.errors.len());
    }

    let output = serde_json::to_string_pretty(&response)
        .map_err(|e| GradebookError::IoError(format!("Cannot encode response: {}", e)))?;
    println!("{}", output);

    Ok(())
}

/// Build a GraphQL request, parsing `variables` as a JSON object.
pub fn build_request(
    document: &str,
    variables: Option<&str>,
) -> Result<async_graphql::Request, GradebookError> {
    let request = async_graphql::Request::new(document);
    let Some(raw) = variables else {
        return Ok(request);
    };

    let value: serde_json::Value = serde_json::from_str(raw)
        .map_err(|e| GradebookError::DeserializationError(format!("Variables: {}", e)))?;
    if !value.is_object() {
        return Err(GradebookError::DeserializationError(
            "Variables must be a JSON object".to_string(),
        ));
    }

    Ok(request.variables(async_graphql::Variables::from_json(value)))
}

// =============================================================================
// HELPER FUNCTIONS
// =============================================================================

/// Load the dataset named by the configuration into a fresh store.
pub fn load_store(config: &Config) -> Result<Store, GradebookError> {
    let dataset = Dataset::from_dir(&config.data.dir)?;
    tracing::info!(
        dir = %config.data.dir.display(),
        records = dataset.record_count(),
        "Dataset loaded"
    );
    Ok(Store::from_dataset(dataset))
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_without_variables() {
        let request = build_request("{ students { id } }", None).expect("request");
        assert_eq!(request.query, "{ students { id } }");
    }

    #[test]
    fn request_with_variables() {
        let request = build_request("query($id: Int) { student(id: $id) { id } }", Some(r#"{"id": 2}"#))
            .expect("request");
        assert!(request.variables.contains_key(&async_graphql::Name::new("id")));
    }

    #[test]
    fn non_object_variables_rejected() {
        let err = build_request("{ students { id } }", Some("[1, 2]")).expect_err("array");
        assert!(matches!(err, GradebookError::DeserializationError(_)));
    }

    #[test]
    fn load_store_reads_data_dir() {
        let dir = tempfile::tempdir().expect("tempdir");
        std::fs::write(dir.path().join("student.json"), "[]").expect("write");
        std::fs::write(
            dir.path().join("course.json"),
            r#"[{"id":2,"name":"Math","description":"Algebra"}]"#,
        )
        .expect("write");
        std::fs::write(dir.path().join("grade.json"), "[]").expect("write");

        let mut config = Config::default();
        config.data.dir = dir.path().to_path_buf();

        let store = load_store(&config).expect("store");
        assert_eq!(store.courses().len(), 1);
        assert_eq!(store.metrics().next_course_id, Some(RecordId(3)));
    }
}
