//! # API Endpoint Handlers
//!
//! This module implements the actual HTTP endpoint handlers.

use super::{
    AppState,
    types::{HealthResponse, StatusResponse},
};
use async_graphql::http::GraphiQLSource;
use async_graphql_axum::{GraphQLRequest, GraphQLResponse};
use axum::{
    Json,
    extract::State,
    http::StatusCode,
    response::{Html, IntoResponse},
};

// =============================================================================
// HEALTH HANDLER
// =============================================================================

/// Health check endpoint.
pub async fn health_handler() -> impl IntoResponse {
    Json(HealthResponse::default())
}

// =============================================================================
// STATUS HANDLER
// =============================================================================

/// Get collection sizes.
pub async fn status_handler(State(state): State<AppState>) -> impl IntoResponse {
    let metrics = state.store.read().await.metrics();
    (StatusCode::OK, Json(StatusResponse::from(metrics)))
}

// =============================================================================
// GRAPHQL HANDLERS
// =============================================================================

/// Execute a GraphQL request.
///
/// Validation failures (unknown fields, missing required arguments) come back
/// as a 200 with an `errors` array; no resolver runs in that case.
pub async fn graphql_handler(
    State(state): State<AppState>,
    request: GraphQLRequest,
) -> GraphQLResponse {
    let request = request.into_inner();
    tracing::debug!(operation = ?request.operation_name, "GraphQL request");

    let response = state.schema.execute(request).await;
    if response.is_err() {
        tracing::warn!(
            event = "graphql_errors",
            count = response.errors.len(),
            first = ?response.errors.first().map(|e| e.message.as_str()),
            "GraphQL request returned errors"
        );
    }

    response.into()
}

/// Serve the GraphiQL exploration page.
pub async fn graphiql_handler() -> impl IntoResponse {
    Html(GraphiQLSource::build().endpoint("/graphql").finish())
}
