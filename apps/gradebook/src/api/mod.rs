//! # Gradebook HTTP API Module
//!
//! This module mounts the GraphQL schema on an axum router.
//!
//! ## Endpoints
//!
//! - `POST /graphql` - Execute a GraphQL query or mutation
//! - `GET /graphql` - GraphiQL page (when `server.graphiql` is enabled)
//! - `GET /status` - Collection sizes and next ids
//! - `GET /health` - Health check

mod handlers;
mod middleware;
mod schema;
mod types;

pub use handlers::{graphiql_handler, graphql_handler, health_handler, status_handler};
pub use middleware::{GlobalRateLimiter, create_rate_limiter};
pub use schema::{
    CourseObject, GradeObject, GradebookSchema, MutationRoot, QueryRoot, SharedStore,
    StudentObject, build_schema,
};
pub use types::{HealthResponse, StatusResponse};

use crate::config::ServerConfig;
use axum::{
    Router,
    http::{HeaderValue, Method, header},
    middleware as axum_middleware,
    routing::{get, post},
};
use gradebook_core::{GradebookError, Store};
use std::sync::Arc;
use tokio::sync::RwLock;
use tower_http::cors::CorsLayer;
use tower_http::limit::RequestBodyLimitLayer;
use tower_http::trace::TraceLayer;

// =============================================================================
// SERVER STATE
// =============================================================================

/// Shared server state: the store and the schema that reads it.
#[derive(Clone)]
pub struct AppState {
    pub store: SharedStore,
    pub schema: GradebookSchema,
}

impl AppState {
    /// Wrap a store and build the schema around it.
    #[must_use]
    pub fn new(store: Store) -> Self {
        let store = Arc::new(RwLock::new(store));
        let schema = build_schema(store.clone());
        Self { store, schema }
    }
}

// =============================================================================
// CORS CONFIGURATION
// =============================================================================

/// Build the CORS layer from configured origins.
///
/// - `["*"]`: any origin
/// - empty: localhost only
/// - otherwise: exactly the listed origins (invalid entries are skipped)
fn build_cors_layer(origins: &[String]) -> CorsLayer {
    if origins.iter().any(|o| o == "*") {
        tracing::warn!("CORS: Allowing ALL origins. This is insecure for production!");
        return CorsLayer::permissive();
    }

    let allowed: Vec<HeaderValue> = origins
        .iter()
        .filter_map(|origin| match origin.parse::<HeaderValue>() {
            Ok(hv) => {
                tracing::info!("CORS: Allowing origin: {}", origin);
                Some(hv)
            }
            Err(e) => {
                tracing::warn!("CORS: Invalid origin '{}': {}", origin, e);
                None
            }
        })
        .collect();

    let allowed = if allowed.is_empty() {
        tracing::info!("CORS: No origins configured, defaulting to localhost only");
        localhost_origins()
    } else {
        allowed
    };

    CorsLayer::new()
        .allow_origin(allowed)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE])
}

fn localhost_origins() -> Vec<HeaderValue> {
    [
        "http://localhost:3000",
        "http://localhost:8080",
        "http://127.0.0.1:3000",
        "http://127.0.0.1:8080",
    ]
    .into_iter()
    .filter_map(|o| o.parse::<HeaderValue>().ok())
    .collect()
}

// =============================================================================
// ROUTER CREATION
// =============================================================================

/// Create the axum router with all endpoints and middleware.
///
/// Middleware stack (outer to inner):
/// 1. Tracing - logs all requests
/// 2. CORS - handles preflight requests
/// 3. Body limit (413 when the declared length is too large, read error
///    otherwise)
/// 4. Rate Limiting (if enabled)
pub fn create_router(state: AppState, config: &ServerConfig) -> Router {
    let graphql_route = if config.graphiql {
        get(handlers::graphiql_handler).post(handlers::graphql_handler)
    } else {
        post(handlers::graphql_handler)
    };

    let mut router = Router::new()
        .route("/health", get(handlers::health_handler))
        .route("/status", get(handlers::status_handler))
        .route("/graphql", graphql_route);

    match create_rate_limiter(config.rate_limit) {
        Some(limiter) => {
            tracing::info!("Rate limiting enabled: {} requests/second", config.rate_limit);
            router = router.layer(axum_middleware::from_fn_with_state(
                limiter,
                middleware::rate_limit_middleware,
            ));
        }
        None => tracing::info!("Rate limiting disabled"),
    }

    router
        .layer(RequestBodyLimitLayer::new(config.body_limit_bytes))
        .layer(build_cors_layer(&config.cors_origins))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

// =============================================================================
// SERVER STARTUP
// =============================================================================

/// Start the HTTP server and run until Ctrl+C.
pub async fn run_server(config: &ServerConfig, store: Store) -> Result<(), GradebookError> {
    let state = AppState::new(store);
    let router = create_router(state, config);
    let addr = config.bind_addr();

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|e| GradebookError::IoError(format!("Bind failed: {}", e)))?;

    tracing::info!("Gradebook GraphQL server listening on {}", addr);

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| GradebookError::IoError(format!("Server error: {}", e)))
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for Ctrl+C: {}", e);
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}
