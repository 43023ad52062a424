//! Application route configuration.

use axum::{extract::State, middleware, response::Json, routing::get, Router};
use serde::Serialize;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use super::handlers::repository_routes;
use super::middleware::log_requests;
use super::openapi::ApiDoc;
use super::AppState;
use crate::config::{REPOSITORIES_PATH, WELCOME_MESSAGE};
use crate::errors::AppResult;

/// Create the application router with all routes configured.
///
/// Requests pass, outermost first, through CORS, the trace span layer and
/// the request logger before reaching a route. Id-addressed repository
/// routes additionally run the id validator.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(root))
        .route("/health", get(health))
        // OpenAPI Swagger UI documentation
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .nest(REPOSITORIES_PATH, repository_routes())
        // Global middleware
        .layer(middleware::from_fn(log_requests))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// Root endpoint
async fn root() -> &'static str {
    WELCOME_MESSAGE
}

/// Health check response
#[derive(Serialize)]
struct HealthResponse {
    status: &'static str,
    repositories: usize,
}

/// Health check endpoint reporting the collection size
async fn health(State(state): State<AppState>) -> AppResult<Json<HealthResponse>> {
    let repositories = state.repository_service.count().await?;

    Ok(Json(HealthResponse {
        status: "healthy",
        repositories,
    }))
}
