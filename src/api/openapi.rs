//! OpenAPI documentation configuration.
//!
//! Provides Swagger UI for API exploration and testing.

use utoipa::OpenApi;

use crate::api::handlers::repository_handler;
use crate::domain::Repository;
use crate::errors::ErrorResponse;

/// OpenAPI documentation for the Repository Service
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Repository Service",
        version = "0.1.0",
        description = "In-memory collection of repositories with likes",
        license(name = "MIT", url = "https://opensource.org/licenses/MIT")
    ),
    servers(
        (url = "http://localhost:3333", description = "Local development server")
    ),
    paths(
        repository_handler::list_repositories,
        repository_handler::create_repository,
        repository_handler::update_repository,
        repository_handler::delete_repository,
        repository_handler::like_repository,
    ),
    components(
        schemas(
            Repository,
            ErrorResponse,
            repository_handler::CreateRepositoryRequest,
            repository_handler::UpdateRepositoryRequest,
        )
    ),
    tags(
        (name = "Repositories", description = "Repository collection operations")
    )
)]
pub struct ApiDoc;
