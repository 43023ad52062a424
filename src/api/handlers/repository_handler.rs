//! Repository collection handlers.

use axum::{
    extract::{Extension, State},
    response::Json,
    routing::{get, post, put},
    Router,
};
use serde::Deserialize;
use utoipa::ToSchema;
use validator::Validate;

use crate::api::extractors::ValidatedJson;
use crate::api::middleware::{validate_repository_id, RepositoryId};
use crate::api::AppState;
use crate::domain::{NewRepository, Repository, RepositoryChanges};
use crate::errors::{AppResult, ErrorResponse};
use crate::types::NoContent;

/// Repository creation request
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateRepositoryRequest {
    /// Repository title
    #[validate(required, length(min = 1))]
    #[schema(example = "Desafio Node.js")]
    pub title: Option<String>,
    /// Repository URL
    #[validate(required, length(min = 1))]
    #[schema(example = "https://github.com/example/desafio-nodejs")]
    pub url: Option<String>,
    /// Technology tags (at least one)
    #[validate(required, length(min = 1))]
    #[schema(example = json!(["Node.js", "Express"]))]
    pub techs: Option<Vec<String>>,
}

impl From<CreateRepositoryRequest> for NewRepository {
    fn from(request: CreateRepositoryRequest) -> Self {
        Self {
            title: request.title.unwrap_or_default(),
            url: request.url.unwrap_or_default(),
            techs: request.techs.unwrap_or_default(),
        }
    }
}

/// Repository update request. Fields are stored as given, without checks.
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct UpdateRepositoryRequest {
    /// New title
    #[schema(example = "Desafio Node.js")]
    pub title: Option<String>,
    /// New URL
    #[schema(example = "https://github.com/example/desafio-nodejs")]
    pub url: Option<String>,
    /// New technology tags
    #[schema(example = json!(["Node.js", "Express", "Jest"]))]
    pub techs: Option<Vec<String>>,
}

impl From<UpdateRepositoryRequest> for RepositoryChanges {
    fn from(request: UpdateRepositoryRequest) -> Self {
        Self {
            title: request.title,
            url: request.url,
            techs: request.techs,
        }
    }
}

/// Create repository routes
pub fn repository_routes() -> Router<AppState> {
    let by_id = Router::new()
        .route("/:id", put(update_repository).delete(delete_repository))
        .route("/:id/like", post(like_repository))
        .route_layer(axum::middleware::from_fn(validate_repository_id));

    Router::new()
        .route("/", get(list_repositories).post(create_repository))
        .merge(by_id)
}

/// List all repositories
#[utoipa::path(
    get,
    path = "/repositories",
    tag = "Repositories",
    responses(
        (status = 200, description = "All repositories in insertion order", body = Vec<Repository>)
    )
)]
pub async fn list_repositories(State(state): State<AppState>) -> AppResult<Json<Vec<Repository>>> {
    let repositories = state.repository_service.list().await?;
    Ok(Json(repositories))
}

/// Create a repository
#[utoipa::path(
    post,
    path = "/repositories",
    tag = "Repositories",
    request_body = CreateRepositoryRequest,
    responses(
        (status = 200, description = "Repository created", body = Repository),
        (status = 400, description = "Required field missing or empty", body = ErrorResponse)
    )
)]
pub async fn create_repository(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<CreateRepositoryRequest>,
) -> AppResult<Json<Repository>> {
    let repository = state.repository_service.create(payload.into()).await?;
    Ok(Json(repository))
}

/// Update a repository
#[utoipa::path(
    put,
    path = "/repositories/{id}",
    tag = "Repositories",
    params(
        ("id" = String, Path, description = "Repository ID in canonical UUID form")
    ),
    request_body = UpdateRepositoryRequest,
    responses(
        (status = 200, description = "Repository updated", body = Repository),
        (status = 400, description = "Malformed repository ID", body = ErrorResponse),
        (status = 404, description = "Repository not found", body = ErrorResponse)
    )
)]
pub async fn update_repository(
    State(state): State<AppState>,
    Extension(RepositoryId(id)): Extension<RepositoryId>,
    ValidatedJson(payload): ValidatedJson<UpdateRepositoryRequest>,
) -> AppResult<Json<Repository>> {
    let repository = state.repository_service.update(id, payload.into()).await?;
    Ok(Json(repository))
}

/// Delete a repository
#[utoipa::path(
    delete,
    path = "/repositories/{id}",
    tag = "Repositories",
    params(
        ("id" = String, Path, description = "Repository ID in canonical UUID form")
    ),
    responses(
        (status = 204, description = "Repository deleted"),
        (status = 400, description = "Malformed repository ID", body = ErrorResponse),
        (status = 404, description = "Repository not found", body = ErrorResponse)
    )
)]
pub async fn delete_repository(
    State(state): State<AppState>,
    Extension(RepositoryId(id)): Extension<RepositoryId>,
) -> AppResult<NoContent> {
    state.repository_service.delete(id).await?;
    Ok(NoContent)
}

/// Like a repository
#[utoipa::path(
    post,
    path = "/repositories/{id}/like",
    tag = "Repositories",
    params(
        ("id" = String, Path, description = "Repository ID in canonical UUID form")
    ),
    responses(
        (status = 200, description = "Repository liked", body = Repository),
        (status = 400, description = "Malformed repository ID", body = ErrorResponse),
        (status = 404, description = "Repository not found", body = ErrorResponse)
    )
)]
pub async fn like_repository(
    State(state): State<AppState>,
    Extension(RepositoryId(id)): Extension<RepositoryId>,
) -> AppResult<Json<Repository>> {
    let repository = state.repository_service.like(id).await?;
    Ok(Json(repository))
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use axum::{
        body::Body,
        http::{Request, StatusCode},
    };
    use tower::ServiceExt;
    use uuid::Uuid;

    use super::*;
    use crate::errors::AppError;
    use crate::services::MockRepositoryService;

    fn app(service: MockRepositoryService) -> Router {
        repository_routes().with_state(AppState::new(Arc::new(service)))
    }

    fn sample(id: Uuid) -> Repository {
        Repository {
            id,
            title: "Gostack".into(),
            url: "https://github.com/example/gostack".into(),
            techs: vec!["Node.js".into()],
            likes: 3,
        }
    }

    #[tokio::test]
    async fn test_invalid_create_never_reaches_service() {
        let mut service = MockRepositoryService::new();
        service.expect_create().times(0);

        let response = app(service)
            .oneshot(
                Request::post("/")
                    .header("content-type", "application/json")
                    .body(Body::from(r#"{"title":"x","url":"y","techs":[]}"#))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_malformed_id_never_reaches_service() {
        let mut service = MockRepositoryService::new();
        service.expect_like().times(0);

        let response = app(service)
            .oneshot(Request::post("/not-a-uuid/like").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_like_passes_parsed_id() {
        let id = Uuid::new_v4();
        let mut service = MockRepositoryService::new();
        service
            .expect_like()
            .withf(move |requested| *requested == id)
            .times(1)
            .returning(|id| Ok(sample(id)));

        let response = app(service)
            .oneshot(
                Request::post(format!("/{id}/like"))
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_update_forwards_absent_and_null_fields_as_none() {
        let id = Uuid::new_v4();
        let mut service = MockRepositoryService::new();
        service
            .expect_update()
            .withf(|_, changes| {
                changes.title.as_deref() == Some("New")
                    && changes.url.is_none()
                    && changes.techs.is_none()
            })
            .returning(|id, _| Ok(sample(id)));

        let response = app(service)
            .oneshot(
                Request::put(format!("/{id}"))
                    .header("content-type", "application/json")
                    .body(Body::from(r#"{"title":"New","url":null}"#))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_service_failure_maps_to_500() {
        let mut service = MockRepositoryService::new();
        service
            .expect_list()
            .returning(|| Err(AppError::internal("store unavailable")));

        let response = app(service)
            .oneshot(Request::get("/").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
