//! Repository id validation middleware.

use axum::{
    extract::{Path, Request},
    middleware::Next,
    response::Response,
};
use uuid::Uuid;

use crate::domain::parse_canonical;
use crate::errors::AppError;

/// Repository id taken from the path, already checked to be canonical.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RepositoryId(pub Uuid);

/// Reject requests whose `:id` path parameter is not a canonical UUID.
///
/// Runs before the handler, so a malformed id never reaches a lookup.
/// On success the parsed id is injected into the request extensions.
pub async fn validate_repository_id(
    Path(raw): Path<String>,
    mut request: Request,
    next: Next,
) -> Result<Response, AppError> {
    let id = parse_canonical(&raw).ok_or_else(|| {
        tracing::debug!(id = %raw, "Malformed repository id");
        AppError::malformed_id(raw)
    })?;

    request.extensions_mut().insert(RepositoryId(id));

    Ok(next.run(request).await)
}
