//! Validated JSON extractor - Combines deserialization with validation.

use axum::{
    async_trait,
    body::Bytes,
    extract::{FromRequest, Request},
    http::{header::CONTENT_TYPE, HeaderMap},
    Json,
};
use serde::de::DeserializeOwned;
use validator::Validate;

use crate::errors::AppError;

/// Validated JSON extractor that automatically validates requests.
///
/// A request without a JSON content type, or with an empty body, is read as
/// an empty object, so missing fields surface as validation failures rather
/// than parser errors. A JSON body that cannot be parsed is rejected with
/// [`AppError::BadRequest`]; a parsed body that fails validation is rejected
/// with [`AppError::Validation`] naming every failing field.
///
/// # Example
///
/// ```rust,ignore
/// use serde::Deserialize;
/// use validator::Validate;
/// use repository_service::api::extractors::ValidatedJson;
///
/// #[derive(Deserialize, Validate)]
/// struct CreateRepositoryRequest {
///     #[validate(required, length(min = 1))]
///     title: Option<String>,
/// }
///
/// async fn create(ValidatedJson(payload): ValidatedJson<CreateRepositoryRequest>) {
///     // payload is already validated
/// }
/// ```
pub struct ValidatedJson<T>(pub T);

#[async_trait]
impl<S, T> FromRequest<S> for ValidatedJson<T>
where
    S: Send + Sync,
    T: DeserializeOwned + Validate,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let is_json = has_json_content_type(req.headers());

        let bytes = Bytes::from_request(req, state)
            .await
            .map_err(|e| AppError::bad_request(e.body_text()))?;

        let value = if is_json && !bytes.iter().all(u8::is_ascii_whitespace) {
            let Json(value) =
                Json::<T>::from_bytes(&bytes).map_err(|e| AppError::bad_request(e.body_text()))?;
            value
        } else {
            empty_object()?
        };

        value
            .validate()
            .map_err(|e| AppError::validation(invalid_fields(&e)))?;

        Ok(ValidatedJson(value))
    }
}

/// Whether the request declares `application/json` or a `+json` media type
fn has_json_content_type(headers: &HeaderMap) -> bool {
    let Some(content_type) = headers.get(CONTENT_TYPE).and_then(|v| v.to_str().ok()) else {
        return false;
    };

    let essence = content_type
        .split(';')
        .next()
        .unwrap_or_default()
        .trim()
        .to_ascii_lowercase();

    essence == "application/json"
        || (essence.starts_with("application/") && essence.ends_with("+json"))
}

/// Deserialize `T` from `{}`
fn empty_object<T: DeserializeOwned>() -> Result<T, AppError> {
    serde_json::from_value(serde_json::Value::Object(Default::default()))
        .map_err(|e| AppError::bad_request(e.to_string()))
}

/// Names of the fields that failed validation, sorted for stable output
fn invalid_fields(errors: &validator::ValidationErrors) -> Vec<String> {
    let mut fields: Vec<String> = errors
        .field_errors()
        .keys()
        .map(|field| field.to_string())
        .collect();
    fields.sort();
    fields
}
