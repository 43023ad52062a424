//! OpenAPI command - Prints the API document.

use utoipa::OpenApi;

use crate::api::ApiDoc;
use crate::errors::{AppError, AppResult};

/// Execute the openapi command
pub async fn execute() -> AppResult<()> {
    let document = ApiDoc::openapi()
        .to_pretty_json()
        .map_err(|e| AppError::internal(format!("Failed to render OpenAPI document: {}", e)))?;

    println!("{}", document);
    Ok(())
}
