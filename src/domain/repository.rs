//! Repository domain entity and related types.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::config::{FIELD_TECHS, FIELD_TITLE, FIELD_URL};

/// Repository domain entity
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Repository {
    /// Unique repository identifier
    #[schema(example = "550e8400-e29b-41d4-a716-446655440000")]
    pub id: Uuid,
    /// Repository title
    #[schema(example = "Desafio Node.js")]
    pub title: String,
    /// Repository URL
    #[schema(example = "https://github.com/example/desafio-nodejs")]
    pub url: String,
    /// Technology tags, in the order given by the client
    #[schema(example = json!(["Node.js", "Express"]))]
    pub techs: Vec<String>,
    /// Number of likes received
    #[schema(example = 0)]
    pub likes: u64,
}

impl Repository {
    /// Create a new repository with a fresh id and no likes
    pub fn new(input: NewRepository) -> Self {
        Self {
            id: Uuid::new_v4(),
            title: input.title,
            url: input.url,
            techs: input.techs,
            likes: 0,
        }
    }

    /// Add one like
    pub fn like(&mut self) {
        self.likes = self.likes.saturating_add(1);
    }

    /// Overwrite the editable fields. Identity and likes are untouched.
    pub fn apply(&mut self, changes: RepositoryChanges) {
        if let Some(title) = changes.title {
            self.title = title;
        }
        if let Some(url) = changes.url {
            self.url = url;
        }
        if let Some(techs) = changes.techs {
            self.techs = techs;
        }
    }
}

/// Repository creation data
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NewRepository {
    pub title: String,
    pub url: String,
    pub techs: Vec<String>,
}

impl NewRepository {
    pub fn new(title: impl Into<String>, url: impl Into<String>, techs: Vec<String>) -> Self {
        Self {
            title: title.into(),
            url: url.into(),
            techs,
        }
    }

    /// Names of the required fields that are empty
    pub fn missing_fields(&self) -> Vec<&'static str> {
        let mut missing = Vec::new();
        if self.title.is_empty() {
            missing.push(FIELD_TITLE);
        }
        if self.url.is_empty() {
            missing.push(FIELD_URL);
        }
        if self.techs.is_empty() {
            missing.push(FIELD_TECHS);
        }
        missing
    }
}

/// Repository update data. `None` leaves the stored value as it is.
///
/// A field sent as JSON `null` deserializes to `None`, so it is treated the
/// same as an absent field.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RepositoryChanges {
    pub title: Option<String>,
    pub url: Option<String>,
    pub techs: Option<Vec<String>>,
}

impl RepositoryChanges {
    /// Names of the fields that are absent or empty.
    ///
    /// Updates are not validated; this only feeds the warning log.
    pub fn blank_fields(&self) -> Vec<&'static str> {
        let mut blank = Vec::new();
        if self.title.as_deref().map_or(true, str::is_empty) {
            blank.push(FIELD_TITLE);
        }
        if self.url.as_deref().map_or(true, str::is_empty) {
            blank.push(FIELD_URL);
        }
        if self.techs.as_ref().map_or(true, Vec::is_empty) {
            blank.push(FIELD_TECHS);
        }
        blank
    }
}
