//! Domain layer - Core business entities and logic
//!
//! This module contains the core domain models that represent
//! business concepts independent of infrastructure concerns.

pub mod id;
pub mod repository;

pub use id::parse_canonical;
pub use repository::{NewRepository, Repository, RepositoryChanges};
