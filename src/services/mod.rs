//! Application services layer - Use cases and business logic.
//!
//! Services orchestrate domain logic and storage to fulfill application
//! use cases. Handlers depend on the trait, not the implementation.

mod repository_service;

pub use repository_service::{RepositoryManager, RepositoryService};

#[cfg(any(test, feature = "test-utils"))]
pub use repository_service::MockRepositoryService;
