//! Repository Service - An in-memory repository collection over HTTP.
//!
//! Records carry a title, a URL, a list of technology tags and a like
//! counter. They live in process memory and are lost on restart.
//!
//! # Architecture Layers
//!
//! - **cli**: Command-line interface
//! - **commands**: CLI command implementations
//! - **config**: Application configuration and constants
//! - **domain**: Core entity, input types and id parsing
//! - **services**: Repository collection use cases
//! - **infra**: In-memory storage
//! - **api**: HTTP handlers, middleware, and routes
//! - **types**: Shared response types
//! - **errors**: Centralized error handling
//!
//! # CLI Usage
//!
//! ```bash
//! # Start the server
//! cargo run -- serve --port 3333
//!
//! # Print the OpenAPI document
//! cargo run -- openapi
//! ```

pub mod api;
pub mod cli;
pub mod commands;
pub mod config;
pub mod domain;
pub mod errors;
pub mod infra;
pub mod services;
pub mod types;

// Re-export commonly used types at crate root
pub use api::AppState;
pub use config::Config;
pub use domain::{NewRepository, Repository, RepositoryChanges};
pub use errors::{AppError, AppResult};
pub use infra::MemoryStore;
