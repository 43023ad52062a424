//! HTTP request handlers.

pub mod repository_handler;

pub use repository_handler::repository_routes;
