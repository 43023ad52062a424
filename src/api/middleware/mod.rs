//! API middleware.

mod logging;
mod repository_id;

pub use logging::log_requests;
pub use repository_id::{validate_repository_id, RepositoryId};
