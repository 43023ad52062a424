//! Application-wide constants
//!
//! Centralized location for magic values to improve maintainability.

// =============================================================================
// Server Configuration
// =============================================================================

/// Default server host address
pub const DEFAULT_SERVER_HOST: &str = "0.0.0.0";

/// Default server port
pub const DEFAULT_SERVER_PORT: u16 = 3333;

/// Log filter used when neither `--verbose` nor `RUST_LOG` is given
pub const DEFAULT_LOG_FILTER: &str = "info";

// =============================================================================
// HTTP
// =============================================================================

/// Banner returned by the root endpoint
pub const WELCOME_MESSAGE: &str = "Welcome to Repository Service";

/// Mount point of the repository collection
pub const REPOSITORIES_PATH: &str = "/repositories";

// =============================================================================
// Validation
// =============================================================================

/// Field names reported by create validation
pub const FIELD_TITLE: &str = "title";
pub const FIELD_URL: &str = "url";
pub const FIELD_TECHS: &str = "techs";
