//! # Coursebook Config
//!
//! Configuration types for the Coursebook API.
//!
//! Every structure is loaded from environment variables and falls back to a
//! development-friendly default when a variable is unset or unparsable:
//!
//! - [`auth`]: Password hashing configuration
//! - [`cors`]: CORS (Cross-Origin Resource Sharing) configuration
//! - [`database`]: SQLite connection configuration
//! - [`logging`]: Log output and global error logging
//! - [`server`]: Listener address
//!
//! # Example
//!
//! ```ignore
//! use coursebook_config::{AuthConfig, CorsConfig, DatabaseConfig, ServerConfig};
//!
//! let database = DatabaseConfig::from_env();
//! let server = ServerConfig::from_env();
//! println!("listening on {}", server.address());
//! ```

pub mod auth;
pub mod cors;
pub mod database;
pub mod logging;
pub mod server;

// Re-export commonly used types at crate root
pub use auth::AuthConfig;
pub use cors::CorsConfig;
pub use database::DatabaseConfig;
pub use logging::LoggingConfig;
pub use server::ServerConfig;

/// Parses `key` from `lookup`, keeping `default` when absent or invalid.
pub(crate) fn parse_or<T, F>(lookup: &F, key: &str, default: T) -> T
where
    T: std::str::FromStr,
    F: Fn(&str) -> Option<String>,
{
    lookup(key)
        .and_then(|value| value.trim().parse().ok())
        .unwrap_or(default)
}
