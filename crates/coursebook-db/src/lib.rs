//! # Coursebook DB
//!
//! Database pool and migrations for the Coursebook API.
//!
//! The pool is created once at startup and handed to the HTTP layer through
//! the application state; nothing in the workspace opens connections on its
//! own.
//!
//! # Example
//!
//! ```ignore
//! use coursebook_config::DatabaseConfig;
//! use coursebook_db::{init_db_pool, run_migrations};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let pool = init_db_pool(&DatabaseConfig::from_env()).await?;
//!     run_migrations(&pool).await?;
//!     Ok(())
//! }
//! ```

use std::str::FromStr;

use coursebook_config::DatabaseConfig;
use sqlx::migrate::MigrateError;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use tracing::info;

// Re-export SqlitePool for convenience
pub use sqlx::SqlitePool;

/// Opens a SQLite connection pool for `config.url`.
///
/// The database file is created when missing and foreign keys are enforced
/// on every connection.
pub async fn init_db_pool(config: &DatabaseConfig) -> Result<SqlitePool, sqlx::Error> {
    let options = SqliteConnectOptions::from_str(&config.url)?
        .create_if_missing(true)
        .foreign_keys(true);

    let pool = SqlitePoolOptions::new()
        .max_connections(config.max_connections)
        .connect_with(options)
        .await?;

    info!(url = %config.url, "Database connection successful");
    Ok(pool)
}

/// Opens a private in-memory database with the schema applied.
///
/// A single connection is kept alive for the life of the pool, since an
/// in-memory SQLite database disappears with its last connection.
pub async fn init_memory_pool() -> Result<SqlitePool, MigrateError> {
    let options = SqliteConnectOptions::from_str("sqlite::memory:")?.foreign_keys(true);

    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .min_connections(1)
        .idle_timeout(None)
        .max_lifetime(None)
        .connect_with(options)
        .await?;

    run_migrations(&pool).await?;
    Ok(pool)
}

/// Applies the embedded migrations under `migrations/`.
pub async fn run_migrations(pool: &SqlitePool) -> Result<(), MigrateError> {
    sqlx::migrate!("../../migrations").run(pool).await?;
    info!("Database migrations applied");
    Ok(())
}
