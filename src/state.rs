use anyhow::Context;
use coursebook_config::{AuthConfig, CorsConfig, DatabaseConfig, LoggingConfig};
use coursebook_db::{SqlitePool, init_db_pool, run_migrations};

/// Shared by every handler. The pool is the only repository handle in the
/// process and is built once here.
#[derive(Clone, Debug)]
pub struct AppState {
    pub db: SqlitePool,
    pub auth_config: AuthConfig,
    pub cors_config: CorsConfig,
    pub logging_config: LoggingConfig,
}

impl AppState {
    pub fn new(db: SqlitePool) -> Self {
        Self {
            db,
            auth_config: AuthConfig::from_env(),
            cors_config: CorsConfig::from_env(),
            logging_config: LoggingConfig::from_env(),
        }
    }
}

pub async fn init_app_state() -> anyhow::Result<AppState> {
    let database_config = DatabaseConfig::from_env();

    let db = init_db_pool(&database_config)
        .await
        .with_context(|| format!("Unable to connect to database {}", database_config.url))?;
    run_migrations(&db)
        .await
        .context("Failed to apply database migrations")?;

    Ok(AppState::new(db))
}
