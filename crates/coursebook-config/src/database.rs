//! Database connection configuration.
//!
//! # Environment Variables
//!
//! - `DATABASE_URL`: SQLite connection string (default: `sqlite://coursebook.db?mode=rwc`)
//! - `DATABASE_MAX_CONNECTIONS`: Pool size (default: 5)

use std::env;

use crate::parse_or;

pub const DEFAULT_DATABASE_URL: &str = "sqlite://coursebook.db?mode=rwc";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DatabaseConfig {
    pub url: String,
    pub max_connections: u32,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self::from_vars(|_| None)
    }
}

impl DatabaseConfig {
    pub fn from_env() -> Self {
        Self::from_vars(|key| env::var(key).ok())
    }

    pub fn from_vars<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        Self {
            url: lookup("DATABASE_URL")
                .filter(|url| !url.trim().is_empty())
                .unwrap_or_else(|| DEFAULT_DATABASE_URL.to_string()),
            max_connections: parse_or(&lookup, "DATABASE_MAX_CONNECTIONS", 5).max(1),
        }
    }
}
