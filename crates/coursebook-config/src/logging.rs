//! Logging configuration.
//!
//! - `LOG_DIR`: Directory for rolling log files (default: `storage/logs`)
//! - `ENABLE_GLOBAL_ERROR_LOGGING`: When `true`, the full error chain of
//!   every 5xx response is logged (default: `false`)

use std::env;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LoggingConfig {
    pub log_dir: String,
    pub enable_global_error_logging: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self::from_vars(|_| None)
    }
}

impl LoggingConfig {
    pub fn from_env() -> Self {
        Self::from_vars(|key| env::var(key).ok())
    }

    pub fn from_vars<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        Self {
            log_dir: lookup("LOG_DIR").unwrap_or_else(|| "storage/logs".to_string()),
            enable_global_error_logging: lookup("ENABLE_GLOBAL_ERROR_LOGGING")
                .is_some_and(|value| value.trim() == "true"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_logging_disabled_by_default() {
        let config = LoggingConfig::default();
        assert!(!config.enable_global_error_logging);
        assert_eq!(config.log_dir, "storage/logs");
    }

    #[test]
    fn test_only_literal_true_enables() {
        let enabled = LoggingConfig::from_vars(|_| Some("true".to_string()));
        let other = LoggingConfig::from_vars(|_| Some("yes".to_string()));
        assert!(enabled.enable_global_error_logging);
        assert!(!other.enable_global_error_logging);
    }
}
