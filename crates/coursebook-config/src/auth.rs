//! Password hashing configuration.
//!
//! - `BCRYPT_COST`: bcrypt work factor (default: bcrypt's `DEFAULT_COST`,
//!   clamped to the 4..=31 range bcrypt accepts)

use std::env;

use crate::parse_or;

const MIN_COST: u32 = 4;
const MAX_COST: u32 = 31;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AuthConfig {
    pub bcrypt_cost: u32,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            bcrypt_cost: bcrypt::DEFAULT_COST,
        }
    }
}

impl AuthConfig {
    pub fn from_env() -> Self {
        Self::from_vars(|key| env::var(key).ok())
    }

    pub fn from_vars<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let cost = parse_or(&lookup, "BCRYPT_COST", bcrypt::DEFAULT_COST);
        Self {
            bcrypt_cost: cost.clamp(MIN_COST, MAX_COST),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_cost() {
        assert_eq!(AuthConfig::default().bcrypt_cost, bcrypt::DEFAULT_COST);
        assert_eq!(AuthConfig::from_vars(|_| None), AuthConfig::default());
    }

    #[test]
    fn test_cost_is_clamped() {
        let low = AuthConfig::from_vars(|_| Some("1".to_string()));
        let high = AuthConfig::from_vars(|_| Some("99".to_string()));
        assert_eq!(low.bcrypt_cost, 4);
        assert_eq!(high.bcrypt_cost, 31);
    }

    #[test]
    fn test_unparsable_cost_falls_back() {
        let config = AuthConfig::from_vars(|_| Some("fast".to_string()));
        assert_eq!(config.bcrypt_cost, bcrypt::DEFAULT_COST);
    }
}
