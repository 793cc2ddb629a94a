//! eBay API environment definitions.
//!
//! This module provides the [`Environment`] enum for selecting which eBay
//! API host requests are sent to.

use crate::error::ConfigError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The eBay environment a client talks to.
///
/// Production and sandbox are separate systems with separate credentials;
/// a token issued for one is rejected by the other.
///
/// # Example
///
/// ```rust
/// use ebay_api::Environment;
///
/// let env: Environment = "sandbox".parse().unwrap();
/// assert_eq!(env, Environment::Sandbox);
/// assert_eq!(env.api_host(), "https://api.sandbox.ebay.com");
/// assert_eq!(format!("{}", Environment::Production), "production");
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Environment {
    /// The live eBay marketplaces.
    #[default]
    Production,
    /// The eBay developer sandbox.
    Sandbox,
}

impl Environment {
    /// Returns the REST API origin for this environment.
    #[must_use]
    pub const fn api_host(&self) -> &'static str {
        match self {
            Self::Production => "https://api.ebay.com",
            Self::Sandbox => "https://api.sandbox.ebay.com",
        }
    }

    /// Returns `true` for the sandbox environment.
    #[must_use]
    pub const fn is_sandbox(&self) -> bool {
        matches!(self, Self::Sandbox)
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Production => write!(f, "production"),
            Self::Sandbox => write!(f, "sandbox"),
        }
    }
}

impl FromStr for Environment {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "production" | "prod" => Ok(Self::Production),
            "sandbox" => Ok(Self::Sandbox),
            _ => Err(ConfigError::InvalidEnvironment {
                value: s.to_string(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_production() {
        assert_eq!(Environment::default(), Environment::Production);
        assert!(!Environment::default().is_sandbox());
    }

    #[test]
    fn test_api_hosts() {
        assert_eq!(Environment::Production.api_host(), "https://api.ebay.com");
        assert_eq!(
            Environment::Sandbox.api_host(),
            "https://api.sandbox.ebay.com"
        );
    }

    #[test]
    fn test_parse_is_case_insensitive() {
        assert_eq!("SANDBOX".parse::<Environment>(), Ok(Environment::Sandbox));
        assert_eq!(
            " Production ".parse::<Environment>(),
            Ok(Environment::Production)
        );
        assert_eq!("prod".parse::<Environment>(), Ok(Environment::Production));
    }

    #[test]
    fn test_parse_rejects_unknown() {
        let result = "staging".parse::<Environment>();
        assert!(matches!(
            result,
            Err(ConfigError::InvalidEnvironment { value }) if value == "staging"
        ));
    }

    #[test]
    fn test_serde_uses_snake_case() {
        let json = serde_json::to_string(&Environment::Sandbox).unwrap();
        assert_eq!(json, r#""sandbox""#);
        let env: Environment = serde_json::from_str(r#""production""#).unwrap();
        assert_eq!(env, Environment::Production);
    }
}
