//! Access tokens for eBay API authentication.
//!
//! This module provides the [`AccessToken`] type holding an already-issued
//! OAuth token, and [`TokenScheme`] for rendering it into an
//! `Authorization` header.

use std::fmt;

use chrono::{DateTime, Utc};

use crate::error::ConfigError;

/// How an access token is presented in the `Authorization` header.
///
/// Most eBay REST APIs take a plain bearer token. The Post-Order API takes
/// the same OAuth token under the `IAF` scheme.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum TokenScheme {
    /// `Authorization: Bearer <token>`.
    #[default]
    Bearer,
    /// `Authorization: IAF <token>`.
    Iaf,
}

impl TokenScheme {
    /// Returns the scheme keyword.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Bearer => "Bearer",
            Self::Iaf => "IAF",
        }
    }
}

impl fmt::Display for TokenScheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An OAuth access token issued by eBay.
///
/// The token value is masked in `Debug` output. Acquiring or refreshing the
/// token is the caller's job; the SDK only presents it.
///
/// # Example
///
/// ```rust
/// use ebay_api::AccessToken;
/// use ebay_api::auth::TokenScheme;
///
/// let token = AccessToken::new("v^1.1#abc").unwrap();
/// assert_eq!(format!("{token:?}"), "AccessToken(*****)");
/// assert_eq!(token.authorization_value(TokenScheme::Bearer), "Bearer v^1.1#abc");
/// assert!(!token.expired());
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct AccessToken {
    value: String,
    expires_at: Option<DateTime<Utc>>,
}

impl AccessToken {
    /// Creates a token with no known expiry.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::EmptyAccessToken`] if the token is empty.
    pub fn new(value: impl Into<String>) -> Result<Self, ConfigError> {
        let value = value.into();
        if value.trim().is_empty() {
            return Err(ConfigError::EmptyAccessToken);
        }
        Ok(Self {
            value,
            expires_at: None,
        })
    }

    /// Attaches the expiry reported when the token was issued.
    #[must_use]
    pub const fn with_expiry(mut self, expires_at: DateTime<Utc>) -> Self {
        self.expires_at = Some(expires_at);
        self
    }

    /// Returns the expiry, if known.
    #[must_use]
    pub const fn expires_at(&self) -> Option<DateTime<Utc>> {
        self.expires_at
    }

    /// Returns `true` if the token's expiry has passed.
    ///
    /// Tokens without an expiry are never considered expired.
    #[must_use]
    pub fn expired(&self) -> bool {
        self.expires_at.is_some_and(|expires| Utc::now() > expires)
    }

    /// Renders the `Authorization` header value for the given scheme.
    #[must_use]
    pub fn authorization_value(&self, scheme: TokenScheme) -> String {
        format!("{scheme} {}", self.value)
    }
}

impl AsRef<str> for AccessToken {
    fn as_ref(&self) -> &str {
        &self.value
    }
}

impl fmt::Debug for AccessToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("AccessToken(*****)")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    #[test]
    fn test_access_token_rejects_empty_and_blank() {
        assert!(matches!(
            AccessToken::new(""),
            Err(ConfigError::EmptyAccessToken)
        ));
        assert!(matches!(
            AccessToken::new("   "),
            Err(ConfigError::EmptyAccessToken)
        ));
    }

    #[test]
    fn test_access_token_masks_value_in_debug() {
        let token = AccessToken::new("super-secret").unwrap();
        let debug_output = format!("{token:?}");
        assert_eq!(debug_output, "AccessToken(*****)");
        assert!(!debug_output.contains("super-secret"));
    }

    #[test]
    fn test_authorization_value_per_scheme() {
        let token = AccessToken::new("abc").unwrap();
        assert_eq!(token.authorization_value(TokenScheme::Bearer), "Bearer abc");
        assert_eq!(token.authorization_value(TokenScheme::Iaf), "IAF abc");
    }

    #[test]
    fn test_token_expiry() {
        let expired = AccessToken::new("abc")
            .unwrap()
            .with_expiry(Utc::now() - Duration::hours(1));
        assert!(expired.expired());

        let valid = AccessToken::new("abc")
            .unwrap()
            .with_expiry(Utc::now() + Duration::hours(2));
        assert!(!valid.expired());

        let no_expiry = AccessToken::new("abc").unwrap();
        assert!(!no_expiry.expired());
        assert!(no_expiry.expires_at().is_none());
    }

    #[test]
    fn test_default_scheme_is_bearer() {
        assert_eq!(TokenScheme::default(), TokenScheme::Bearer);
        assert_eq!(TokenScheme::Iaf.to_string(), "IAF");
    }
}
