//! Configuration types for the eBay API SDK.
//!
//! This module provides the core configuration types used to initialize
//! the SDK for API communication with eBay.
//!
//! # Overview
//!
//! The main types in this module are:
//!
//! - [`EbayConfig`]: The main configuration struct holding all SDK settings
//! - [`EbayConfigBuilder`]: A builder for constructing [`EbayConfig`] instances
//! - [`Environment`]: Production or sandbox
//! - [`HostUrl`]: A validated host override
//!
//! # Example
//!
//! ```rust
//! use ebay_api::{AccessToken, EbayConfig, Environment};
//! use ebay_api::enums::Marketplace;
//!
//! let config = EbayConfig::builder()
//!     .access_token(AccessToken::new("v^1.1#i^1#...").unwrap())
//!     .environment(Environment::Sandbox)
//!     .marketplace(Marketplace::EbayUs)
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(config.base_uri(), "https://api.sandbox.ebay.com");
//! ```

mod environment;
mod newtypes;

pub use environment::Environment;
pub use newtypes::HostUrl;

use crate::auth::AccessToken;
use crate::enums::{ContentLanguage, Marketplace};
use crate::error::ConfigError;

/// Configuration for the eBay API SDK.
///
/// Holds the long-lived, read-only settings shared by every request: the
/// token, which host to talk to, and the default marketplace and language
/// context.
///
/// # Thread Safety
///
/// `EbayConfig` is `Clone`, `Send`, and `Sync`, making it safe to share
/// across threads and async tasks.
///
/// # Example
///
/// ```rust
/// use ebay_api::{AccessToken, EbayConfig};
/// use ebay_api::enums::{ContentLanguage, Marketplace};
///
/// let config = EbayConfig::builder()
///     .access_token(AccessToken::new("token").unwrap())
///     .marketplace(Marketplace::EbayDe)
///     .content_language(ContentLanguage::DeDe)
///     .build()
///     .unwrap();
///
/// assert_eq!(config.marketplace(), Some(Marketplace::EbayDe));
/// ```
#[derive(Clone, Debug)]
pub struct EbayConfig {
    access_token: AccessToken,
    environment: Environment,
    api_host: Option<HostUrl>,
    marketplace: Option<Marketplace>,
    content_language: Option<ContentLanguage>,
    accept_language: Option<ContentLanguage>,
    user_agent_prefix: Option<String>,
}

impl EbayConfig {
    /// Creates a new builder for constructing an `EbayConfig`.
    #[must_use]
    pub fn builder() -> EbayConfigBuilder {
        EbayConfigBuilder::new()
    }

    /// Returns the access token.
    #[must_use]
    pub const fn access_token(&self) -> &AccessToken {
        &self.access_token
    }

    /// Returns the environment.
    #[must_use]
    pub const fn environment(&self) -> Environment {
        self.environment
    }

    /// Returns the host override, if configured.
    #[must_use]
    pub const fn api_host(&self) -> Option<&HostUrl> {
        self.api_host.as_ref()
    }

    /// Returns the default marketplace, if configured.
    #[must_use]
    pub const fn marketplace(&self) -> Option<Marketplace> {
        self.marketplace
    }

    /// Returns the default `Content-Language`, if configured.
    #[must_use]
    pub const fn content_language(&self) -> Option<ContentLanguage> {
        self.content_language
    }

    /// Returns the default `Accept-Language`, if configured.
    #[must_use]
    pub const fn accept_language(&self) -> Option<ContentLanguage> {
        self.accept_language
    }

    /// Returns the user agent prefix, if configured.
    #[must_use]
    pub fn user_agent_prefix(&self) -> Option<&str> {
        self.user_agent_prefix.as_deref()
    }

    /// Returns the origin all request URLs are built from.
    ///
    /// The host override wins over the environment default.
    #[must_use]
    pub fn base_uri(&self) -> &str {
        self.api_host
            .as_ref()
            .map_or_else(|| self.environment.api_host(), HostUrl::origin)
    }
}

// Verify EbayConfig is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<EbayConfig>();
};

/// Builder for constructing [`EbayConfig`] instances.
///
/// The only required field is `access_token`. All other fields have
/// sensible defaults.
///
/// # Defaults
///
/// - `environment`: [`Environment::Production`]
/// - `api_host`: `None` (use the environment host)
/// - `marketplace`: `None`
/// - `content_language`: `None`
/// - `accept_language`: `None`
/// - `user_agent_prefix`: `None`
#[derive(Debug, Default)]
pub struct EbayConfigBuilder {
    access_token: Option<AccessToken>,
    environment: Option<Environment>,
    api_host: Option<HostUrl>,
    marketplace: Option<Marketplace>,
    content_language: Option<ContentLanguage>,
    accept_language: Option<ContentLanguage>,
    user_agent_prefix: Option<String>,
}

impl EbayConfigBuilder {
    /// Creates a new builder with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the OAuth access token (required).
    #[must_use]
    pub fn access_token(mut self, token: AccessToken) -> Self {
        self.access_token = Some(token);
        self
    }

    /// Sets the environment.
    #[must_use]
    pub const fn environment(mut self, environment: Environment) -> Self {
        self.environment = Some(environment);
        self
    }

    /// Overrides the API host.
    #[must_use]
    pub fn api_host(mut self, host: HostUrl) -> Self {
        self.api_host = Some(host);
        self
    }

    /// Sets the default marketplace sent as `X-EBAY-C-MARKETPLACE-ID`.
    #[must_use]
    pub const fn marketplace(mut self, marketplace: Marketplace) -> Self {
        self.marketplace = Some(marketplace);
        self
    }

    /// Sets the default `Content-Language` header.
    #[must_use]
    pub const fn content_language(mut self, language: ContentLanguage) -> Self {
        self.content_language = Some(language);
        self
    }

    /// Sets the default `Accept-Language` header.
    #[must_use]
    pub const fn accept_language(mut self, language: ContentLanguage) -> Self {
        self.accept_language = Some(language);
        self
    }

    /// Sets the user agent prefix for HTTP requests.
    #[must_use]
    pub fn user_agent_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.user_agent_prefix = Some(prefix.into());
        self
    }

    /// Builds the [`EbayConfig`], validating that required fields are set.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingRequiredField`] if `access_token` is not set.
    pub fn build(self) -> Result<EbayConfig, ConfigError> {
        let access_token = self.access_token.ok_or(ConfigError::MissingRequiredField {
            field: "access_token",
        })?;

        Ok(EbayConfig {
            access_token,
            environment: self.environment.unwrap_or_default(),
            api_host: self.api_host,
            marketplace: self.marketplace,
            content_language: self.content_language,
            accept_language: self.accept_language,
            user_agent_prefix: self.user_agent_prefix,
        })
    }
}
