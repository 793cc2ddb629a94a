//! Endpoint wrappers for eBay's REST API families.
//!
//! Each wrapper is a plain struct holding a [`RestClient`] scoped to its
//! family's base path. Methods map one-to-one onto remote operations: they
//! shape the path, query and headers, send once, and hand back the
//! [`HttpResponse`](crate::clients::HttpResponse) untouched.
//!
//! [`EbayClient`] builds every wrapper from one configuration.
//!
//! # Example
//!
//! ```rust,ignore
//! use ebay_api::{AccessToken, EbayClient, EbayConfig};
//! use ebay_api::api::buy::FeedParams;
//! use ebay_api::enums::Marketplace;
//!
//! let config = EbayConfig::builder()
//!     .access_token(AccessToken::new("v^1.1#...")?)
//!     .marketplace(Marketplace::EbayUs)
//!     .build()?;
//! let ebay = EbayClient::new(&config)?;
//!
//! let chunk = ebay
//!     .buy
//!     .feed
//!     .get_item_feed(&FeedParams::new("9355"), None, "bytes=0-10485759")
//!     .await?;
//! ```

pub mod buy;
pub mod post_order;
pub mod sell;

use std::sync::Arc;

use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize, Serializer};

use crate::clients::{HttpClient, HttpTransport, InvalidHttpRequestError, RestClient, TransportError};
use crate::config::EbayConfig;
use crate::enums::CurrencyCode;

/// A monetary amount as eBay's REST APIs exchange it.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Amount {
    /// Decimal value as a string, e.g. `"12.50"`.
    pub value: String,
    /// Currency of the value.
    pub currency: CurrencyCode,
}

impl Amount {
    /// Creates an amount.
    #[must_use]
    pub fn new(value: impl Into<String>, currency: CurrencyCode) -> Self {
        Self {
            value: value.into(),
            currency,
        }
    }
}

/// Free text wrapped the way the Post-Order API expects it.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Text {
    /// The text.
    pub content: String,
}

impl From<&str> for Text {
    fn from(content: &str) -> Self {
        Self {
            content: content.to_string(),
        }
    }
}

impl From<String> for Text {
    fn from(content: String) -> Self {
        Self { content }
    }
}

/// Facade over every endpoint wrapper.
///
/// Cheap to clone; all wrappers share one [`HttpClient`].
#[derive(Clone, Debug)]
pub struct EbayClient {
    http_client: HttpClient,
    /// Buy APIs.
    pub buy: buy::Buy,
    /// Sell APIs.
    pub sell: sell::Sell,
    /// Post-Order API.
    pub post_order: post_order::PostOrder,
}

// Verify EbayClient is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<EbayClient>();
};

impl EbayClient {
    /// Creates a client using the default `reqwest` transport.
    ///
    /// # Errors
    ///
    /// Returns [`TransportError`] if the HTTP client cannot be created.
    pub fn new(config: &EbayConfig) -> Result<Self, TransportError> {
        Ok(Self::from_http_client(HttpClient::new(config)?))
    }

    /// Creates a client that sends through the given transport.
    #[must_use]
    pub fn with_transport(config: &EbayConfig, transport: Arc<dyn HttpTransport>) -> Self {
        Self::from_http_client(HttpClient::with_transport(config, transport))
    }

    /// Builds every endpoint wrapper on top of an existing root client.
    #[must_use]
    pub fn from_http_client(http_client: HttpClient) -> Self {
        Self {
            buy: buy::Buy::new(&http_client),
            sell: sell::Sell::new(&http_client),
            post_order: post_order::PostOrder::new(&http_client),
            http_client,
        }
    }

    /// Returns the root client, for calls no wrapper covers yet.
    ///
    /// ```rust,ignore
    /// let inventory = ebay.http_client().configure("/sell/inventory/v1");
    /// ```
    #[must_use]
    pub const fn http_client(&self) -> &HttpClient {
        &self.http_client
    }

    /// Returns a client scoped to an arbitrary base path.
    #[must_use]
    pub fn configure(&self, base_path: impl Into<String>) -> RestClient {
        self.http_client.configure(base_path)
    }
}

/// Percent-encodes an identifier for use as a path segment.
pub(crate) fn path_segment(
    name: &'static str,
    value: &str,
) -> Result<String, InvalidHttpRequestError> {
    let value = value.trim();
    if value.is_empty() {
        return Err(InvalidHttpRequestError::EmptyPathParameter { name });
    }
    Ok(urlencoding::encode(value).into_owned())
}

/// Formats a timestamp the way eBay writes them: `2024-05-01T10:00:00.000Z`.
#[must_use]
pub fn format_timestamp(timestamp: &DateTime<Utc>) -> String {
    timestamp.to_rfc3339_opts(SecondsFormat::Millis, true)
}

pub(crate) fn serialize_timestamp_opt<S: Serializer>(
    timestamp: &Option<DateTime<Utc>>,
    serializer: S,
) -> Result<S::Ok, S::Error> {
    match timestamp {
        Some(timestamp) => serializer.serialize_str(&format_timestamp(timestamp)),
        None => serializer.serialize_none(),
    }
}
