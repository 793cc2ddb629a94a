//! # eBay API Rust SDK
//!
//! A typed client for eBay's REST APIs: one request-building core shared by
//! thin endpoint wrappers, plus the eBay domain vocabulary as enums.
//!
//! ## Overview
//!
//! This SDK provides:
//! - Type-safe configuration via [`EbayConfig`] and [`EbayConfigBuilder`]
//! - A root [`HttpClient`] holding the access token and default headers
//! - Scoped [`RestClient`]s that prefix a family's base path to every call
//! - Endpoint wrappers under [`api`], grouped as `buy`, `sell` and `post_order`
//! - Wire-exact enums under [`enums`] (marketplaces, locales, currencies, ...)
//! - Structured errors separating bad requests, transport failures and
//!   errors reported by eBay
//!
//! The SDK does not obtain tokens. Bring an OAuth access token from your own
//! flow and hand it to the configuration.
//!
//! ## Quick Start
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
//! ```
//!
//! ## Calling an endpoint
//!
//! ```rust,ignore
//! use ebay_api::{EbayClient, HttpError};
//! use ebay_api::api::sell::GetOrdersParams;
//!
//! let ebay = EbayClient::new(&config)?;
//!
//! let params = GetOrdersParams {
//!     limit: Some(50),
//!     ..GetOrdersParams::default()
//! };
//! match ebay.sell.fulfillment.get_orders(&params).await {
//!     Ok(response) => println!("{:?}", response.json()),
//!     Err(HttpError::Api(e)) => eprintln!("eBay said {}: {:?}", e.status, e.errors),
//!     Err(e) => eprintln!("request failed: {e}"),
//! }
//! ```
//!
//! ## Calling an API without a wrapper
//!
//! ```rust,ignore
//! use ebay_api::RequestOptions;
//!
//! let inventory = ebay.configure("/sell/inventory/v1");
//! let items = inventory
//!     .get("/inventory_item", RequestOptions::new().param("limit", 10_u32))
//!     .await?;
//! ```
//!
//! ## Thread Safety
//!
//! [`EbayClient`], [`HttpClient`] and [`RestClient`] are `Send + Sync` and
//! cheap to clone; share one across tasks.

pub mod api;
pub mod auth;
pub mod clients;
pub mod config;
pub mod enums;
pub mod error;

// Re-export public types at crate root for convenience
pub use api::EbayClient;
pub use auth::{AccessToken, TokenScheme};
pub use config::{EbayConfig, EbayConfigBuilder, Environment, HostUrl};
pub use error::ConfigError;

// Re-export HTTP client types
pub use clients::{
    ApiError, ByteRange, ContentRange, DataType, ErrorDetail, ErrorKind, HttpClient, HttpError,
    HttpMethod, HttpRequest, HttpRequestBuilder, HttpResponse, HttpTransport,
    InvalidHttpRequestError, RequestOptions, ResponseBody, RestClient, TransportError,
};
