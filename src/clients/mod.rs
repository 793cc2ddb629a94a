//! HTTP client types for eBay API communication.
//!
//! This module provides the shared request-building layer every endpoint
//! module composes: base-path scoping, parameter serialization, header
//! injection, single-attempt dispatch and response/error normalization.
//!
//! # Overview
//!
//! The main types in this module are:
//!
//! - [`HttpClient`]: The long-lived root client holding defaults and transport
//! - [`RestClient`]: A client scoped to one API family's base path
//! - [`RequestOptions`]: Per-call params, headers and body
//! - [`HttpRequest`]: A validated request descriptor
//! - [`HttpResponse`]: A successful response with a JSON or binary body
//! - [`HttpTransport`]: The seam a custom transport plugs into
//! - [`ByteRange`] / [`ContentRange`]: Range headers for chunked feed downloads
//! - [`HttpError`]: Validation, transport or API failure
//!
//! # Example
//!
//! ```rust,ignore
//! use ebay_api::{AccessToken, EbayConfig};
//! use ebay_api::clients::{HttpClient, RequestOptions};
//!
//! let config = EbayConfig::builder()
//!     .access_token(AccessToken::new("v^1.1#...")?)
//!     .build()?;
//! let client = HttpClient::new(&config)?;
//!
//! let response = client
//!     .configure("/buy/feed/v1_beta")
//!     .get(
//!         "/item",
//!         RequestOptions::new()
//!             .param("category_id", "9355")
//!             .header("X-EBAY-C-MARKETPLACE-ID", "EBAY_US")
//!             .header("Range", "bytes=0-1023"),
//!     )
//!     .await?;
//! ```
//!
//! # Retry Behavior
//!
//! There is none. Each call makes exactly one transport attempt and no
//! timeout is applied unless the transport's `reqwest::Client` sets one.

mod errors;
mod http_client;
mod http_request;
mod http_response;
mod query;
mod range;
pub mod rest;
#[cfg(test)]
pub(crate) mod test_support;
mod transport;

pub use errors::{
    ApiError, ErrorDetail, ErrorKind, ErrorParameter, HttpError, InvalidHttpRequestError,
    TransportError,
};
pub use http_client::{HttpClient, MARKETPLACE_HEADER, SDK_VERSION};
pub use http_request::{DataType, HttpMethod, HttpRequest, HttpRequestBuilder};
pub use http_response::{HttpResponse, ResponseBody};
pub use query::{encode_query, serialize_to_query, QueryValue};
pub use range::{ByteRange, ContentRange};
pub use transport::{HttpTransport, PreparedRequest, RawResponse, ReqwestTransport};

// Re-export REST client types at the clients module level
pub use rest::{RequestOptions, RestClient};
