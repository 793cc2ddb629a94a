//! HTTP-specific error types for the eBay API SDK.
//!
//! Every failed call surfaces exactly one of three kinds:
//!
//! - [`InvalidHttpRequestError`]: the request was malformed and never sent
//! - [`TransportError`]: the request never got a response
//! - [`ApiError`]: eBay answered with a non-2xx status
//!
//! [`HttpError`] unifies them. None of them is retried by the SDK.
//!
//! # Example
//!
//! ```rust,ignore
//! use ebay_api::clients::HttpError;
//!
//! match feed.get_item_feed(&params, None, "bytes=0-1023").await {
//!     Ok(response) => println!("status {}", response.code),
//!     Err(HttpError::Api(e)) => {
//!         for detail in &e.errors {
//!             println!("{:?}: {:?}", detail.error_id, detail.message);
//!         }
//!     }
//!     Err(HttpError::Transport(e)) => println!("Network problem: {e}"),
//!     Err(HttpError::InvalidRequest(e)) => println!("Bad input: {e}"),
//! }
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A name/value pair attached to an eBay error entry.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorParameter {
    /// Parameter name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Parameter value.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
}

/// One entry of eBay's structured error body.
///
/// eBay REST APIs report failures as an array of these, either at the top
/// level or under an `errors` key. Every field is optional because different
/// API families populate different subsets.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorDetail {
    /// Numeric error code, e.g. `11001`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_id: Option<u64>,
    /// Domain the error originated in, e.g. `API_FULFILLMENT`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub domain: Option<String>,
    /// Subdomain within the domain.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subdomain: Option<String>,
    /// `REQUEST`, `APPLICATION` or `BUSINESS`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    /// Short message.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    /// Detailed message.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub long_message: Option<String>,
    /// Request elements the error refers to.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub input_ref_ids: Option<Vec<String>>,
    /// Response elements the error refers to.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output_ref_ids: Option<Vec<String>>,
    /// Extra context.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parameters: Option<Vec<ErrorParameter>>,
}

impl ErrorDetail {
    /// Parses error entries out of a JSON body.
    ///
    /// Accepts `{"errors": [...]}`, a bare `[...]`, or the Post-Order
    /// `{"error": [...]}` shape. Anything else yields an empty list.
    #[must_use]
    pub fn parse_list(body: &serde_json::Value) -> Vec<Self> {
        let entries = match body {
            serde_json::Value::Array(_) => Some(body),
            serde_json::Value::Object(map) => map.get("errors").or_else(|| map.get("error")),
            _ => None,
        };

        entries
            .and_then(|v| serde_json::from_value::<Vec<Self>>(v.clone()).ok())
            .unwrap_or_default()
    }
}

/// Error returned when eBay answers with a non-2xx status.
///
/// # Example
///
/// ```rust
/// use ebay_api::clients::{ApiError, ErrorDetail};
///
/// let error = ApiError::from_body(404, br#"[{"errorId":11001,"message":"Not found"}]"#);
/// assert_eq!(error.status, 404);
/// assert_eq!(error.errors.len(), 1);
/// assert_eq!(error.errors[0].error_id, Some(11001));
/// assert!(error.to_string().contains("Not found"));
/// ```
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("eBay API request failed with status {status}: {}", summarize(.errors, .raw_body))]
pub struct ApiError {
    /// The HTTP status code of the response.
    pub status: u16,
    /// Structured error entries, possibly empty.
    pub errors: Vec<ErrorDetail>,
    /// The response body as received.
    pub raw_body: String,
}

impl ApiError {
    /// Builds an `ApiError` from a status code and raw response body.
    #[must_use]
    pub fn from_body(status: u16, body: &[u8]) -> Self {
        let errors = serde_json::from_slice::<serde_json::Value>(body)
            .map(|value| ErrorDetail::parse_list(&value))
            .unwrap_or_default();

        Self {
            status,
            errors,
            raw_body: String::from_utf8_lossy(body).into_owned(),
        }
    }

    /// Returns `true` if any entry carries the given `errorId`.
    #[must_use]
    pub fn has_error_id(&self, error_id: u64) -> bool {
        self.errors.iter().any(|e| e.error_id == Some(error_id))
    }
}

fn summarize(errors: &[ErrorDetail], raw_body: &str) -> String {
    let messages: Vec<String> = errors
        .iter()
        .map(|e| match (e.error_id, e.message.as_deref()) {
            (Some(id), Some(message)) => format!("[{id}] {message}"),
            (Some(id), None) => format!("[{id}]"),
            (None, Some(message)) => message.to_string(),
            (None, None) => "unknown error".to_string(),
        })
        .collect();

    if messages.is_empty() {
        if raw_body.is_empty() {
            "no error details".to_string()
        } else {
            raw_body.to_string()
        }
    } else {
        messages.join("; ")
    }
}

/// Error returned when a request never received a response.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TransportError {
    /// The request did not complete in time.
    #[error("Request timed out: {message}")]
    Timeout {
        /// Description from the underlying client.
        message: String,
    },

    /// The connection could not be established (DNS, refused, TLS).
    #[error("Connection failed: {message}")]
    Connection {
        /// Description from the underlying client.
        message: String,
    },

    /// Any other failure sending the request or reading the response.
    #[error("Transport error: {message}")]
    Other {
        /// Description from the underlying client.
        message: String,
    },
}

impl From<reqwest::Error> for TransportError {
    fn from(error: reqwest::Error) -> Self {
        let message = error.to_string();
        if error.is_timeout() {
            Self::Timeout { message }
        } else if error.is_connect() {
            Self::Connection { message }
        } else {
            Self::Other { message }
        }
    }
}

/// Error returned when a request fails validation before it is sent.
///
/// # Example
///
/// ```rust
/// use ebay_api::clients::InvalidHttpRequestError;
///
/// let error = InvalidHttpRequestError::MissingRequiredHeader {
///     header: "X-EBAY-C-MARKETPLACE-ID".to_string(),
/// };
/// assert!(error.to_string().contains("X-EBAY-C-MARKETPLACE-ID"));
/// ```
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum InvalidHttpRequestError {
    /// The relative path was empty.
    #[error("Request path cannot be empty.")]
    EmptyPath,

    /// The relative path repeated the client's base path.
    #[error("Path '{path}' already includes the base path '{base_path}'. Pass the path relative to the base path.")]
    DuplicateBasePath {
        /// The path that was provided.
        path: String,
        /// The base path of the client.
        base_path: String,
    },

    /// The relative path carried its own query string.
    #[error("Path '{path}' contains a query string. Pass query parameters through the request options.")]
    QueryInPath {
        /// The path that was provided.
        path: String,
    },

    /// An identifier interpolated into the path was empty.
    #[error("Path parameter '{name}' cannot be empty.")]
    EmptyPathParameter {
        /// Name of the parameter, e.g. `order_id`.
        name: &'static str,
    },

    /// A request body was provided without specifying the body type.
    #[error("Cannot set a body without also setting body_type.")]
    MissingBodyType,

    /// A header the endpoint requires was absent after merging defaults.
    #[error("Missing required header '{header}'.")]
    MissingRequiredHeader {
        /// The missing header name.
        header: String,
    },

    /// The `Range` header was not a valid, ordered byte range.
    #[error("Invalid byte range '{value}'. Expected 'bytes=start-end' with start <= end.")]
    InvalidRange {
        /// The rejected header value.
        value: String,
    },

    /// A header name or value could not be sent over HTTP.
    #[error("Invalid header '{name}'.")]
    InvalidHeader {
        /// The offending header name.
        name: String,
    },

    /// A params struct could not be turned into query parameters.
    #[error("Failed to serialize query parameters: {message}")]
    InvalidParams {
        /// Description from the serializer.
        message: String,
    },

    /// A request body could not be serialized to JSON.
    #[error("Failed to serialize request body: {message}")]
    InvalidBody {
        /// Description from the serializer.
        message: String,
    },
}

/// The three failure kinds, for callers that branch on kind alone.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Rejected before dispatch.
    Validation,
    /// No response received.
    Transport,
    /// Non-2xx response received.
    Api,
}

/// Unified error type for all HTTP-related errors.
#[derive(Debug, Error)]
pub enum HttpError {
    /// Request validation failed.
    #[error(transparent)]
    InvalidRequest(#[from] InvalidHttpRequestError),

    /// Network or connection error.
    #[error(transparent)]
    Transport(#[from] TransportError),

    /// eBay rejected the request.
    #[error(transparent)]
    Api(#[from] ApiError),
}

impl HttpError {
    /// Returns which of the three failure kinds this is.
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::InvalidRequest(_) => ErrorKind::Validation,
            Self::Transport(_) => ErrorKind::Transport,
            Self::Api(_) => ErrorKind::Api,
        }
    }

    /// Returns the HTTP status for API errors.
    #[must_use]
    pub const fn status(&self) -> Option<u16> {
        match self {
            Self::Api(e) => Some(e.status),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for HttpError {
    fn from(error: reqwest::Error) -> Self {
        Self::Transport(error.into())
    }
}
