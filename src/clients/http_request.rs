//! HTTP request types for the eBay API SDK.
//!
//! This module provides the [`HttpRequest`] descriptor and its builder.
//! A descriptor is built per call, validated once, and discarded after the
//! response arrives.

use std::fmt;

use crate::clients::errors::InvalidHttpRequestError;
use crate::clients::query::QueryValue;
use crate::clients::range::ByteRange;

/// HTTP methods used by eBay's REST APIs.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum HttpMethod {
    /// HTTP GET method for retrieving resources.
    Get,
    /// HTTP POST method for creating resources and triggering actions.
    Post,
    /// HTTP PUT method for updating resources.
    Put,
    /// HTTP DELETE method for removing resources.
    Delete,
}

impl HttpMethod {
    /// Returns the method as sent on the wire.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
            Self::Put => "PUT",
            Self::Delete => "DELETE",
        }
    }
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Content type for HTTP request bodies.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DataType {
    /// JSON content type (`application/json`).
    Json,
}

impl DataType {
    /// Returns the MIME type string for this data type.
    #[must_use]
    pub const fn as_content_type(&self) -> &'static str {
        match self {
            Self::Json => "application/json",
        }
    }
}

/// A request to be sent to an eBay API.
///
/// Query parameters and headers keep insertion order. Header names keep the
/// case they were given in; lookups are case-insensitive.
///
/// # Example
///
/// ```rust
/// use ebay_api::clients::{HttpMethod, HttpRequest};
///
/// let request = HttpRequest::builder(HttpMethod::Get, "/buy/feed/v1_beta/item")
///     .query_param("category_id", "9355")
///     .header("X-EBAY-C-MARKETPLACE-ID", "EBAY_US")
///     .header("Range", "bytes=0-1023")
///     .require_header("X-EBAY-C-MARKETPLACE-ID")
///     .build()
///     .unwrap();
///
/// assert_eq!(request.header_value("range"), Some("bytes=0-1023"));
/// ```
#[derive(Clone, Debug)]
pub struct HttpRequest {
    /// The HTTP method for this request.
    pub http_method: HttpMethod,
    /// The path (base path included) for this request.
    pub path: String,
    /// The request body, if any.
    pub body: Option<serde_json::Value>,
    /// The content type of the body.
    pub body_type: Option<DataType>,
    /// Query parameters, in insertion order.
    pub query: Vec<(String, QueryValue)>,
    /// Per-call headers, in insertion order.
    pub headers: Vec<(String, String)>,
    /// Header names that must be present once defaults are merged in.
    pub required_headers: Vec<String>,
}

impl HttpRequest {
    /// Creates a new builder for constructing an `HttpRequest`.
    #[must_use]
    pub fn builder(method: HttpMethod, path: impl Into<String>) -> HttpRequestBuilder {
        HttpRequestBuilder::new(method, path)
    }

    /// Returns the value of a per-call header, matching the name case-insensitively.
    #[must_use]
    pub fn header_value(&self, name: &str) -> Option<&str> {
        find_header(&self.headers, name)
    }

    /// Validates the request.
    ///
    /// Required headers are not checked here since defaults may still supply
    /// them; see [`HttpRequest::verify_required_headers`].
    ///
    /// # Errors
    ///
    /// Returns [`InvalidHttpRequestError`] if:
    /// - `path` is empty
    /// - `body` is `Some` but `body_type` is `None`
    /// - a `Range` header is present but not a valid byte range
    pub fn verify(&self) -> Result<(), InvalidHttpRequestError> {
        if self.path.trim().is_empty() || self.path.trim() == "/" {
            return Err(InvalidHttpRequestError::EmptyPath);
        }

        if self.body.is_some() && self.body_type.is_none() {
            return Err(InvalidHttpRequestError::MissingBodyType);
        }

        if let Some(range) = self.header_value("Range") {
            ByteRange::parse_all(range)?;
        }

        Ok(())
    }

    /// Checks every required header against the fully merged header set.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidHttpRequestError::MissingRequiredHeader`] naming the
    /// first required header absent (or blank) in `merged`.
    pub fn verify_required_headers(
        &self,
        merged: &[(String, String)],
    ) -> Result<(), InvalidHttpRequestError> {
        for required in &self.required_headers {
            let present = find_header(merged, required).is_some_and(|v| !v.trim().is_empty());
            if !present {
                return Err(InvalidHttpRequestError::MissingRequiredHeader {
                    header: required.clone(),
                });
            }
        }
        Ok(())
    }
}

pub(crate) fn find_header<'a>(headers: &'a [(String, String)], name: &str) -> Option<&'a str> {
    headers
        .iter()
        .rev()
        .find(|(key, _)| key.eq_ignore_ascii_case(name))
        .map(|(_, value)| value.as_str())
}

/// Inserts or replaces a header, matching the name case-insensitively.
///
/// A replacement takes the new name's case and moves to the end.
pub(crate) fn set_header(headers: &mut Vec<(String, String)>, name: String, value: String) {
    headers.retain(|(key, _)| !key.eq_ignore_ascii_case(&name));
    headers.push((name, value));
}

/// Builder for constructing [`HttpRequest`] instances.
#[derive(Debug)]
pub struct HttpRequestBuilder {
    http_method: HttpMethod,
    path: String,
    body: Option<serde_json::Value>,
    body_type: Option<DataType>,
    query: Vec<(String, QueryValue)>,
    headers: Vec<(String, String)>,
    required_headers: Vec<String>,
}

impl HttpRequestBuilder {
    fn new(method: HttpMethod, path: impl Into<String>) -> Self {
        Self {
            http_method: method,
            path: path.into(),
            body: None,
            body_type: None,
            query: Vec::new(),
            headers: Vec::new(),
            required_headers: Vec::new(),
        }
    }

    /// Sets the request body.
    ///
    /// When setting a body, you must also set the body type via [`body_type`](Self::body_type).
    #[must_use]
    pub fn body(mut self, body: impl Into<serde_json::Value>) -> Self {
        self.body = Some(body.into());
        self
    }

    /// Sets the content type of the request body.
    #[must_use]
    pub const fn body_type(mut self, body_type: DataType) -> Self {
        self.body_type = Some(body_type);
        self
    }

    /// Appends query parameters.
    #[must_use]
    pub fn query(mut self, query: impl IntoIterator<Item = (String, QueryValue)>) -> Self {
        self.query.extend(query);
        self
    }

    /// Adds a single query parameter.
    #[must_use]
    pub fn query_param(mut self, key: impl Into<String>, value: impl Into<QueryValue>) -> Self {
        self.query.push((key.into(), value.into()));
        self
    }

    /// Adds headers, each replacing any earlier header of the same name.
    #[must_use]
    pub fn headers(mut self, headers: impl IntoIterator<Item = (String, String)>) -> Self {
        for (name, value) in headers {
            set_header(&mut self.headers, name, value);
        }
        self
    }

    /// Adds a single header, replacing any earlier header of the same name.
    #[must_use]
    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        set_header(&mut self.headers, name.into(), value.into());
        self
    }

    /// Marks a header as required after defaults are merged.
    #[must_use]
    pub fn require_header(mut self, name: impl Into<String>) -> Self {
        self.required_headers.push(name.into());
        self
    }

    /// Builds the [`HttpRequest`], validating it in the process.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidHttpRequestError`] if the request fails validation.
    pub fn build(self) -> Result<HttpRequest, InvalidHttpRequestError> {
        let request = HttpRequest {
            http_method: self.http_method,
            path: self.path,
            body: self.body,
            body_type: self.body_type,
            query: self.query,
            headers: self.headers,
            required_headers: self.required_headers,
        };
        request.verify()?;
        Ok(request)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_http_method_display() {
        assert_eq!(HttpMethod::Get.to_string(), "GET");
        assert_eq!(HttpMethod::Post.to_string(), "POST");
        assert_eq!(HttpMethod::Put.to_string(), "PUT");
        assert_eq!(HttpMethod::Delete.to_string(), "DELETE");
    }

    #[test]
    fn test_builder_creates_valid_get_request() {
        let request = HttpRequest::builder(HttpMethod::Get, "/sell/fulfillment/v1/order")
            .build()
            .unwrap();

        assert_eq!(request.http_method, HttpMethod::Get);
        assert_eq!(request.path, "/sell/fulfillment/v1/order");
        assert!(request.body.is_none());
        assert!(request.query.is_empty());
        assert!(request.headers.is_empty());
    }

    #[test]
    fn test_post_without_body_is_allowed() {
        let request = HttpRequest::builder(HttpMethod::Post, "/post-order/v2/return/5/escalate")
            .build();
        assert!(request.is_ok());
    }

    #[test]
    fn test_verify_rejects_empty_path() {
        for path in ["", "  ", "/"] {
            let result = HttpRequest::builder(HttpMethod::Get, path).build();
            assert!(matches!(result, Err(InvalidHttpRequestError::EmptyPath)));
        }
    }

    #[test]
    fn test_verify_requires_body_type_when_body_present() {
        let result = HttpRequest::builder(HttpMethod::Post, "/x")
            .body(json!({"key": "value"}))
            .build();

        assert!(matches!(result, Err(InvalidHttpRequestError::MissingBodyType)));
    }

    #[test]
    fn test_verify_validates_range_header() {
        let result = HttpRequest::builder(HttpMethod::Get, "/item")
            .header("range", "bytes=100-0")
            .build();
        assert!(matches!(
            result,
            Err(InvalidHttpRequestError::InvalidRange { value }) if value == "bytes=100-0"
        ));

        let ok = HttpRequest::builder(HttpMethod::Get, "/item")
            .header("Range", "bytes=0-10485759")
            .build()
            .unwrap();
        assert_eq!(ok.header_value("RANGE"), Some("bytes=0-10485759"));
    }

    #[test]
    fn test_header_override_is_case_insensitive_and_keeps_new_case() {
        let request = HttpRequest::builder(HttpMethod::Get, "/x")
            .header("x-ebay-c-marketplace-id", "EBAY_US")
            .header("X-EBAY-C-MARKETPLACE-ID", "EBAY_DE")
            .build()
            .unwrap();

        assert_eq!(
            request.headers,
            vec![("X-EBAY-C-MARKETPLACE-ID".to_string(), "EBAY_DE".to_string())]
        );
    }

    #[test]
    fn test_query_params_keep_insertion_order() {
        let request = HttpRequest::builder(HttpMethod::Get, "/order")
            .query_param("offset", 10_u32)
            .query_param("limit", 50_u32)
            .query_param("orderIds", ["1", "2"])
            .build()
            .unwrap();

        let keys: Vec<&str> = request.query.iter().map(|(k, _)| k.as_str()).collect();
        assert_eq!(keys, vec!["offset", "limit", "orderIds"]);
    }

    #[test]
    fn test_verify_required_headers() {
        let request = HttpRequest::builder(HttpMethod::Get, "/item")
            .require_header("X-EBAY-C-MARKETPLACE-ID")
            .build()
            .unwrap();

        let missing = request.verify_required_headers(&[]);
        assert!(matches!(
            missing,
            Err(InvalidHttpRequestError::MissingRequiredHeader { header })
                if header == "X-EBAY-C-MARKETPLACE-ID"
        ));

        let blank = request.verify_required_headers(&[(
            "X-EBAY-C-MARKETPLACE-ID".to_string(),
            " ".to_string(),
        )]);
        assert!(blank.is_err());

        let present = request.verify_required_headers(&[(
            "x-ebay-c-marketplace-id".to_string(),
            "EBAY_US".to_string(),
        )]);
        assert!(present.is_ok());
    }
}
