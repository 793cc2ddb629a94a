//! The HTTP transport seam.
//!
//! [`HttpClient`](crate::clients::HttpClient) builds a fully resolved
//! [`PreparedRequest`] and hands it to an [`HttpTransport`], which performs
//! exactly one round trip. The default [`ReqwestTransport`] uses `reqwest`;
//! tests plug in their own implementations.

use std::collections::HashMap;

use async_trait::async_trait;
use bytes::Bytes;

use crate::clients::errors::TransportError;
use crate::clients::http_request::HttpMethod;

/// A request with its URL, headers and body fully resolved.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PreparedRequest {
    /// The HTTP method.
    pub method: HttpMethod,
    /// Absolute URL, query string included.
    pub url: String,
    /// Headers in the order they were merged, names as the caller wrote them.
    ///
    /// Name case is not kept on the wire: [`ReqwestTransport`] sends every
    /// name lowercased, which HTTP treats as the same header.
    pub headers: Vec<(String, String)>,
    /// Serialized body, if any.
    pub body: Option<Vec<u8>>,
}

impl PreparedRequest {
    /// Returns the value of a header, matching the name case-insensitively.
    #[must_use]
    pub fn header(&self, name: &str) -> Option<&str> {
        crate::clients::http_request::find_header(&self.headers, name)
    }
}

/// What came back over the wire, before any interpretation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RawResponse {
    /// HTTP status code.
    pub status: u16,
    /// Response headers, names lower-cased.
    pub headers: HashMap<String, Vec<String>>,
    /// Response body bytes.
    pub body: Bytes,
}

/// Sends one prepared request and returns the raw response.
///
/// Implementations must not retry and must report a missing response as a
/// [`TransportError`]; any status code, 4xx and 5xx included, is a response.
#[async_trait]
pub trait HttpTransport: Send + Sync {
    /// Performs a single round trip.
    async fn send(&self, request: PreparedRequest) -> Result<RawResponse, TransportError>;
}

/// [`HttpTransport`] backed by a `reqwest::Client`.
///
/// No timeout is configured by default. Supply a client built with
/// `reqwest::ClientBuilder::timeout` through [`ReqwestTransport::from_client`]
/// to bound requests.
#[derive(Clone, Debug)]
pub struct ReqwestTransport {
    client: reqwest::Client,
}

impl ReqwestTransport {
    /// Creates a transport with a rustls-backed client.
    ///
    /// # Errors
    ///
    /// Returns [`TransportError::Other`] if the TLS backend cannot be initialized.
    pub fn new() -> Result<Self, TransportError> {
        let client = reqwest::Client::builder().use_rustls_tls().build()?;
        Ok(Self { client })
    }

    /// Wraps an existing `reqwest::Client`.
    #[must_use]
    pub const fn from_client(client: reqwest::Client) -> Self {
        Self { client }
    }

    const fn convert_method(method: HttpMethod) -> reqwest::Method {
        match method {
            HttpMethod::Get => reqwest::Method::GET,
            HttpMethod::Post => reqwest::Method::POST,
            HttpMethod::Put => reqwest::Method::PUT,
            HttpMethod::Delete => reqwest::Method::DELETE,
        }
    }

    /// Header names come out lowercased.
    fn convert_headers(headers: &[(String, String)]) -> reqwest::header::HeaderMap {
        let mut header_map = reqwest::header::HeaderMap::with_capacity(headers.len());
        for (key, value) in headers {
            if let (Ok(name), Ok(val)) = (
                reqwest::header::HeaderName::from_bytes(key.as_bytes()),
                reqwest::header::HeaderValue::from_str(value),
            ) {
                header_map.append(name, val);
            }
        }
        header_map
    }

    fn extract_headers(headers: &reqwest::header::HeaderMap) -> HashMap<String, Vec<String>> {
        let mut result: HashMap<String, Vec<String>> = HashMap::new();
        for (name, value) in headers {
            let value = value.to_str().unwrap_or_default().to_string();
            result
                .entry(name.as_str().to_ascii_lowercase())
                .or_default()
                .push(value);
        }
        result
    }
}

#[async_trait]
impl HttpTransport for ReqwestTransport {
    async fn send(&self, request: PreparedRequest) -> Result<RawResponse, TransportError> {
        let mut req_builder = self
            .client
            .request(Self::convert_method(request.method), &request.url)
            .headers(Self::convert_headers(&request.headers));

        if let Some(body) = request.body {
            req_builder = req_builder.body(body);
        }

        let response = req_builder.send().await?;

        let status = response.status().as_u16();
        let headers = Self::extract_headers(response.headers());
        let body = response.bytes().await?;

        Ok(RawResponse {
            status,
            headers,
            body,
        })
    }
}

// Verify transports are Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<ReqwestTransport>();
    assert_send_sync::<PreparedRequest>();
};
