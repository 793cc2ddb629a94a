//! HTTP client for eBay API communication.
//!
//! This module provides the [`HttpClient`] type: the long-lived root that
//! owns the configuration-derived default headers and the transport, and
//! turns one [`HttpRequest`] into exactly one round trip.

use std::fmt;
use std::sync::Arc;

use crate::auth::{AccessToken, TokenScheme};
use crate::clients::errors::{ApiError, HttpError, InvalidHttpRequestError, TransportError};
use crate::clients::http_request::{set_header, HttpRequest};
use crate::clients::http_response::{HttpResponse, ResponseBody};
use crate::clients::query::encode_query;
use crate::clients::rest::RestClient;
use crate::clients::transport::{HttpTransport, PreparedRequest, ReqwestTransport};
use crate::config::EbayConfig;

/// SDK version from Cargo.toml.
pub const SDK_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Header carrying the marketplace a call is made for.
pub const MARKETPLACE_HEADER: &str = "X-EBAY-C-MARKETPLACE-ID";

/// HTTP client for making requests to eBay's REST APIs.
///
/// The client handles:
/// - Base URI selection from the environment or the `api_host` override
/// - Default headers: `Authorization`, `Accept`, `User-Agent`, and the
///   configured marketplace and language headers
/// - Merging per-call headers over the defaults (case-insensitive)
/// - Normalizing responses into [`HttpResponse`] or an [`HttpError`]
///
/// Requests are sent once. There is no retry and no default timeout.
///
/// # Thread Safety
///
/// `HttpClient` is `Send + Sync` and cheap to clone; clones share the same
/// transport and defaults.
///
/// # Example
///
/// ```rust,ignore
/// use ebay_api::{AccessToken, EbayConfig};
/// use ebay_api::clients::{HttpClient, RequestOptions};
///
/// let config = EbayConfig::builder()
///     .access_token(AccessToken::new("token")?)
///     .build()?;
/// let client = HttpClient::new(&config)?;
///
/// let fulfillment = client.configure("/sell/fulfillment/v1");
/// let orders = fulfillment
///     .get("/order", RequestOptions::new().param("limit", 10_u32))
///     .await?;
/// ```
#[derive(Clone)]
pub struct HttpClient {
    inner: Arc<Inner>,
}

struct Inner {
    transport: Arc<dyn HttpTransport>,
    base_uri: String,
    access_token: AccessToken,
    default_headers: Vec<(String, String)>,
}

// Verify HttpClient is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<HttpClient>();
};

impl HttpClient {
    /// Creates a client using the default `reqwest` transport.
    ///
    /// # Errors
    ///
    /// Returns [`TransportError`] if the HTTP client cannot be created.
    pub fn new(config: &EbayConfig) -> Result<Self, TransportError> {
        Ok(Self::with_transport(config, Arc::new(ReqwestTransport::new()?)))
    }

    /// Creates a client that sends through the given transport.
    #[must_use]
    pub fn with_transport(config: &EbayConfig, transport: Arc<dyn HttpTransport>) -> Self {
        let user_agent_prefix = config
            .user_agent_prefix()
            .map_or(String::new(), |prefix| format!("{prefix} | "));
        let rust_version = env!("CARGO_PKG_RUST_VERSION");
        let user_agent =
            format!("{user_agent_prefix}eBay API Library v{SDK_VERSION} | Rust {rust_version}");

        let mut default_headers = vec![
            (
                "Authorization".to_string(),
                config.access_token().authorization_value(TokenScheme::Bearer),
            ),
            ("Accept".to_string(), "application/json".to_string()),
            ("User-Agent".to_string(), user_agent),
        ];
        if let Some(marketplace) = config.marketplace() {
            default_headers.push((MARKETPLACE_HEADER.to_string(), marketplace.to_string()));
        }
        if let Some(language) = config.content_language() {
            default_headers.push(("Content-Language".to_string(), language.to_string()));
        }
        if let Some(language) = config.accept_language() {
            default_headers.push(("Accept-Language".to_string(), language.to_string()));
        }

        Self {
            inner: Arc::new(Inner {
                transport,
                base_uri: config.base_uri().to_string(),
                access_token: config.access_token().clone(),
                default_headers,
            }),
        }
    }

    /// Returns a client scoped to one API family.
    ///
    /// `base_path` is the family's path prefix, e.g. `/buy/feed/v1_beta`.
    /// The returned client shares this client's transport and defaults.
    #[must_use]
    pub fn configure(&self, base_path: impl Into<String>) -> RestClient {
        RestClient::new(self.clone(), base_path)
    }

    /// Returns the origin every URL is built from.
    #[must_use]
    pub fn base_uri(&self) -> &str {
        &self.inner.base_uri
    }

    /// Returns the headers sent with every request, in sending order.
    #[must_use]
    pub fn default_headers(&self) -> &[(String, String)] {
        &self.inner.default_headers
    }

    /// Returns the access token requests are authorized with.
    #[must_use]
    pub fn access_token(&self) -> &AccessToken {
        &self.inner.access_token
    }

    /// Sends an HTTP request to eBay.
    ///
    /// `request.path` is appended to the base URI as is, so it must already
    /// include the API family's base path. Per-call headers replace defaults
    /// of the same name for this call only.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if:
    /// - Request validation fails (`InvalidRequest`), in which case nothing is sent
    /// - No response is received (`Transport`)
    /// - eBay answers with a non-2xx status (`Api`)
    pub async fn request(&self, request: HttpRequest) -> Result<HttpResponse, HttpError> {
        let prepared = self.prepare(&request)?;
        let method = prepared.method;
        let url = prepared.url.clone();

        tracing::debug!(method = %method, url = %url, "Sending eBay API request");

        let raw = self.inner.transport.send(prepared).await.map_err(|e| {
            tracing::debug!(method = %method, url = %url, error = %e, "eBay API request failed in transport");
            e
        })?;

        if !(200..=299).contains(&raw.status) {
            let error = ApiError::from_body(raw.status, &raw.body);
            tracing::debug!(
                method = %method,
                url = %url,
                status = raw.status,
                error_count = error.errors.len(),
                "eBay API returned an error"
            );
            return Err(error.into());
        }

        let content_type = raw
            .headers
            .get("content-type")
            .and_then(|values| values.first())
            .map(String::as_str);
        let body = ResponseBody::from_bytes(content_type, raw.body.clone());
        let response = HttpResponse::new(raw.status, raw.headers, body);

        for warning in response.warnings() {
            tracing::warn!(
                "eBay API warning for {} {}: [{}] {}",
                method,
                request.path,
                warning.error_id.map_or_else(|| "-".to_string(), |id| id.to_string()),
                warning.message.as_deref().unwrap_or("no message")
            );
        }

        Ok(response)
    }

    /// Validates a request and resolves it into what goes over the wire.
    fn prepare(&self, request: &HttpRequest) -> Result<PreparedRequest, InvalidHttpRequestError> {
        request.verify()?;

        let path = if request.path.starts_with('/') {
            request.path.clone()
        } else {
            format!("/{}", request.path)
        };
        let mut url = format!("{}{path}", self.inner.base_uri);
        if !request.query.is_empty() {
            url.push('?');
            url.push_str(&encode_query(&request.query));
        }

        let mut headers = self.inner.default_headers.clone();
        if let Some(body_type) = &request.body_type {
            set_header(
                &mut headers,
                "Content-Type".to_string(),
                body_type.as_content_type().to_string(),
            );
        }
        for (name, value) in &request.headers {
            set_header(&mut headers, name.clone(), value.clone());
        }

        request.verify_required_headers(&headers)?;

        for (name, value) in &headers {
            let sendable = reqwest::header::HeaderName::from_bytes(name.as_bytes()).is_ok()
                && reqwest::header::HeaderValue::from_str(value).is_ok();
            if !sendable {
                return Err(InvalidHttpRequestError::InvalidHeader { name: name.clone() });
            }
        }

        Ok(PreparedRequest {
            method: request.http_method,
            url,
            headers,
            body: request.body.as_ref().map(|body| body.to_string().into_bytes()),
        })
    }
}

impl fmt::Debug for HttpClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let header_names: Vec<&str> = self
            .inner
            .default_headers
            .iter()
            .map(|(name, _)| name.as_str())
            .collect();
        f.debug_struct("HttpClient")
            .field("base_uri", &self.inner.base_uri)
            .field("default_headers", &header_names)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clients::http_request::{DataType, HttpMethod};
    use crate::clients::test_support::RecordingTransport;
    use crate::config::{Environment, HostUrl};
    use crate::enums::{ContentLanguage, Marketplace};
    use serde_json::json;

    fn config() -> EbayConfig {
        EbayConfig::builder()
            .access_token(AccessToken::new("test-token").unwrap())
            .environment(Environment::Sandbox)
            .marketplace(Marketplace::EbayUs)
            .content_language(ContentLanguage::EnUs)
            .build()
            .unwrap()
    }

    #[test]
    fn test_default_headers() {
        let client = HttpClient::with_transport(
            &config(),
            RecordingTransport::new(200, "application/json", b"{}"),
        );

        let headers = client.default_headers();
        let get = |name: &str| {
            headers
                .iter()
                .find(|(k, _)| k == name)
                .map(|(_, v)| v.as_str())
        };
        assert_eq!(get("Authorization"), Some("Bearer test-token"));
        assert_eq!(get("Accept"), Some("application/json"));
        assert_eq!(get(MARKETPLACE_HEADER), Some("EBAY_US"));
        assert_eq!(get("Content-Language"), Some("en-US"));
        assert!(get("Accept-Language").is_none());
        assert!(get("User-Agent").unwrap().contains("eBay API Library v"));
        assert_eq!(client.base_uri(), "https://api.sandbox.ebay.com");
    }

    #[test]
    fn test_user_agent_with_prefix() {
        let config = EbayConfig::builder()
            .access_token(AccessToken::new("t").unwrap())
            .user_agent_prefix("MyApp/1.0")
            .build()
            .unwrap();
        let client = HttpClient::with_transport(
            &config,
            RecordingTransport::new(200, "application/json", b"{}"),
        );

        let (_, user_agent) = client
            .default_headers()
            .iter()
            .find(|(k, _)| k == "User-Agent")
            .unwrap();
        assert!(user_agent.starts_with("MyApp/1.0 | eBay API Library"));
    }

    #[test]
    fn test_debug_does_not_leak_token() {
        let client = HttpClient::with_transport(
            &config(),
            RecordingTransport::new(200, "application/json", b"{}"),
        );
        let debug = format!("{client:?}");
        assert!(debug.contains("https://api.sandbox.ebay.com"));
        assert!(!debug.contains("test-token"));
    }

    #[tokio::test]
    async fn test_request_builds_url_and_merges_headers() {
        let transport = RecordingTransport::new(200, "application/json", b"{\"ok\":true}");
        let client = HttpClient::with_transport(&config(), transport.clone());

        let request = HttpRequest::builder(HttpMethod::Get, "/buy/feed/v1_beta/item")
            .query_param("category_id", "9355")
            .header("x-ebay-c-marketplace-id", "EBAY_DE")
            .build()
            .unwrap();
        let response = client.request(request).await.unwrap();

        assert_eq!(response.json(), Some(&json!({"ok": true})));

        let sent = transport.last();
        assert_eq!(
            sent.url,
            "https://api.sandbox.ebay.com/buy/feed/v1_beta/item?category_id=9355"
        );
        assert_eq!(sent.header(MARKETPLACE_HEADER), Some("EBAY_DE"));
        let marketplace_headers = sent
            .headers
            .iter()
            .filter(|(k, _)| k.eq_ignore_ascii_case(MARKETPLACE_HEADER))
            .count();
        assert_eq!(marketplace_headers, 1);
        assert!(client
            .default_headers()
            .iter()
            .any(|(k, v)| k == MARKETPLACE_HEADER && v == "EBAY_US"));
    }

    #[tokio::test]
    async fn test_body_sets_content_type() {
        let transport = RecordingTransport::new(201, "application/json", b"");
        let client = HttpClient::with_transport(&config(), transport.clone());

        let request = HttpRequest::builder(HttpMethod::Post, "/sell/fulfillment/v1/order/1/issue_refund")
            .body(json!({"reasonForRefund": "BUYER_CANCEL"}))
            .body_type(DataType::Json)
            .build()
            .unwrap();
        let response = client.request(request).await.unwrap();
        assert!(response.body.is_empty());

        let sent = transport.last();
        assert_eq!(sent.header("content-type"), Some("application/json"));
        let body: serde_json::Value = serde_json::from_slice(sent.body.as_deref().unwrap()).unwrap();
        assert_eq!(body, json!({"reasonForRefund": "BUYER_CANCEL"}));
    }

    #[tokio::test]
    async fn test_missing_required_header_is_never_sent() {
        let config = EbayConfig::builder()
            .access_token(AccessToken::new("t").unwrap())
            .build()
            .unwrap();
        let transport = RecordingTransport::new(200, "application/json", b"{}");
        let client = HttpClient::with_transport(&config, transport.clone());

        let request = HttpRequest::builder(HttpMethod::Get, "/buy/feed/v1_beta/item")
            .require_header(MARKETPLACE_HEADER)
            .build()
            .unwrap();
        let result = client.request(request).await;

        assert!(matches!(
            result,
            Err(HttpError::InvalidRequest(InvalidHttpRequestError::MissingRequiredHeader { .. }))
        ));
        assert_eq!(transport.count(), 0);
    }

    #[tokio::test]
    async fn test_unsendable_header_is_rejected() {
        let transport = RecordingTransport::new(200, "application/json", b"{}");
        let client = HttpClient::with_transport(&config(), transport.clone());

        let request = HttpRequest::builder(HttpMethod::Get, "/x")
            .header("X-Bad", "line\nbreak")
            .build()
            .unwrap();
        let result = client.request(request).await;

        assert!(matches!(
            result,
            Err(HttpError::InvalidRequest(InvalidHttpRequestError::InvalidHeader { name })) if name == "X-Bad"
        ));
        assert_eq!(transport.count(), 0);
    }

    #[tokio::test]
    async fn test_non_2xx_becomes_api_error() {
        let transport = RecordingTransport::new(
            404,
            "application/json",
            br#"[{"errorId":11001,"message":"Not found"}]"#,
        );
        let client = HttpClient::with_transport(&config(), transport);

        let request = HttpRequest::builder(HttpMethod::Get, "/x").build().unwrap();
        let error = client.request(request).await.unwrap_err();

        assert_eq!(error.status(), Some(404));
        match error {
            HttpError::Api(api) => assert!(api.has_error_id(11001)),
            other => panic!("expected Api error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_api_host_override_is_used() {
        let config = EbayConfig::builder()
            .access_token(AccessToken::new("t").unwrap())
            .api_host(HostUrl::new("http://127.0.0.1:8080").unwrap())
            .build()
            .unwrap();
        let transport = RecordingTransport::new(200, "application/json", b"{}");
        let client = HttpClient::with_transport(&config, transport.clone());

        let request = HttpRequest::builder(HttpMethod::Delete, "sell/x/1").build().unwrap();
        client.request(request).await.unwrap();

        assert_eq!(transport.last().url, "http://127.0.0.1:8080/sell/x/1");
    }
}
