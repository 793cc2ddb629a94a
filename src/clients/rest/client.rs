//! REST client scoped to one eBay API family.
//!
//! This module provides the [`RestClient`] type: a cheap handle bound to a
//! base path such as `/sell/fulfillment/v1`, offering `get`, `post`, `put`
//! and `delete` with paths relative to that base.

use std::fmt;

use crate::auth::TokenScheme;
use crate::clients::errors::{HttpError, InvalidHttpRequestError};
use crate::clients::http_request::{find_header, set_header, DataType, HttpMethod, HttpRequest};
use crate::clients::http_response::HttpResponse;
use crate::clients::rest::RequestOptions;
use crate::clients::HttpClient;

/// REST client for one eBay API family.
///
/// Created by [`HttpClient::configure`]. Holds no mutable state; every call
/// builds its own request from the scoped defaults and the call's
/// [`RequestOptions`].
///
/// # Thread Safety
///
/// `RestClient` is `Send + Sync`, making it safe to share across async tasks.
///
/// # Example
///
/// ```rust,ignore
/// use ebay_api::clients::RequestOptions;
///
/// let feed = http_client.configure("/buy/feed/v1_beta");
/// let chunk = feed
///     .get(
///         "/item",
///         RequestOptions::new()
///             .param("category_id", "9355")
///             .header("X-EBAY-C-MARKETPLACE-ID", "EBAY_US")
///             .header("Range", "bytes=0-1023"),
///     )
///     .await?;
/// ```
#[derive(Clone)]
pub struct RestClient {
    http_client: HttpClient,
    base_path: String,
    token_scheme: TokenScheme,
    headers: Vec<(String, String)>,
}

// Verify RestClient is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<RestClient>();
};

impl RestClient {
    /// Creates a client scoped to `base_path`.
    ///
    /// A missing leading `/` is added and trailing `/` are removed.
    #[must_use]
    pub fn new(http_client: HttpClient, base_path: impl Into<String>) -> Self {
        let base_path = base_path.into();
        let trimmed = base_path.trim().trim_end_matches('/');
        let base_path = if trimmed.is_empty() || trimmed.starts_with('/') {
            trimmed.to_string()
        } else {
            format!("/{trimmed}")
        };

        Self {
            http_client,
            base_path,
            token_scheme: TokenScheme::Bearer,
            headers: Vec::new(),
        }
    }

    /// Returns the base path this client is scoped to.
    #[must_use]
    pub fn base_path(&self) -> &str {
        &self.base_path
    }

    /// Returns the `Authorization` scheme used by this client.
    #[must_use]
    pub const fn token_scheme(&self) -> TokenScheme {
        self.token_scheme
    }

    /// Returns the root client.
    #[must_use]
    pub const fn http_client(&self) -> &HttpClient {
        &self.http_client
    }

    /// Adds a header sent with every call made through this client.
    ///
    /// It replaces a client default of the same name; per-call headers still
    /// win over it.
    #[must_use]
    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        let name = name.into();
        if find_header(self.http_client.default_headers(), &name).is_some() {
            tracing::debug!(
                "Rest client for {} overriding default header {}",
                self.base_path,
                name
            );
        }
        set_header(&mut self.headers, name, value.into());
        self
    }

    /// Switches the `Authorization` scheme, keeping the configured token.
    ///
    /// The Post-Order API expects [`TokenScheme::Iaf`].
    #[must_use]
    pub fn with_token_scheme(mut self, scheme: TokenScheme) -> Self {
        if scheme == self.token_scheme {
            tracing::debug!(
                "Rest client for {} has a redundant token scheme override to {}",
                self.base_path,
                scheme
            );
        }
        self.token_scheme = scheme;
        let authorization = self.http_client.access_token().authorization_value(scheme);
        set_header(&mut self.headers, "Authorization".to_string(), authorization);
        self
    }

    /// Sends a GET request.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError::InvalidRequest`] for an empty path, a path that
    /// repeats the base path or carries its own query string, a bad `Range`
    /// header or a missing required header. Returns [`HttpError::Transport`] or [`HttpError::Api`] when
    /// the call itself fails.
    pub async fn get(&self, path: &str, options: RequestOptions) -> Result<HttpResponse, HttpError> {
        self.make_request(HttpMethod::Get, path, options).await
    }

    /// Sends a POST request.
    ///
    /// # Errors
    ///
    /// See [`RestClient::get`].
    pub async fn post(&self, path: &str, options: RequestOptions) -> Result<HttpResponse, HttpError> {
        self.make_request(HttpMethod::Post, path, options).await
    }

    /// Sends a PUT request.
    ///
    /// # Errors
    ///
    /// See [`RestClient::get`].
    pub async fn put(&self, path: &str, options: RequestOptions) -> Result<HttpResponse, HttpError> {
        self.make_request(HttpMethod::Put, path, options).await
    }

    /// Sends a DELETE request.
    ///
    /// # Errors
    ///
    /// See [`RestClient::get`].
    pub async fn delete(
        &self,
        path: &str,
        options: RequestOptions,
    ) -> Result<HttpResponse, HttpError> {
        self.make_request(HttpMethod::Delete, path, options).await
    }

    /// Builds the request descriptor for a call without sending it.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidHttpRequestError`] if the path or options are invalid.
    pub fn build_request(
        &self,
        method: HttpMethod,
        path: &str,
        options: RequestOptions,
    ) -> Result<HttpRequest, InvalidHttpRequestError> {
        let relative = normalize_path(path, &self.base_path)?;
        let (query, headers, body, required_headers) = options.into_parts();

        let mut builder =
            HttpRequest::builder(method, format!("{}{relative}", self.base_path))
                .query(query)
                .headers(self.headers.iter().cloned())
                .headers(headers);

        if let Some(body) = body {
            builder = builder.body(body).body_type(DataType::Json);
        }
        for name in required_headers {
            builder = builder.require_header(name);
        }

        builder.build()
    }

    async fn make_request(
        &self,
        method: HttpMethod,
        path: &str,
        options: RequestOptions,
    ) -> Result<HttpResponse, HttpError> {
        let request = self.build_request(method, path, options)?;
        self.http_client.request(request).await
    }
}

impl fmt::Debug for RestClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let header_names: Vec<&str> = self.headers.iter().map(|(name, _)| name.as_str()).collect();
        f.debug_struct("RestClient")
            .field("base_path", &self.base_path)
            .field("token_scheme", &self.token_scheme)
            .field("headers", &header_names)
            .field("http_client", &self.http_client)
            .finish()
    }
}

/// Normalizes a path relative to `base_path`.
///
/// 1. Rejects empty paths
/// 2. Adds a missing leading `/`
/// 3. Rejects paths that carry a query string
/// 4. Rejects paths that already start with the base path
fn normalize_path(path: &str, base_path: &str) -> Result<String, InvalidHttpRequestError> {
    let trimmed = path.trim();
    if trimmed.trim_matches('/').is_empty() {
        return Err(InvalidHttpRequestError::EmptyPath);
    }

    let normalized = if trimmed.starts_with('/') {
        trimmed.to_string()
    } else {
        format!("/{trimmed}")
    };

    if normalized.contains('?') {
        return Err(InvalidHttpRequestError::QueryInPath {
            path: path.to_string(),
        });
    }

    if !base_path.is_empty() {
        let rest = normalized.strip_prefix(base_path);
        if rest.is_some_and(|rest| rest.is_empty() || rest.starts_with('/')) {
            return Err(InvalidHttpRequestError::DuplicateBasePath {
                path: path.to_string(),
                base_path: base_path.to_string(),
            });
        }
    }

    Ok(normalized)
}
