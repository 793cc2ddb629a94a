//! HTTP response types for the eBay API SDK.
//!
//! A successful call yields an [`HttpResponse`] whose body is either parsed
//! JSON or the raw bytes eBay sent (gzip feed files, octet streams). The
//! choice is made by the response `Content-Type`.

use std::collections::HashMap;

use bytes::Bytes;
use serde_json::Value;

use crate::clients::errors::ErrorDetail;
use crate::clients::range::ContentRange;

/// The body of a successful response.
#[derive(Clone, Debug, PartialEq)]
pub enum ResponseBody {
    /// A JSON document.
    Json(Value),
    /// Raw bytes, passed through untouched (e.g. a gzip feed chunk).
    Binary(Bytes),
    /// No body at all.
    Empty,
}

impl ResponseBody {
    /// Classifies a raw body by its content type.
    ///
    /// JSON content types (`application/json`, `*+json`) are parsed; a JSON
    /// content type with an unparseable body is kept as binary. With no
    /// content type at all, JSON is attempted before falling back to binary.
    #[must_use]
    pub fn from_bytes(content_type: Option<&str>, body: Bytes) -> Self {
        if body.is_empty() {
            return Self::Empty;
        }

        let try_json = content_type.map_or(true, is_json_content_type);
        if try_json {
            if let Ok(value) = serde_json::from_slice(&body) {
                return Self::Json(value);
            }
        }
        Self::Binary(body)
    }

    /// Returns the JSON document, if this is a JSON body.
    #[must_use]
    pub const fn as_json(&self) -> Option<&Value> {
        match self {
            Self::Json(value) => Some(value),
            _ => None,
        }
    }

    /// Returns the raw bytes, if this is a binary body.
    #[must_use]
    pub const fn as_bytes(&self) -> Option<&Bytes> {
        match self {
            Self::Binary(bytes) => Some(bytes),
            _ => None,
        }
    }

    /// Returns `true` for [`ResponseBody::Empty`].
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        matches!(self, Self::Empty)
    }
}

fn is_json_content_type(content_type: &str) -> bool {
    let mime = content_type
        .split(';')
        .next()
        .unwrap_or_default()
        .trim()
        .to_ascii_lowercase();
    mime == "application/json" || mime.ends_with("+json")
}

/// A successful HTTP response from an eBay API.
///
/// Header names are lower-cased; a header may carry several values.
#[derive(Clone, Debug)]
pub struct HttpResponse {
    /// The HTTP status code.
    pub code: u16,
    /// Response headers (headers may have multiple values).
    pub headers: HashMap<String, Vec<String>>,
    /// The response body.
    pub body: ResponseBody,
}

impl HttpResponse {
    /// Creates a new `HttpResponse`.
    ///
    /// Header names are lower-cased on the way in.
    #[must_use]
    pub fn new(code: u16, headers: HashMap<String, Vec<String>>, body: ResponseBody) -> Self {
        let headers = headers
            .into_iter()
            .fold(HashMap::new(), |mut acc: HashMap<String, Vec<String>>, (k, v)| {
                acc.entry(k.to_ascii_lowercase()).or_default().extend(v);
                acc
            });
        Self {
            code,
            headers,
            body,
        }
    }

    /// Returns `true` if the response status code is in the 2xx range.
    #[must_use]
    pub const fn is_ok(&self) -> bool {
        self.code >= 200 && self.code <= 299
    }

    /// Returns `true` for `206 Partial Content`.
    #[must_use]
    pub const fn is_partial(&self) -> bool {
        self.code == 206
    }

    /// Returns the first value of a header, matching the name case-insensitively.
    #[must_use]
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .get(&name.to_ascii_lowercase())
            .and_then(|values| values.first())
            .map(String::as_str)
    }

    /// Returns the `Content-Type` header value, if present.
    #[must_use]
    pub fn content_type(&self) -> Option<&str> {
        self.header("content-type")
    }

    /// Returns the parsed `Content-Range` header, if present and valid.
    #[must_use]
    pub fn content_range(&self) -> Option<ContentRange> {
        self.header("content-range").and_then(ContentRange::parse)
    }

    /// Returns the JSON body, if the response carried one.
    #[must_use]
    pub const fn json(&self) -> Option<&Value> {
        self.body.as_json()
    }

    /// Returns the `warnings` array eBay attaches to some successful responses.
    #[must_use]
    pub fn warnings(&self) -> Vec<ErrorDetail> {
        self.json()
            .and_then(|body| body.get("warnings"))
            .and_then(|warnings| serde_json::from_value(warnings.clone()).ok())
            .unwrap_or_default()
    }
}
