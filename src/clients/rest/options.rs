//! Per-call request options.

use serde::Serialize;

use crate::clients::errors::InvalidHttpRequestError;
use crate::clients::http_request::set_header;
use crate::clients::query::{serialize_to_query, QueryValue};

/// Parameters, headers and body for one call through a
/// [`RestClient`](super::RestClient).
///
/// Everything is optional. Headers set here replace client defaults of the
/// same name (case-insensitively) for this call only.
///
/// # Example
///
/// ```rust
/// use ebay_api::clients::RequestOptions;
///
/// let options = RequestOptions::new()
///     .param("category_id", "9355")
///     .param_opt("date", None::<String>)
///     .header("Range", "bytes=0-1023")
///     .require_header("X-EBAY-C-MARKETPLACE-ID");
///
/// assert_eq!(options.query().len(), 1);
/// ```
#[derive(Clone, Debug, Default)]
pub struct RequestOptions {
    query: Vec<(String, QueryValue)>,
    headers: Vec<(String, String)>,
    body: Option<serde_json::Value>,
    required_headers: Vec<String>,
}

impl RequestOptions {
    /// Creates empty options.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a query parameter.
    #[must_use]
    pub fn param(mut self, key: impl Into<String>, value: impl Into<QueryValue>) -> Self {
        self.query.push((key.into(), value.into()));
        self
    }

    /// Adds a query parameter when `value` is `Some`; `None` is omitted entirely.
    #[must_use]
    pub fn param_opt<V: Into<QueryValue>>(self, key: impl Into<String>, value: Option<V>) -> Self {
        match value {
            Some(value) => self.param(key, value),
            None => self,
        }
    }

    /// Adds every non-null field of a serializable params struct.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidHttpRequestError::InvalidParams`] if `params` does
    /// not serialize to a JSON object.
    pub fn params<T: Serialize + ?Sized>(mut self, params: &T) -> Result<Self, InvalidHttpRequestError> {
        self.query.extend(serialize_to_query(params)?);
        Ok(self)
    }

    /// Sets a header, replacing an earlier one of the same name.
    #[must_use]
    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        set_header(&mut self.headers, name.into(), value.into());
        self
    }

    /// Sets a header when `value` is `Some`.
    #[must_use]
    pub fn header_opt(self, name: impl Into<String>, value: Option<impl Into<String>>) -> Self {
        match value {
            Some(value) => self.header(name, value),
            None => self,
        }
    }

    /// Sets the JSON body.
    #[must_use]
    pub fn body(mut self, body: impl Into<serde_json::Value>) -> Self {
        self.body = Some(body.into());
        self
    }

    /// Sets the JSON body from a serializable request type.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidHttpRequestError::InvalidBody`] if `body` cannot be
    /// serialized.
    pub fn json<T: Serialize + ?Sized>(self, body: &T) -> Result<Self, InvalidHttpRequestError> {
        let value = serde_json::to_value(body).map_err(|e| InvalidHttpRequestError::InvalidBody {
            message: e.to_string(),
        })?;
        Ok(self.body(value))
    }

    /// Requires a header to be present once client defaults are merged in.
    #[must_use]
    pub fn require_header(mut self, name: impl Into<String>) -> Self {
        self.required_headers.push(name.into());
        self
    }

    /// Returns the query parameters added so far.
    #[must_use]
    pub fn query(&self) -> &[(String, QueryValue)] {
        &self.query
    }

    /// Returns the headers added so far.
    #[must_use]
    pub fn headers(&self) -> &[(String, String)] {
        &self.headers
    }

    pub(crate) fn into_parts(
        self,
    ) -> (
        Vec<(String, QueryValue)>,
        Vec<(String, String)>,
        Option<serde_json::Value>,
        Vec<String>,
    ) {
        (self.query, self.headers, self.body, self.required_headers)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[derive(Serialize)]
    struct FeedParams {
        feed_scope: Option<&'static str>,
        category_id: &'static str,
        date: Option<&'static str>,
    }

    #[test]
    fn test_param_opt_skips_none() {
        let options = RequestOptions::new()
            .param_opt("limit", Some(10_u32))
            .param_opt("offset", None::<u32>);

        assert_eq!(
            options.query(),
            &[("limit".to_string(), QueryValue::Scalar("10".to_string()))]
        );
    }

    #[test]
    fn test_params_struct_skips_absent_fields() {
        let options = RequestOptions::new()
            .params(&FeedParams {
                feed_scope: None,
                category_id: "9355",
                date: None,
            })
            .unwrap();

        assert_eq!(
            options.query(),
            &[("category_id".to_string(), QueryValue::Scalar("9355".to_string()))]
        );
    }

    #[test]
    fn test_params_rejects_non_object() {
        let result = RequestOptions::new().params(&json!("nope"));
        assert!(matches!(
            result,
            Err(InvalidHttpRequestError::InvalidParams { .. })
        ));
    }

    #[test]
    fn test_header_replaces_case_insensitively() {
        let options = RequestOptions::new()
            .header("range", "bytes=0-1")
            .header("Range", "bytes=0-1023")
            .header_opt("Accept-Language", None::<String>);

        assert_eq!(
            options.headers(),
            &[("Range".to_string(), "bytes=0-1023".to_string())]
        );
    }
}
