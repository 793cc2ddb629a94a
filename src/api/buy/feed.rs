//! Buy Feed API (`/buy/feed/v1_beta`).
//!
//! Downloads TSV_GZIP feed files of eBay items for one category, date and
//! marketplace. Files are large and fetched in chunks: every call takes a
//! `Range` header (`bytes=start-end`), which is validated and forwarded
//! verbatim, and a successful chunk comes back as `206 Partial Content` with
//! the raw gzip bytes in [`ResponseBody::Binary`](crate::clients::ResponseBody).

use chrono::NaiveDate;
use serde::Serialize;

use crate::clients::{
    HttpClient, HttpError, HttpResponse, RequestOptions, RestClient, MARKETPLACE_HEADER,
};
use crate::enums::{FeedScope, Marketplace};

/// Query parameters shared by every feed file.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct FeedParams {
    /// `NEWLY_LISTED` for the daily file, `ALL_ACTIVE` for the weekly bootstrap.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub feed_scope: Option<FeedScope>,
    /// eBay top-level category ID.
    pub category_id: String,
    /// File date as `yyyyMMdd`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
}

impl FeedParams {
    /// Creates params for a category.
    #[must_use]
    pub fn new(category_id: impl Into<String>) -> Self {
        Self {
            feed_scope: None,
            category_id: category_id.into(),
            date: None,
        }
    }

    /// Sets the feed scope.
    #[must_use]
    pub const fn feed_scope(mut self, scope: FeedScope) -> Self {
        self.feed_scope = Some(scope);
        self
    }

    /// Sets the file date.
    #[must_use]
    pub fn date(mut self, date: NaiveDate) -> Self {
        self.date = Some(date.format("%Y%m%d").to_string());
        self
    }
}

/// Buy Feed API wrapper.
#[derive(Clone, Debug)]
pub struct Feed {
    rest: RestClient,
}

impl Feed {
    /// Base path of the Feed API.
    pub const BASE_PATH: &'static str = "/buy/feed/v1_beta";

    /// Creates the wrapper on top of a root client.
    #[must_use]
    pub fn new(http_client: &HttpClient) -> Self {
        Self {
            rest: http_client.configure(Self::BASE_PATH),
        }
    }

    /// Returns the scoped client this wrapper sends through.
    #[must_use]
    pub const fn rest_client(&self) -> &RestClient {
        &self.rest
    }

    /// Downloads a chunk of the Item feed file.
    ///
    /// `marketplace` falls back to the configured default.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError::InvalidRequest`] if no marketplace is available
    /// or `range` is not a valid byte range; otherwise see
    /// [`RestClient::get`].
    pub async fn get_item_feed(
        &self,
        params: &FeedParams,
        marketplace: Option<Marketplace>,
        range: &str,
    ) -> Result<HttpResponse, HttpError> {
        let options = feed_options(params, None, marketplace, range)?;
        self.rest.get("/item", options).await
    }

    /// Downloads a chunk of the Item Group feed file.
    ///
    /// # Errors
    ///
    /// See [`Feed::get_item_feed`].
    pub async fn get_item_group_feed(
        &self,
        params: &FeedParams,
        marketplace: Option<Marketplace>,
        range: &str,
    ) -> Result<HttpResponse, HttpError> {
        let options = feed_options(params, None, marketplace, range)?;
        self.rest.get("/item_group", options).await
    }

    /// Downloads a chunk of the hourly Item Snapshot feed file.
    ///
    /// `snapshot_date` is the UTC hour of the snapshot, e.g.
    /// `2024-05-01T10:00:00.000Z`.
    ///
    /// # Errors
    ///
    /// See [`Feed::get_item_feed`].
    pub async fn get_item_snapshot_feed(
        &self,
        params: &FeedParams,
        snapshot_date: &str,
        marketplace: Option<Marketplace>,
        range: &str,
    ) -> Result<HttpResponse, HttpError> {
        let options = feed_options(params, Some(snapshot_date), marketplace, range)?;
        self.rest.get("/item_snapshot", options).await
    }

    /// Downloads a chunk of the Product feed file.
    ///
    /// # Errors
    ///
    /// See [`Feed::get_item_feed`].
    pub async fn get_product_feed(
        &self,
        params: &FeedParams,
        snapshot_date: &str,
        marketplace: Option<Marketplace>,
        range: &str,
    ) -> Result<HttpResponse, HttpError> {
        let options = feed_options(params, Some(snapshot_date), marketplace, range)?;
        self.rest.get("/product", options).await
    }
}

fn feed_options(
    params: &FeedParams,
    snapshot_date: Option<&str>,
    marketplace: Option<Marketplace>,
    range: &str,
) -> Result<RequestOptions, HttpError> {
    Ok(RequestOptions::new()
        .params(params)?
        .param_opt("snapshot_date", snapshot_date)
        .header_opt(MARKETPLACE_HEADER, marketplace.map(|m| m.as_str()))
        .header("Range", range)
        .require_header(MARKETPLACE_HEADER)
        .require_header("Range"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clients::test_support::{client, RecordingTransport};
    use crate::clients::InvalidHttpRequestError;

    #[test]
    fn test_feed_params_serialize_only_present_fields() {
        let params = FeedParams::new("9355")
            .feed_scope(FeedScope::NewlyListed)
            .date(NaiveDate::from_ymd_opt(2024, 5, 1).unwrap());

        assert_eq!(
            serde_json::to_value(&params).unwrap(),
            serde_json::json!({
                "feed_scope": "NEWLY_LISTED",
                "category_id": "9355",
                "date": "20240501"
            })
        );
    }

    #[tokio::test]
    async fn test_item_feed_request_shape() {
        let transport = RecordingTransport::json(200, "{}");
        let feed = Feed::new(&client(&transport, None));

        feed.get_item_feed(&FeedParams::new("9355"), Some(Marketplace::EbayUs), "bytes=0-1023")
            .await
            .unwrap();

        let sent = transport.last();
        assert_eq!(
            sent.url,
            "https://api.ebay.com/buy/feed/v1_beta/item?category_id=9355"
        );
        assert_eq!(sent.header("X-EBAY-C-MARKETPLACE-ID"), Some("EBAY_US"));
        assert_eq!(sent.header("Range"), Some("bytes=0-1023"));
    }

    #[tokio::test]
    async fn test_marketplace_falls_back_to_config_default() {
        let transport = RecordingTransport::json(200, "{}");
        let feed = Feed::new(&client(&transport, Some(Marketplace::EbayDe)));

        feed.get_item_group_feed(&FeedParams::new("1"), None, "bytes=0-99")
            .await
            .unwrap();

        let sent = transport.last();
        assert!(sent.url.ends_with("/buy/feed/v1_beta/item_group?category_id=1"));
        assert_eq!(sent.header("X-EBAY-C-MARKETPLACE-ID"), Some("EBAY_DE"));
    }

    #[tokio::test]
    async fn test_missing_marketplace_is_rejected_before_sending() {
        let transport = RecordingTransport::json(200, "{}");
        let feed = Feed::new(&client(&transport, None));

        let result = feed
            .get_item_feed(&FeedParams::new("9355"), None, "bytes=0-1023")
            .await;

        assert!(matches!(
            result,
            Err(HttpError::InvalidRequest(InvalidHttpRequestError::MissingRequiredHeader { header }))
                if header == MARKETPLACE_HEADER
        ));
        assert_eq!(transport.count(), 0);
    }

    #[tokio::test]
    async fn test_bad_range_is_rejected_before_sending() {
        let transport = RecordingTransport::json(200, "{}");
        let feed = Feed::new(&client(&transport, Some(Marketplace::EbayUs)));

        for range in ["", "bytes=10-1", "0-100"] {
            let result = feed
                .get_item_feed(&FeedParams::new("9355"), None, range)
                .await;
            assert!(matches!(
                result,
                Err(HttpError::InvalidRequest(InvalidHttpRequestError::InvalidRange { .. }))
            ));
        }
        assert_eq!(transport.count(), 0);
    }

    #[tokio::test]
    async fn test_snapshot_and_product_feeds_add_snapshot_date() {
        let transport = RecordingTransport::json(200, "{}");
        let feed = Feed::new(&client(&transport, Some(Marketplace::EbayUs)));
        let params = FeedParams::new("220").feed_scope(FeedScope::AllActive);

        feed.get_item_snapshot_feed(&params, "2024-05-01T10:00:00.000Z", None, "bytes=0-1023")
            .await
            .unwrap();
        assert_eq!(
            transport.last().url,
            "https://api.ebay.com/buy/feed/v1_beta/item_snapshot?category_id=220&feed_scope=ALL_ACTIVE&snapshot_date=2024-05-01T10%3A00%3A00.000Z"
        );

        feed.get_product_feed(&params, "2024-05-01T10:00:00.000Z", None, "bytes=0-1023")
            .await
            .unwrap();
        assert!(transport
            .last()
            .url
            .starts_with("https://api.ebay.com/buy/feed/v1_beta/product?"));
    }
}
