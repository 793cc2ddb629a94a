use chrono::{DateTime, Utc};
use serde::Serialize;

use super::post_order_client;
use crate::api::{path_segment, serialize_timestamp_opt};
use crate::clients::{HttpClient, HttpError, HttpResponse, RequestOptions, RestClient};
use crate::enums::{InquirySearchFieldGroup, InquiryStatusFilter};

/// Query parameters for [`Inquiries::search`].
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct InquirySearchParams {
    /// `fieldgroups`: how much of each inquiry to return.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fieldgroups: Option<InquirySearchFieldGroup>,
    /// `inquiry_creation_date_range_from`: earliest creation time.
    #[serde(
        serialize_with = "serialize_timestamp_opt",
        skip_serializing_if = "Option::is_none"
    )]
    pub inquiry_creation_date_range_from: Option<DateTime<Utc>>,
    /// `inquiry_creation_date_range_to`: latest creation time.
    #[serde(
        serialize_with = "serialize_timestamp_opt",
        skip_serializing_if = "Option::is_none"
    )]
    pub inquiry_creation_date_range_to: Option<DateTime<Utc>>,
    /// `inquiry_status`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub inquiry_status: Option<InquiryStatusFilter>,
    /// `item_id` of the listing.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub item_id: Option<String>,
    /// `limit`: page size.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
    /// `offset`: 1-based page number.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub offset: Option<u32>,
    /// `order_id` the inquiry belongs to.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order_id: Option<String>,
    /// `sort` order of the results.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort: Option<String>,
    /// `transaction_id` of the sale.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub transaction_id: Option<String>,
}

/// Post-Order item-not-received inquiries.
#[derive(Clone, Debug)]
pub struct Inquiries {
    rest: RestClient,
}

impl Inquiries {
    /// Creates the wrapper on top of a root client.
    #[must_use]
    pub fn new(http_client: &HttpClient) -> Self {
        Self {
            rest: post_order_client(http_client),
        }
    }

    /// Returns the scoped client this wrapper sends through.
    #[must_use]
    pub const fn rest_client(&self) -> &RestClient {
        &self.rest
    }

    /// Searches inquiries.
    ///
    /// # Errors
    ///
    /// See [`RestClient::get`].
    pub async fn search(&self, params: &InquirySearchParams) -> Result<HttpResponse, HttpError> {
        let options = RequestOptions::new().params(params)?;
        self.rest.get("/inquiry/search", options).await
    }

    /// Retrieves one inquiry.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError::InvalidRequest`] for an empty `inquiry_id`;
    /// otherwise see [`RestClient::get`].
    pub async fn get(&self, inquiry_id: &str) -> Result<HttpResponse, HttpError> {
        let path = format!("/inquiry/{}", path_segment("inquiry_id", inquiry_id)?);
        self.rest.get(&path, RequestOptions::new()).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clients::test_support::{client, RecordingTransport};

    #[tokio::test]
    async fn test_search_and_get() {
        let transport = RecordingTransport::json(200, "{}");
        let inquiries = Inquiries::new(&client(&transport, None));

        inquiries
            .search(&InquirySearchParams {
                inquiry_status: Some(InquiryStatusFilter::WaitingSellerResponse),
                order_id: Some("12-34".to_string()),
                ..InquirySearchParams::default()
            })
            .await
            .unwrap();
        assert_eq!(
            transport.last().url,
            "https://api.ebay.com/post-order/v2/inquiry/search?inquiry_status=WAITING_SELLER_RESPONSE&order_id=12-34"
        );

        inquiries.get("5009").await.unwrap();
        assert_eq!(transport.last().url, "https://api.ebay.com/post-order/v2/inquiry/5009");
        assert_eq!(transport.last().header("Authorization"), Some("IAF test-token"));
    }

    #[tokio::test]
    async fn test_blank_id_is_rejected() {
        let transport = RecordingTransport::json(200, "{}");
        let inquiries = Inquiries::new(&client(&transport, None));

        assert!(inquiries.get(" ").await.is_err());
        assert_eq!(transport.count(), 0);
    }
}
