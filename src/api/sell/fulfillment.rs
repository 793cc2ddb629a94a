//! Sell Fulfillment API (`/sell/fulfillment/v1`).

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::api::{path_segment, serialize_timestamp_opt, Amount};
use crate::clients::{HttpClient, HttpError, HttpResponse, RequestOptions, RestClient};
use crate::enums::{ReasonForRefund, ShippingCarrier};

/// Query parameters for [`Fulfillment::get_orders`].
///
/// `filter` is passed through untouched, e.g.
/// `orderfulfillmentstatus:{NOT_STARTED|IN_PROGRESS}`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GetOrdersParams {
    /// `filter`: order criteria such as creation date or fulfillment status.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filter: Option<String>,
    /// `limit`: page size, up to 200.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
    /// `offset`: orders to skip before the page starts.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub offset: Option<u32>,
    /// `orderIds`: sent comma-separated; at most 50 IDs.
    pub order_ids: Vec<String>,
    /// `fieldGroups`, e.g. `TAX_BREAKDOWN`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub field_groups: Option<String>,
}

/// One line item of a shipping fulfillment.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LineItemReference {
    /// `lineItemId` of the order line item.
    pub line_item_id: String,
    /// `quantity` shipped in this package.
    pub quantity: u32,
}

/// Body of [`Fulfillment::create_shipping_fulfillment`].
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ShippingFulfillmentDetails {
    /// `lineItems` in the package.
    pub line_items: Vec<LineItemReference>,
    /// `shippedDate`; eBay uses the current time when absent.
    #[serde(
        serialize_with = "serialize_timestamp_opt",
        skip_serializing_if = "Option::is_none"
    )]
    pub shipped_date: Option<DateTime<Utc>>,
    /// `shippingCarrierCode`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shipping_carrier_code: Option<ShippingCarrier>,
    /// `trackingNumber` issued by the carrier.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tracking_number: Option<String>,
}

/// A line item refunded by [`Fulfillment::issue_refund`].
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RefundItem {
    /// `lineItemId` being refunded.
    pub line_item_id: String,
    /// `refundAmount` for that line item.
    pub refund_amount: Amount,
}

/// Body of [`Fulfillment::issue_refund`].
///
/// Set either `order_level_refund_amount` or `refund_items`, not both.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct IssueRefundRequest {
    /// `reasonForRefund`.
    pub reason_for_refund: ReasonForRefund,
    /// `comment` shown to the buyer.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
    /// `orderLevelRefundAmount` for the whole order.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order_level_refund_amount: Option<Amount>,
    /// `refundItems`, one entry per refunded line item.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub refund_items: Vec<RefundItem>,
}

impl IssueRefundRequest {
    /// Creates a refund request with only the reason set.
    #[must_use]
    pub const fn new(reason_for_refund: ReasonForRefund) -> Self {
        Self {
            reason_for_refund,
            comment: None,
            order_level_refund_amount: None,
            refund_items: Vec::new(),
        }
    }
}

/// Sell Fulfillment API wrapper.
#[derive(Clone, Debug)]
pub struct Fulfillment {
    rest: RestClient,
}

impl Fulfillment {
    /// Base path of the Fulfillment API.
    pub const BASE_PATH: &'static str = "/sell/fulfillment/v1";

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

    /// Searches the seller's orders.
    ///
    /// # Errors
    ///
    /// See [`RestClient::get`].
    pub async fn get_orders(&self, params: &GetOrdersParams) -> Result<HttpResponse, HttpError> {
        let options = RequestOptions::new().params(params)?;
        self.rest.get("/order", options).await
    }

    /// Retrieves one order.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError::InvalidRequest`] for an empty `order_id`;
    /// otherwise see [`RestClient::get`].
    pub async fn get_order(
        &self,
        order_id: &str,
        field_groups: Option<&str>,
    ) -> Result<HttpResponse, HttpError> {
        let path = format!("/order/{}", path_segment("order_id", order_id)?);
        let options = RequestOptions::new().param_opt("fieldGroups", field_groups);
        self.rest.get(&path, options).await
    }

    /// Lists the shipping fulfillments of an order.
    ///
    /// # Errors
    ///
    /// See [`Fulfillment::get_order`].
    pub async fn get_shipping_fulfillments(&self, order_id: &str) -> Result<HttpResponse, HttpError> {
        let path = format!(
            "/order/{}/shipping_fulfillment",
            path_segment("order_id", order_id)?
        );
        self.rest.get(&path, RequestOptions::new()).await
    }

    /// Retrieves one shipping fulfillment.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError::InvalidRequest`] if either ID is empty;
    /// otherwise see [`RestClient::get`].
    pub async fn get_shipping_fulfillment(
        &self,
        order_id: &str,
        fulfillment_id: &str,
    ) -> Result<HttpResponse, HttpError> {
        let path = format!(
            "/order/{}/shipping_fulfillment/{}",
            path_segment("order_id", order_id)?,
            path_segment("fulfillment_id", fulfillment_id)?
        );
        self.rest.get(&path, RequestOptions::new()).await
    }

    /// Marks line items of an order as shipped.
    ///
    /// The new fulfillment's ID comes back in the `Location` header.
    ///
    /// # Errors
    ///
    /// See [`Fulfillment::get_order`].
    pub async fn create_shipping_fulfillment(
        &self,
        order_id: &str,
        details: &ShippingFulfillmentDetails,
    ) -> Result<HttpResponse, HttpError> {
        let path = format!(
            "/order/{}/shipping_fulfillment",
            path_segment("order_id", order_id)?
        );
        let options = RequestOptions::new().json(details)?;
        self.rest.post(&path, options).await
    }

    /// Issues a full or partial refund for an order.
    ///
    /// # Errors
    ///
    /// See [`Fulfillment::get_order`].
    pub async fn issue_refund(
        &self,
        order_id: &str,
        request: &IssueRefundRequest,
    ) -> Result<HttpResponse, HttpError> {
        let path = format!("/order/{}/issue_refund", path_segment("order_id", order_id)?);
        let options = RequestOptions::new().json(request)?;
        self.rest.post(&path, options).await
    }
}
