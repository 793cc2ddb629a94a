use chrono::{DateTime, Utc};
use serde::Serialize;

use super::post_order_client;
use crate::api::{path_segment, serialize_timestamp_opt, Amount, Text};
use crate::clients::{HttpClient, HttpError, HttpResponse, RequestOptions, RestClient};
use crate::enums::{Decision, EscalateReason, GetReturnFieldGroup, ReturnState, UserRoleFilter};

/// Query parameters for [`Returns::search`].
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct ReturnSearchParams {
    /// `creation_date_range_from`: earliest creation time, inclusive.
    #[serde(
        serialize_with = "serialize_timestamp_opt",
        skip_serializing_if = "Option::is_none"
    )]
    pub creation_date_range_from: Option<DateTime<Utc>>,
    /// `creation_date_range_to`: latest creation time, inclusive.
    #[serde(
        serialize_with = "serialize_timestamp_opt",
        skip_serializing_if = "Option::is_none"
    )]
    pub creation_date_range_to: Option<DateTime<Utc>>,
    /// `item_id` of the returned listing.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub item_id: Option<String>,
    /// `limit`: page size.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
    /// `offset`: 1-based page number.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub offset: Option<u32>,
    /// `order_id` the return belongs to.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order_id: Option<String>,
    /// `return_state`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub return_state: Option<ReturnState>,
    /// `role`: whether to match as buyer or seller.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<UserRoleFilter>,
    /// `sort`, e.g. `FILED_DATE_DESCENDING`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort: Option<String>,
    /// `transaction_id` of the sale.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub transaction_id: Option<String>,
}

/// Body of [`Returns::decide`].
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DecideReturnRequest {
    /// `decision`.
    pub decision: Decision,
    /// `comments` shown to the buyer.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comments: Option<Text>,
    /// `keepOriginalItem`: let the buyer keep the item after a partial refund.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub keep_original_item: Option<bool>,
    /// `partialRefundAmount` offered with [`Decision::OfferPartialRefund`].
    #[serde(skip_serializing_if = "Option::is_none")]
    pub partial_refund_amount: Option<Amount>,
    /// `RMANumber`: return merchandise authorization, for [`Decision::ProvideRma`].
    #[serde(rename = "RMANumber", skip_serializing_if = "Option::is_none")]
    pub rma_number: Option<String>,
}

impl DecideReturnRequest {
    /// Creates a decision with no extras.
    #[must_use]
    pub const fn new(decision: Decision) -> Self {
        Self {
            decision,
            comments: None,
            keep_original_item: None,
            partial_refund_amount: None,
            rma_number: None,
        }
    }
}

/// Body of [`Returns::escalate`].
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct EscalateReturnRequest {
    /// `reason` for escalating.
    pub reason: EscalateReason,
    /// `comments` for the eBay agent.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comments: Option<Text>,
}

/// Post-Order return requests.
#[derive(Clone, Debug)]
pub struct Returns {
    rest: RestClient,
}

impl Returns {
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

    /// Searches return requests.
    ///
    /// # Errors
    ///
    /// See [`RestClient::get`].
    pub async fn search(&self, params: &ReturnSearchParams) -> Result<HttpResponse, HttpError> {
        let options = RequestOptions::new().params(params)?;
        self.rest.get("/return/search", options).await
    }

    /// Retrieves one return request.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError::InvalidRequest`] for an empty `return_id`;
    /// otherwise see [`RestClient::get`].
    pub async fn get(
        &self,
        return_id: &str,
        field_groups: Option<GetReturnFieldGroup>,
    ) -> Result<HttpResponse, HttpError> {
        let path = format!("/return/{}", path_segment("return_id", return_id)?);
        let options = RequestOptions::new().param_opt("fieldgroups", field_groups);
        self.rest.get(&path, options).await
    }

    /// Answers a return request as the seller.
    ///
    /// # Errors
    ///
    /// See [`Returns::get`].
    pub async fn decide(
        &self,
        return_id: &str,
        request: &DecideReturnRequest,
    ) -> Result<HttpResponse, HttpError> {
        let path = format!("/return/{}/decide", path_segment("return_id", return_id)?);
        let options = RequestOptions::new().json(request)?;
        self.rest.post(&path, options).await
    }

    /// Escalates a return request to an eBay case.
    ///
    /// # Errors
    ///
    /// See [`Returns::get`].
    pub async fn escalate(
        &self,
        return_id: &str,
        request: &EscalateReturnRequest,
    ) -> Result<HttpResponse, HttpError> {
        let path = format!("/return/{}/escalate", path_segment("return_id", return_id)?);
        let options = RequestOptions::new().json(request)?;
        self.rest.post(&path, options).await
    }
}
