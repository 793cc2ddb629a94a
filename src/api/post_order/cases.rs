use chrono::{DateTime, Utc};
use serde::Serialize;

use super::post_order_client;
use crate::api::{path_segment, serialize_timestamp_opt};
use crate::clients::{HttpClient, HttpError, HttpResponse, RequestOptions, RestClient};
use crate::enums::{CaseSearchFieldGroup, CaseStatusFilter};

/// Query parameters for [`Cases::search`].
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct CaseSearchParams {
    /// `case_creation_date_range_from`: earliest creation time.
    #[serde(
        serialize_with = "serialize_timestamp_opt",
        skip_serializing_if = "Option::is_none"
    )]
    pub case_creation_date_range_from: Option<DateTime<Utc>>,
    /// `case_creation_date_range_to`: latest creation time.
    #[serde(
        serialize_with = "serialize_timestamp_opt",
        skip_serializing_if = "Option::is_none"
    )]
    pub case_creation_date_range_to: Option<DateTime<Utc>>,
    /// `case_status_filter`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub case_status_filter: Option<CaseStatusFilter>,
    /// `fieldgroups`: how much of each case to return.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fieldgroups: Option<CaseSearchFieldGroup>,
    /// `item_id` of the listing.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub item_id: Option<String>,
    /// `limit`: page size.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
    /// `offset`: 1-based page number.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub offset: Option<u32>,
    /// `order_id` the case belongs to.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order_id: Option<String>,
    /// `sort` order of the results.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort: Option<String>,
    /// `transaction_id` of the sale.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub transaction_id: Option<String>,
}

/// Post-Order cases.
#[derive(Clone, Debug)]
pub struct Cases {
    rest: RestClient,
}

impl Cases {
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

    /// Searches cases.
    ///
    /// # Errors
    ///
    /// See [`RestClient::get`].
    pub async fn search(&self, params: &CaseSearchParams) -> Result<HttpResponse, HttpError> {
        let options = RequestOptions::new().params(params)?;
        self.rest.get("/casemanagement/search", options).await
    }

    /// Retrieves one case.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError::InvalidRequest`] for an empty `case_id`;
    /// otherwise see [`RestClient::get`].
    pub async fn get(&self, case_id: &str) -> Result<HttpResponse, HttpError> {
        let path = format!("/casemanagement/{}", path_segment("case_id", case_id)?);
        self.rest.get(&path, RequestOptions::new()).await
    }
}
