//! Sell Metadata API (`/sell/metadata/v1`).
//!
//! Read-only lookups of marketplace rules. Every policy call is scoped to
//! one marketplace and accepts an optional `filter` such as
//! `categoryIds:{183050|176758}`.

use crate::clients::{HttpClient, HttpError, HttpResponse, RequestOptions, RestClient};
use crate::enums::{CountryCode, Marketplace};

/// Sell Metadata API wrapper.
#[derive(Clone, Debug)]
pub struct Metadata {
    rest: RestClient,
}

impl Metadata {
    /// Base path of the Metadata API.
    pub const BASE_PATH: &'static str = "/sell/metadata/v1";

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

    /// Returns the categories that support automotive parts compatibility.
    ///
    /// # Errors
    ///
    /// See [`RestClient::get`].
    pub async fn get_automotive_parts_compatibility_policies(
        &self,
        marketplace: Marketplace,
        filter: Option<&str>,
    ) -> Result<HttpResponse, HttpError> {
        self.marketplace_policy(marketplace, "get_automotive_parts_compatibility_policies", filter)
            .await
    }

    /// Returns the item condition rules of each category.
    ///
    /// # Errors
    ///
    /// See [`RestClient::get`].
    pub async fn get_item_condition_policies(
        &self,
        marketplace: Marketplace,
        filter: Option<&str>,
    ) -> Result<HttpResponse, HttpError> {
        self.marketplace_policy(marketplace, "get_item_condition_policies", filter)
            .await
    }

    /// Returns which categories support item variations.
    ///
    /// # Errors
    ///
    /// See [`RestClient::get`].
    pub async fn get_listing_structure_policies(
        &self,
        marketplace: Marketplace,
        filter: Option<&str>,
    ) -> Result<HttpResponse, HttpError> {
        self.marketplace_policy(marketplace, "get_listing_structure_policies", filter)
            .await
    }

    /// Returns the return policy rules of each category.
    ///
    /// # Errors
    ///
    /// See [`RestClient::get`].
    pub async fn get_return_policies(
        &self,
        marketplace: Marketplace,
        filter: Option<&str>,
    ) -> Result<HttpResponse, HttpError> {
        self.marketplace_policy(marketplace, "get_return_policies", filter)
            .await
    }

    /// Returns the tax jurisdictions of a country.
    ///
    /// # Errors
    ///
    /// See [`RestClient::get`].
    pub async fn get_sales_tax_jurisdictions(
        &self,
        country: CountryCode,
    ) -> Result<HttpResponse, HttpError> {
        let path = format!("/country/{country}/sales_tax_jurisdiction");
        self.rest.get(&path, RequestOptions::new()).await
    }

    async fn marketplace_policy(
        &self,
        marketplace: Marketplace,
        operation: &str,
        filter: Option<&str>,
    ) -> Result<HttpResponse, HttpError> {
        let path = format!("/marketplace/{marketplace}/{operation}");
        let options = RequestOptions::new().param_opt("filter", filter);
        self.rest.get(&path, options).await
    }
}
