//! Sell APIs.

mod fulfillment;
mod metadata;

pub use fulfillment::{
    Fulfillment, GetOrdersParams, IssueRefundRequest, LineItemReference, RefundItem,
    ShippingFulfillmentDetails,
};
pub use metadata::Metadata;

use crate::clients::HttpClient;

/// The Sell API family.
#[derive(Clone, Debug)]
pub struct Sell {
    /// Fulfillment API.
    pub fulfillment: Fulfillment,
    /// Metadata API.
    pub metadata: Metadata,
}

impl Sell {
    /// Creates every Sell wrapper on top of a root client.
    #[must_use]
    pub fn new(http_client: &HttpClient) -> Self {
        Self {
            fulfillment: Fulfillment::new(http_client),
            metadata: Metadata::new(http_client),
        }
    }
}
