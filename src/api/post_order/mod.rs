//! Post-Order API (`/post-order/v2`).
//!
//! Returns, cases and inquiries opened after a sale. This API predates the
//! OAuth-era REST APIs and expects the access token under the `IAF` scheme
//! rather than `Bearer`; every wrapper here switches its scoped client
//! accordingly.

mod cases;
mod inquiries;
mod returns;

pub use cases::{CaseSearchParams, Cases};
pub use inquiries::{Inquiries, InquirySearchParams};
pub use returns::{DecideReturnRequest, EscalateReturnRequest, ReturnSearchParams, Returns};

use crate::auth::TokenScheme;
use crate::clients::{HttpClient, RestClient};

/// Base path shared by every Post-Order wrapper.
pub const BASE_PATH: &str = "/post-order/v2";

fn post_order_client(http_client: &HttpClient) -> RestClient {
    http_client
        .configure(BASE_PATH)
        .with_token_scheme(TokenScheme::Iaf)
}

/// The Post-Order API family.
#[derive(Clone, Debug)]
pub struct PostOrder {
    /// Return requests.
    pub returns: Returns,
    /// Cases escalated to eBay.
    pub cases: Cases,
    /// Item-not-received inquiries.
    pub inquiries: Inquiries,
}

impl PostOrder {
    /// Creates every Post-Order wrapper on top of a root client.
    #[must_use]
    pub fn new(http_client: &HttpClient) -> Self {
        Self {
            returns: Returns::new(http_client),
            cases: Cases::new(http_client),
            inquiries: Inquiries::new(http_client),
        }
    }
}
