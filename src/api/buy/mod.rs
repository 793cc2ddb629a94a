//! Buy APIs.

mod feed;

pub use feed::{Feed, FeedParams};

use crate::clients::HttpClient;

/// The Buy API family.
#[derive(Clone, Debug)]
pub struct Buy {
    /// Feed API.
    pub feed: Feed,
}

impl Buy {
    /// Creates every Buy wrapper on top of a root client.
    #[must_use]
    pub fn new(http_client: &HttpClient) -> Self {
        Self {
            feed: Feed::new(http_client),
        }
    }
}
