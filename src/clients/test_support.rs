//! A transport that records requests and replays a canned response.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use bytes::Bytes;

use crate::auth::AccessToken;
use crate::clients::{HttpClient, HttpTransport, PreparedRequest, RawResponse, TransportError};
use crate::config::EbayConfig;
use crate::enums::Marketplace;

pub struct RecordingTransport {
    seen: Mutex<Vec<PreparedRequest>>,
    reply: RawResponse,
}

impl RecordingTransport {
    pub fn new(status: u16, content_type: &str, body: &'static [u8]) -> Arc<Self> {
        let mut headers = HashMap::new();
        headers.insert("content-type".to_string(), vec![content_type.to_string()]);
        Arc::new(Self {
            seen: Mutex::new(Vec::new()),
            reply: RawResponse {
                status,
                headers,
                body: Bytes::from_static(body),
            },
        })
    }

    pub fn json(status: u16, body: &'static str) -> Arc<Self> {
        Self::new(status, "application/json", body.as_bytes())
    }

    pub fn last(&self) -> PreparedRequest {
        self.seen.lock().unwrap().last().cloned().expect("no request sent")
    }

    pub fn count(&self) -> usize {
        self.seen.lock().unwrap().len()
    }
}

#[async_trait]
impl HttpTransport for RecordingTransport {
    async fn send(&self, request: PreparedRequest) -> Result<RawResponse, TransportError> {
        self.seen.lock().unwrap().push(request);
        Ok(self.reply.clone())
    }
}

pub fn client(transport: &Arc<RecordingTransport>, marketplace: Option<Marketplace>) -> HttpClient {
    let mut builder = EbayConfig::builder().access_token(AccessToken::new("test-token").unwrap());
    if let Some(marketplace) = marketplace {
        builder = builder.marketplace(marketplace);
    }
    HttpClient::with_transport(&builder.build().unwrap(), transport.clone())
}

pub fn body_json(request: &PreparedRequest) -> serde_json::Value {
    serde_json::from_slice(request.body.as_deref().expect("no body")).unwrap()
}

#[test]
fn test_new_replays_given_content_type() {
    let transport = RecordingTransport::new(206, "application/octet-stream", b"\x1f\x8b");
    assert_eq!(
        transport.reply.headers.get("content-type"),
        Some(&vec!["application/octet-stream".to_string()])
    );
    assert_eq!(transport.reply.body.as_ref(), b"\x1f\x8b");

    let json = RecordingTransport::json(200, "{}");
    assert_eq!(
        json.reply.headers.get("content-type"),
        Some(&vec!["application/json".to_string()])
    );
}
