//! Integration tests for the endpoint wrappers.
//!
//! Each test drives a wrapper through [`EbayClient`] against a wiremock
//! server and checks the request eBay would see.

use chrono::NaiveDate;
use ebay_api::api::buy::FeedParams;
use ebay_api::api::post_order::{DecideReturnRequest, ReturnSearchParams};
use ebay_api::api::sell::{GetOrdersParams, IssueRefundRequest};
use ebay_api::api::Amount;
use ebay_api::enums::{CurrencyCode, Decision, FeedScope, Marketplace, ReasonForRefund, ReturnState};
use ebay_api::{AccessToken, EbayClient, EbayConfig, ErrorKind, HostUrl, ResponseBody};
use wiremock::matchers::{body_json, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn test_client(server: &MockServer, marketplace: Option<Marketplace>) -> EbayClient {
    let mut builder = EbayConfig::builder()
        .access_token(AccessToken::new("test-token").unwrap())
        .api_host(HostUrl::new(server.uri()).unwrap());
    if let Some(marketplace) = marketplace {
        builder = builder.marketplace(marketplace);
    }
    EbayClient::new(&builder.build().unwrap()).unwrap()
}

// ============================================================================
// Buy Feed
// ============================================================================

#[tokio::test]
async fn test_item_feed_request_matches_ebay_example() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/buy/feed/v1_beta/item"))
        .and(query_param("category_id", "9355"))
        .and(header("x-ebay-c-marketplace-id", "EBAY_US"))
        .and(header("range", "bytes=0-10485759"))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;

    let ebay = test_client(&server, None);
    ebay.buy
        .feed
        .get_item_feed(
            &FeedParams::new("9355"),
            Some(Marketplace::EbayUs),
            "bytes=0-10485759",
        )
        .await
        .unwrap();

    let requests = server.received_requests().await.unwrap();
    assert_eq!(
        requests[0].url.as_str(),
        format!("{}/buy/feed/v1_beta/item?category_id=9355", server.uri())
    );
}

#[tokio::test]
async fn test_partial_content_returns_raw_bytes() {
    let server = MockServer::start().await;
    let chunk: Vec<u8> = vec![0x1f, 0x8b, 0x08, 0x00, 0xff, 0x00];
    Mock::given(method("GET"))
        .and(path("/buy/feed/v1_beta/item"))
        .and(query_param("feed_scope", "NEWLY_LISTED"))
        .and(query_param("date", "20240501"))
        .respond_with(
            ResponseTemplate::new(206)
                .insert_header("Content-Range", "bytes 0-5/20")
                .set_body_raw(chunk.clone(), "application/octet-stream"),
        )
        .mount(&server)
        .await;

    let ebay = test_client(&server, Some(Marketplace::EbayDe));
    let params = FeedParams::new("9355")
        .feed_scope(FeedScope::NewlyListed)
        .date(NaiveDate::from_ymd_opt(2024, 5, 1).unwrap());
    let response = ebay
        .buy
        .feed
        .get_item_feed(&params, None, "bytes=0-5")
        .await
        .unwrap();

    assert!(response.is_partial());
    assert!(matches!(response.body, ResponseBody::Binary(_)));
    assert_eq!(response.body.as_bytes().map(|b| b.to_vec()), Some(chunk));

    let range = response.content_range().unwrap();
    assert_eq!(range.total, Some(20));
    assert!(!range.is_last());
    let next = range.next(6).unwrap();
    assert_eq!(next.to_string(), "bytes=6-11");
}

#[tokio::test]
async fn test_feed_without_any_marketplace_fails_validation() {
    let server = MockServer::start().await;
    let ebay = test_client(&server, None);

    let error = ebay
        .buy
        .feed
        .get_item_group_feed(&FeedParams::new("9355"), None, "bytes=0-99")
        .await
        .unwrap_err();

    assert_eq!(error.kind(), ErrorKind::Validation);
    assert!(server.received_requests().await.unwrap().is_empty());
}

// ============================================================================
// Sell Fulfillment
// ============================================================================

#[tokio::test]
async fn test_get_orders_uses_bearer_and_camel_case_params() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/sell/fulfillment/v1/order"))
        .and(query_param("orderIds", "1-2,3-4"))
        .and(header("authorization", "Bearer test-token"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(serde_json::json!({"orders": [], "total": 0})),
        )
        .expect(1)
        .mount(&server)
        .await;

    let ebay = test_client(&server, None);
    let response = ebay
        .sell
        .fulfillment
        .get_orders(&GetOrdersParams {
            order_ids: vec!["1-2".to_string(), "3-4".to_string()],
            ..GetOrdersParams::default()
        })
        .await
        .unwrap();

    assert_eq!(response.json().unwrap()["total"], 0);
}

#[tokio::test]
async fn test_issue_refund_posts_body() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/sell/fulfillment/v1/order/12-34/issue_refund"))
        .and(body_json(serde_json::json!({
            "reasonForRefund": "ITEM_NOT_RECEIVED",
            "comment": "Lost in transit",
            "orderLevelRefundAmount": {"value": "20.00", "currency": "EUR"}
        })))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(serde_json::json!({"refundId": "5", "refundStatus": "PENDING"})),
        )
        .expect(1)
        .mount(&server)
        .await;

    let ebay = test_client(&server, None);
    let request = IssueRefundRequest {
        comment: Some("Lost in transit".to_string()),
        order_level_refund_amount: Some(Amount::new("20.00", CurrencyCode::Eur)),
        ..IssueRefundRequest::new(ReasonForRefund::ItemNotReceived)
    };
    let response = ebay
        .sell
        .fulfillment
        .issue_refund("12-34", &request)
        .await
        .unwrap();

    assert_eq!(response.json().unwrap()["refundStatus"], "PENDING");
}

// ============================================================================
// Post-Order
// ============================================================================

#[tokio::test]
async fn test_post_order_calls_use_iaf_scheme() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/post-order/v2/return/search"))
        .and(query_param("return_state", "CLOSED"))
        .and(header("authorization", "IAF test-token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({"members": []})))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/post-order/v2/return/500/decide"))
        .and(header("authorization", "IAF test-token"))
        .and(body_json(serde_json::json!({"decision": "APPROVE"})))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;

    let ebay = test_client(&server, Some(Marketplace::EbayUs));
    ebay.post_order
        .returns
        .search(&ReturnSearchParams {
            return_state: Some(ReturnState::Closed),
            ..ReturnSearchParams::default()
        })
        .await
        .unwrap();
    ebay.post_order
        .returns
        .decide("500", &DecideReturnRequest::new(Decision::Approve))
        .await
        .unwrap();

    // Other families on the same client keep the bearer scheme.
    assert_eq!(
        ebay.sell
            .fulfillment
            .rest_client()
            .token_scheme()
            .as_str(),
        "Bearer"
    );
}

#[tokio::test]
async fn test_post_order_error_body_is_parsed() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/post-order/v2/casemanagement/1"))
        .respond_with(ResponseTemplate::new(400).set_body_json(serde_json::json!({
            "error": [{"errorId": 1702, "domain": "returnErrorDomain", "message": "Invalid case id"}]
        })))
        .mount(&server)
        .await;

    let ebay = test_client(&server, None);
    let error = ebay.post_order.cases.get("1").await.unwrap_err();

    assert_eq!(error.status(), Some(400));
    match error {
        ebay_api::HttpError::Api(api) => assert!(api.has_error_id(1702)),
        other => panic!("expected an API error, got {other:?}"),
    }
}
