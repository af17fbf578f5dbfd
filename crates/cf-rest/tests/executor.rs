//! End-to-end executor tests against a mock HTTP server
//!
//! The acceptance test recomputes the signature from the bytes that actually
//! hit the wire and checks it against the transmitted `Authent` header.

use cf_rest::{ApiVersion, CfRestClient, ClientConfig, Credentials, OrderSide, OrderType};
use rust_decimal_macros::dec;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

const TEST_KEY: &str = "CfApiTestKey";
const TEST_SECRET: &str =
    "kQH5HW/8p1uGOVjbgWA7FunAmGO8lsSUXNsu3eow76sz84Q18fWxnyRzBHCd3pd5nE9qa99HAZtuZuj6F1huXg==";

fn authed_client(server: &MockServer) -> CfRestClient {
    let creds = Credentials::new(TEST_KEY, TEST_SECRET).unwrap();
    CfRestClient::with_config(
        ClientConfig::new()
            .with_base_url(server.uri())
            .with_credentials(creds),
    )
}

#[tokio::test]
async fn send_order_signature_matches_transmitted_bytes() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/v3/sendorder"))
        .respond_with(ResponseTemplate::new(200).set_body_string(r#"{"result":"success"}"#))
        .mount(&server)
        .await;

    let client = authed_client(&server);
    let body = client
        .send_order(
            OrderType::Limit,
            "PI_XBTUSD",
            OrderSide::Buy,
            dec!(1),
            dec!(1),
            None,
        )
        .await
        .unwrap();
    assert_eq!(body, r#"{"result":"success"}"#);

    let requests = server.received_requests().await.unwrap();
    assert_eq!(requests.len(), 1);
    let request = &requests[0];

    let sent_query = request.url.query().unwrap_or("");
    let sent_body = std::str::from_utf8(&request.body).unwrap();
    assert_eq!(
        sent_body,
        "orderType=lmt&symbol=PI_XBTUSD&side=buy&size=1&limitPrice=1"
    );

    // Independently recompute the signature from the transmitted bytes.
    let creds = Credentials::new(TEST_KEY, TEST_SECRET).unwrap();
    let expected = creds.sign(
        "/api/v3/sendorder",
        "",
        &format!("{}{}", sent_query, sent_body),
    );

    assert_eq!(
        request.headers.get("APIKey").unwrap().to_str().unwrap(),
        TEST_KEY
    );
    assert_eq!(
        request.headers.get("Authent").unwrap().to_str().unwrap(),
        expected
    );
    // V3 sends no nonce
    assert!(request.headers.get("Nonce").is_none());
}

#[tokio::test]
async fn v2_variant_sends_nonce_header() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/v3/accounts"))
        .respond_with(ResponseTemplate::new(200).set_body_string("{}"))
        .mount(&server)
        .await;

    let creds = Credentials::new(TEST_KEY, TEST_SECRET).unwrap();
    let client = CfRestClient::with_config(
        ClientConfig::new()
            .with_base_url(server.uri())
            .with_credentials(creds)
            .with_api_version(ApiVersion::V2),
    );

    client.get_accounts().await.unwrap();

    let requests = server.received_requests().await.unwrap();
    let request = &requests[0];

    let nonce = request.headers.get("Nonce").unwrap().to_str().unwrap();
    assert!(nonce.chars().all(|c| c.is_ascii_digit()));

    // Signature covers data + nonce + endpoint; the data here is empty.
    let creds = Credentials::new(TEST_KEY, TEST_SECRET).unwrap();
    let expected = creds.sign("/api/v3/accounts", nonce, "");
    assert_eq!(
        request.headers.get("Authent").unwrap().to_str().unwrap(),
        expected
    );
}

#[tokio::test]
async fn public_request_carries_no_auth_headers() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/v3/orderbook"))
        .and(query_param("symbol", "PI_XBTUSD"))
        .respond_with(ResponseTemplate::new(200).set_body_string(r#"{"orderBook":{}}"#))
        .mount(&server)
        .await;

    let client = CfRestClient::with_config(ClientConfig::new().with_base_url(server.uri()));
    let body = client.get_orderbook("PI_XBTUSD").await.unwrap();
    assert_eq!(body, r#"{"orderBook":{}}"#);

    let requests = server.received_requests().await.unwrap();
    let request = &requests[0];
    assert!(request.headers.get("APIKey").is_none());
    assert!(request.headers.get("Authent").is_none());
}

#[tokio::test]
async fn history_formats_last_time_in_query() {
    use chrono::TimeZone;

    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/v3/history"))
        .and(query_param("symbol", "PI_XBTUSD"))
        .and(query_param("lastTime", "2016-01-20T00:00:00.000Z"))
        .respond_with(ResponseTemplate::new(200).set_body_string("{}"))
        .mount(&server)
        .await;

    let client = CfRestClient::with_config(ClientConfig::new().with_base_url(server.uri()));
    let last_time = chrono::Utc.with_ymd_and_hms(2016, 1, 20, 0, 0, 0).unwrap();
    client
        .get_history("PI_XBTUSD", Some(last_time))
        .await
        .unwrap();
}

#[tokio::test]
async fn dead_man_switch_timeout_travels_in_query() {
    let server = MockServer::start().await;

    // The timeout rides in the query string and the body stays empty, so the
    // request goes out as a GET against the signed URL.
    Mock::given(method("GET"))
        .and(path("/api/v3/cancelallordersafter"))
        .and(query_param("timeout", "5"))
        .respond_with(ResponseTemplate::new(200).set_body_string("{}"))
        .mount(&server)
        .await;

    let client = authed_client(&server);
    client.cancel_all_orders_after(5).await.unwrap();

    let requests = server.received_requests().await.unwrap();
    let request = &requests[0];
    assert_eq!(request.method.as_str(), "GET");

    // Query string is part of the signed data even though the body is empty.
    let creds = Credentials::new(TEST_KEY, TEST_SECRET).unwrap();
    let expected = creds.sign("/api/v3/cancelallordersafter", "", "timeout=5");
    assert_eq!(
        request.headers.get("Authent").unwrap().to_str().unwrap(),
        expected
    );
    assert!(request.body.is_empty());
}

#[tokio::test]
async fn bodyless_post_endpoints_fall_back_to_get() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/v3/cancelallorders"))
        .respond_with(ResponseTemplate::new(200).set_body_string("{}"))
        .mount(&server)
        .await;

    let client = authed_client(&server);
    client.cancel_all_orders().await.unwrap();

    let requests = server.received_requests().await.unwrap();
    let request = &requests[0];
    assert_eq!(request.method.as_str(), "GET");

    let creds = Credentials::new(TEST_KEY, TEST_SECRET).unwrap();
    let expected = creds.sign("/api/v3/cancelallorders", "", "");
    assert_eq!(
        request.headers.get("Authent").unwrap().to_str().unwrap(),
        expected
    );
}

#[tokio::test]
async fn non_2xx_status_surfaces_body() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/v3/tickers"))
        .respond_with(
            ResponseTemplate::new(500).set_body_string(r#"{"result":"error","error":"nope"}"#),
        )
        .mount(&server)
        .await;

    let client = CfRestClient::with_config(ClientConfig::new().with_base_url(server.uri()));
    let err = client.get_tickers().await.unwrap_err();

    match err {
        cf_rest::RestError::Status { status, body } => {
            assert_eq!(status, 500);
            assert!(body.contains("nope"));
        }
        other => panic!("expected status error, got {:?}", other),
    }
}

#[tokio::test]
async fn private_call_without_credentials_fails_before_io() {
    // No mock server at all: the call must fail before any request is made.
    let client = CfRestClient::with_config(
        ClientConfig::new().with_base_url("http://127.0.0.1:1".to_string()),
    );
    let err = client.get_accounts().await.unwrap_err();
    assert!(matches!(err, cf_rest::RestError::AuthRequired));
}

#[tokio::test]
async fn batch_order_submits_json_form_field() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/v3/batchorder"))
        .respond_with(ResponseTemplate::new(200).set_body_string("{}"))
        .mount(&server)
        .await;

    let client = authed_client(&server);
    let batch = serde_json::json!({
        "batchOrder": [
            { "order": "cancel", "order_id": "b8dbe131-5104-4fcf-af90-44321b30a6b8" }
        ]
    });
    client.send_batch_order(&batch).await.unwrap();

    let requests = server.received_requests().await.unwrap();
    let sent_body = std::str::from_utf8(&requests[0].body).unwrap();

    // Transmitted as a single urlencoded json= field.
    let fields: Vec<(String, String)> = serde_urlencoded::from_str(sent_body).unwrap();
    assert_eq!(fields.len(), 1);
    assert_eq!(fields[0].0, "json");
    let decoded: serde_json::Value = serde_json::from_str(&fields[0].1).unwrap();
    assert_eq!(decoded, batch);
}
