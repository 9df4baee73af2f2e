//! Integration tests for the reqwest transport against a local HTTP server.
//!
//! Run with: `cargo test --test test_http`

mod common;

use dextools_mcp::{
    dextools::{DexToolsClient, HttpTransport, ReqwestTransport},
    AppError, Config, Plan, ToolDispatcher,
};
use mockito::Matcher;
use serde_json::json;

fn dispatcher_for(server: &mockito::ServerGuard) -> ToolDispatcher {
    let config = Config::new(common::API_KEY, Plan::Trial).with_base_url(server.url());
    ToolDispatcher::new(DexToolsClient::new(&config))
}

/// The API key header and mapped query parameters reach the server.
#[tokio::test]
async fn test_request_headers_and_query() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("GET", "/pool/ether")
        .match_header("x-api-key", common::API_KEY)
        .match_header("accept", "application/json")
        .match_query(Matcher::AllOf(vec![
            Matcher::UrlEncoded("from".into(), "2024-01-01T00:00:00".into()),
            Matcher::UrlEncoded("to".into(), "2024-01-31T23:59:59".into()),
            Matcher::UrlEncoded("order".into(), "desc".into()),
            Matcher::UrlEncoded("sort".into(), "creationTime".into()),
            Matcher::UrlEncoded("page".into(), "1".into()),
            Matcher::UrlEncoded("pageSize".into(), "10".into()),
        ]))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"statusCode":200,"data":{"totalPages":3,"results":[]}}"#)
        .create_async()
        .await;

    let value = dispatcher_for(&server)
        .dispatch(
            "find_new_pools_in_range",
            &common::args(json!({
                "chain_id": "ethereum",
                "from_date": "2024-01-01T00:00:00",
                "to_date": "2024-01-31T23:59:59",
                "order": "desc",
                "page": 1,
                "page_size": 10
            })),
        )
        .await
        .into_value();

    mock.assert_async().await;
    assert_eq!(value["data"]["totalPages"], 3);
}

/// A real 403 surfaces as an error payload with the status code.
#[tokio::test]
async fn test_forbidden_response() {
    let mut server = mockito::Server::new_async().await;
    let path = format!("/token/ether/{}/audit", common::EVM_TOKEN);
    let mock = server
        .mock("GET", path.as_str())
        .with_status(403)
        .with_body("Forbidden")
        .create_async()
        .await;

    let value = dispatcher_for(&server)
        .dispatch(
            "get_token_security_audit",
            &common::args(json!({"chain_id": "ether", "token_address": common::EVM_TOKEN})),
        )
        .await
        .into_value();

    mock.assert_async().await;
    assert_eq!(value["statusCode"], 403);
    assert_eq!(value["error"], "DEXTools API returned status 403: Forbidden");
}

/// The transport reports any status without treating it as a failure.
#[tokio::test]
async fn test_transport_returns_raw_status() {
    let mut server = mockito::Server::new_async().await;
    let _mock = server
        .mock("GET", "/blockchain/bsc")
        .with_status(500)
        .with_body("upstream exploded")
        .create_async()
        .await;

    let config = Config::new(common::API_KEY, Plan::Trial).with_base_url(server.url());
    let client = DexToolsClient::new(&config);
    let request = client.build_request("/blockchain/bsc", Vec::new());

    let response = ReqwestTransport::new().send(&request).await.unwrap();
    assert_eq!(response.status, 500);
    assert_eq!(response.body, "upstream exploded");

    let err = client.execute(&request).await.unwrap_err();
    assert!(matches!(err, AppError::Upstream { status: 500, .. }));
}

/// Unreachable hosts surface as network errors.
#[tokio::test]
async fn test_unreachable_host() {
    let config = Config::new(common::API_KEY, Plan::Trial).with_base_url("http://127.0.0.1:1");
    let client = DexToolsClient::new(&config);
    let request = client.build_request("/blockchain/bsc", Vec::new());

    let err = client.execute(&request).await.unwrap_err();
    assert!(matches!(err, AppError::Network(_)));
}
