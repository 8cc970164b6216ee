//! Yahoo provider against a local mock server.

use httpmock::prelude::*;
use serde_json::json;
use stockbrief_data::{DataError, FieldSource, YahooConfig, YahooInfoProvider};

fn provider_for(server: &MockServer) -> YahooInfoProvider {
    YahooInfoProvider::with_config(YahooConfig::with_base_url(&server.base_url())).unwrap()
}

#[tokio::test]
async fn test_fetch_summary_with_crumb() {
    let server = MockServer::start_async().await;

    let cookie = server
        .mock_async(|when, then| {
            when.method(GET).path("/");
            then.status(404).header("set-cookie", "A3=session; Path=/");
        })
        .await;
    let crumb = server
        .mock_async(|when, then| {
            when.method(GET).path("/v1/test/getcrumb");
            then.status(200).body("abc123");
        })
        .await;
    let summary = server
        .mock_async(|when, then| {
            when.method(GET)
                .path("/v10/finance/quoteSummary/kbwy")
                .query_param("crumb", "abc123");
            then.status(200)
                .header("content-type", "application/json")
                .json_body(json!({
                    "quoteSummary": {
                        "result": [{
                            "quoteType": {"symbol": "KBWY", "longName": "Invesco KBW Premium Yield Equity REIT ETF"},
                            "summaryDetail": {"yield": {"raw": 0.0783, "fmt": "7.83%"}}
                        }],
                        "error": null
                    }
                }));
        })
        .await;

    let provider = provider_for(&server);
    let result = provider.fetch_summary("kbwy").await.unwrap();

    cookie.assert_async().await;
    crumb.assert_async().await;
    summary.assert_async().await;

    assert_eq!(result.symbol, "kbwy");
    assert_eq!(result.fields.get("symbol"), Some(&json!("KBWY")));
    assert_eq!(result.fields.get("yield"), Some(&json!(0.0783)));
}

#[tokio::test]
async fn test_unknown_symbol() {
    let server = MockServer::start_async().await;

    server
        .mock_async(|when, then| {
            when.method(GET).path("/v1/test/getcrumb");
            then.status(200).body("abc123");
        })
        .await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/v10/finance/quoteSummary/NOTREAL");
            then.status(404).json_body(json!({
                "quoteSummary": {
                    "result": null,
                    "error": {"code": "Not Found", "description": "Quote not found for symbol: NOTREAL"}
                }
            }));
        })
        .await;

    let result = provider_for(&server).fetch_summary("NOTREAL").await;
    assert!(matches!(result, Err(DataError::SymbolNotFound(s)) if s == "NOTREAL"));
}

#[tokio::test]
async fn test_crumb_rejected() {
    let server = MockServer::start_async().await;

    server
        .mock_async(|when, then| {
            when.method(GET).path("/v1/test/getcrumb");
            then.status(429).body("Too Many Requests");
        })
        .await;

    let result = provider_for(&server).fetch_summary("AAPL").await;
    assert!(matches!(result, Err(DataError::Crumb(_))));
}

#[tokio::test]
async fn test_server_error_status() {
    let server = MockServer::start_async().await;

    server
        .mock_async(|when, then| {
            when.method(GET).path("/v1/test/getcrumb");
            then.status(200).body("abc123");
        })
        .await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/v10/finance/quoteSummary/AAPL");
            then.status(500).body("internal error");
        })
        .await;

    let result = provider_for(&server).fetch_summary("AAPL").await;
    assert!(matches!(result, Err(DataError::Http { status: 500, .. })));
}
