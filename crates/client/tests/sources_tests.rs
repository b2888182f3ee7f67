//! Integration tests for source endpoints.

mod common;

use common::*;
use serde_json::json;
use timeplus_client::Source;
use wiremock::matchers::{method, path};

#[tokio::test]
async fn test_get_source() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(api_path("sources/c0ffee00-0000-4000-8000-000000000002")))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(load_fixture("sources/get_source.json")),
        )
        .mount(&mock_server)
        .await;

    let client = test_client(&mock_server.uri());
    let source = client
        .get_source("c0ffee00-0000-4000-8000-000000000002")
        .await
        .unwrap();

    assert_eq!(source.stream, "orders");
    assert_eq!(source.source_type, "kafka");
    assert_eq!(source.properties["offset"], "latest");
}

#[tokio::test]
async fn test_update_source_empty_body_returns_request() {
    let mock_server = MockServer::start().await;

    Mock::given(method("PUT"))
        .and(path(api_path("sources/src-1")))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = test_client(&mock_server.uri());
    let source = Source {
        name: "kafka-in".to_string(),
        stream: "orders".to_string(),
        source_type: "kafka".to_string(),
        ..Source::with_id("src-1")
    };
    let updated = client.update_source(&source).await.unwrap();
    assert_eq!(updated, source);
}

#[tokio::test]
async fn test_get_source_gone_is_not_found() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(api_path("sources/src-1")))
        .respond_with(ResponseTemplate::new(410).set_body_json(json!({"message": "gone"})))
        .mount(&mock_server)
        .await;

    let client = test_client(&mock_server.uri());
    let err = client.get_source("src-1").await.unwrap_err();
    assert!(err.is_not_found());
}
