//! Integration tests for sink endpoints.

mod common;

use common::*;
use serde_json::json;
use timeplus_client::Sink;
use wiremock::matchers::{body_partial_json, method, path};

#[tokio::test]
async fn test_create_sink_returns_assigned_id() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(api_path("sinks")))
        .and(body_partial_json(json!({
            "name": "kafka-out",
            "sql": "SELECT * FROM orders",
            "type": "kafka"
        })))
        .respond_with(
            ResponseTemplate::new(201).set_body_json(load_fixture("sinks/create_sink.json")),
        )
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = test_client(&mock_server.uri());
    let mut properties = serde_json::Map::new();
    properties.insert("brokers".to_string(), json!("localhost:9092"));
    let sink = Sink {
        name: "kafka-out".to_string(),
        sql: "SELECT * FROM orders".to_string(),
        sink_type: "kafka".to_string(),
        properties,
        ..Sink::default()
    };

    let created = client.create_sink(&sink).await.unwrap();
    assert_eq!(created.id, "a1b2c3d4-0000-4000-8000-000000000001");
    assert_eq!(created.sql, "SELECT * FROM orders");
    assert_eq!(created.properties["topic"], "orders");
}

#[tokio::test]
async fn test_update_sink_uses_put() {
    let mock_server = MockServer::start().await;

    Mock::given(method("PUT"))
        .and(path(api_path("sinks/s-1")))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": "s-1",
            "name": "renamed",
            "query": "SELECT 1",
            "type": "kafka",
            "properties": {}
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = test_client(&mock_server.uri());
    let sink = Sink {
        name: "renamed".to_string(),
        ..Sink::with_id("s-1")
    };
    let updated = client.update_sink(&sink).await.unwrap();
    assert_eq!(updated.name, "renamed");
}

#[tokio::test]
async fn test_delete_sink() {
    let mock_server = MockServer::start().await;

    Mock::given(method("DELETE"))
        .and(path(api_path("sinks/s-1")))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = test_client(&mock_server.uri());
    client.delete_sink("s-1").await.unwrap();
}
