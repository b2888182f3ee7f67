//! End-to-end stream lifecycle against a mock Timeplus API.

mod common;

use common::provider;
use serde_json::{Value, json};
use timeplus_client::testing::{api_path, load_fixture};
use timeplus_provider::{PlanAction, ReadOutcome};
use wiremock::matchers::{body_partial_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn orders_config() -> Value {
    json!({
        "name": "orders",
        "column": [
            {"name": "id", "type": "int64"},
            {"name": "amt", "type": "float64"}
        ],
        "retention_bytes": 1024,
        "retention_ms": 3600,
        "history_ttl": "to_datetime(_tp_time) + INTERVAL 1 DAY"
    })
}

fn orders_server(description: &str) -> Value {
    json!({
        "name": "orders",
        "description": description,
        "columns": [
            {"name": "id", "type": "int64", "default": "", "codec": ""},
            {"name": "amt", "type": "float64", "default": "", "codec": ""},
            {"name": "_tp_time", "type": "datetime64(3, 'UTC')", "default": "now64(3, 'UTC')",
             "codec": "CODEC(DoubleDelta, LZ4)"}
        ],
        "ttl": "to_datetime(_tp_time) +  INTERVAL 1 DAY",
        "mode": "append",
        "logstore_retention_bytes": 1024,
        "logstore_retention_ms": 3600
    })
}

#[tokio::test]
async fn test_stream_create_update_delete() {
    let mock_server = MockServer::start().await;
    let provider = provider(&mock_server.uri());

    Mock::given(method("POST"))
        .and(path(api_path("streams")))
        .and(body_partial_json(json!({
            "name": "orders",
            "logstore_retention_bytes": 1024,
            "logstore_retention_ms": 3600,
            "ttl_expression": "to_datetime(_tp_time) + INTERVAL 1 DAY"
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(orders_server("")))
        .expect(1)
        .mount(&mock_server)
        .await;

    let change = provider
        .plan_resource_change("timeplus_stream", None, Some(&orders_config()))
        .unwrap();
    assert_eq!(change.action, PlanAction::Create);

    let state = provider
        .create_resource("timeplus_stream", change.planned_state)
        .await
        .unwrap();
    assert_eq!(state["retention_bytes"], 1024);
    assert_eq!(state["description"], Value::Null);

    Mock::given(method("GET"))
        .and(path(api_path("streams/orders")))
        .respond_with(ResponseTemplate::new(200).set_body_json(orders_server("")))
        .mount(&mock_server)
        .await;

    // Refreshing right after create yields no drift.
    let ReadOutcome::Present(refreshed) = provider
        .read_resource("timeplus_stream", state.clone())
        .await
        .unwrap()
    else {
        panic!("stream should be present");
    };
    assert_eq!(refreshed, state);
    let noop = provider
        .plan_resource_change("timeplus_stream", Some(&refreshed), Some(&orders_config()))
        .unwrap();
    assert_eq!(noop.action, PlanAction::NoOp);

    Mock::given(method("PATCH"))
        .and(path(api_path("streams/orders")))
        .and(body_partial_json(json!({"description": "order events"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(orders_server("order events")))
        .expect(1)
        .mount(&mock_server)
        .await;

    let mut config = orders_config();
    config["description"] = json!("order events");
    let change = provider
        .plan_resource_change("timeplus_stream", Some(&refreshed), Some(&config))
        .unwrap();
    assert_eq!(change.action, PlanAction::Update);

    let updated = provider
        .update_resource("timeplus_stream", change.planned_state, refreshed)
        .await
        .unwrap();
    assert_eq!(updated["description"], "order events");

    Mock::given(method("DELETE"))
        .and(path(api_path("streams/orders")))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&mock_server)
        .await;

    provider
        .delete_resource("timeplus_stream", updated)
        .await
        .unwrap();
}

#[tokio::test]
async fn test_import_stream_by_name() {
    let mock_server = MockServer::start().await;
    let provider = provider(&mock_server.uri());

    Mock::given(method("GET"))
        .and(path(api_path("streams/orders")))
        .respond_with(ResponseTemplate::new(200).set_body_json(load_fixture("streams/get_stream.json")))
        .mount(&mock_server)
        .await;

    let seed = provider.import_resource_state("stream", "orders").unwrap();
    let ReadOutcome::Present(state) = provider.read_resource("stream", seed).await.unwrap() else {
        panic!("stream should be present");
    };

    let columns = state["column"].as_array().unwrap();
    let names: Vec<&str> = columns.iter().map(|c| c["name"].as_str().unwrap()).collect();
    assert_eq!(names, vec!["id", "amount"]);
    assert_eq!(columns[0]["codec"], "ZSTD(1)");
    assert_eq!(columns[0]["primary_key"], true);
    assert_eq!(columns[1]["codec"], "");
    assert_eq!(state["mode"], "versioned_kv");
    assert_eq!(state["retention_bytes"], 10737418240_i64);
    assert_eq!(state["retention_ms"], Value::Null);
}

#[tokio::test]
async fn test_stream_primary_keys_round_trip() {
    let mock_server = MockServer::start().await;
    let provider = provider(&mock_server.uri());

    Mock::given(method("POST"))
        .and(path(api_path("streams")))
        .and(body_partial_json(json!({"primary_key": "(`a`,`b`)", "mode": "versioned_kv"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"name": "kv"})))
        .expect(1)
        .mount(&mock_server)
        .await;
    Mock::given(method("GET"))
        .and(path(api_path("streams/kv")))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "name": "kv",
            "columns": [
                {"name": "a", "type": "string", "default": "", "codec": ""},
                {"name": "b", "type": "string", "default": "", "codec": ""},
                {"name": "v", "type": "int64", "default": "", "codec": ""}
            ],
            "mode": "versioned_kv",
            "primary_key": "`a`,`b`"
        })))
        .mount(&mock_server)
        .await;

    let config = json!({
        "name": "kv",
        "mode": "versioned_kv",
        "column": [
            {"name": "a", "type": "string", "primary_key": true},
            {"name": "b", "type": "string", "primary_key": true},
            {"name": "v", "type": "int64"}
        ]
    });
    let change = provider.plan_resource_change("stream", None, Some(&config)).unwrap();
    let state = provider
        .create_resource("stream", change.planned_state)
        .await
        .unwrap();

    let ReadOutcome::Present(refreshed) = provider.read_resource("stream", state.clone()).await.unwrap()
    else {
        panic!("stream should be present");
    };
    assert_eq!(refreshed["column"][0]["primary_key"], true);
    assert_eq!(refreshed["column"][1]["primary_key"], true);
    assert_eq!(refreshed["column"][2]["primary_key"], Value::Null);
    assert_eq!(refreshed, state);
}

#[tokio::test]
async fn test_read_removed_stream() {
    let mock_server = MockServer::start().await;
    let provider = provider(&mock_server.uri());

    Mock::given(method("GET"))
        .and(path(api_path("streams/orders")))
        .respond_with(ResponseTemplate::new(404).set_body_string("stream not found"))
        .mount(&mock_server)
        .await;

    let outcome = provider
        .read_resource("stream", json!({"name": "orders", "column": []}))
        .await
        .unwrap();
    assert_eq!(outcome, ReadOutcome::Removed);
}

#[tokio::test]
async fn test_create_failure_reports_entity_and_body() {
    let mock_server = MockServer::start().await;
    let provider = provider(&mock_server.uri());

    Mock::given(method("POST"))
        .and(path(api_path("streams")))
        .respond_with(ResponseTemplate::new(400).set_body_string("bad column type"))
        .mount(&mock_server)
        .await;

    let err = provider
        .create_resource(
            "stream",
            json!({"name": "orders", "column": [{"name": "id", "type": "nope"}]}),
        )
        .await
        .unwrap_err();
    let message = err.to_string();
    assert!(message.starts_with("Error Creating Stream"));
    assert!(message.contains("bad column type"));
}
