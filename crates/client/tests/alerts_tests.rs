//! Integration tests for alert endpoints.

mod common;

use common::*;
use timeplus_client::Alert;
use wiremock::matchers::{method, path};

#[tokio::test]
async fn test_get_alert() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(api_path("alerts/a1e47000-0000-4000-8000-000000000003")))
        .respond_with(ResponseTemplate::new(200).set_body_json(load_fixture("alerts/get_alert.json")))
        .mount(&mock_server)
        .await;

    let client = test_client(&mock_server.uri());
    let alert = client
        .get_alert("a1e47000-0000-4000-8000-000000000003")
        .await
        .unwrap();

    assert_eq!(alert.name, "large-order");
    assert_eq!(alert.severity, 2);
    assert_eq!(alert.action, "email");
    assert_eq!(alert.properties["email"], "ops@example.com");
    assert!(alert.resolve_sql.is_empty());
}

#[tokio::test]
async fn test_create_then_delete_alert() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(api_path("alerts")))
        .respond_with(ResponseTemplate::new(200).set_body_json(load_fixture("alerts/get_alert.json")))
        .expect(1)
        .mount(&mock_server)
        .await;
    Mock::given(method("DELETE"))
        .and(path(api_path("alerts/a1e47000-0000-4000-8000-000000000003")))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = test_client(&mock_server.uri());
    let alert = Alert {
        name: "large-order".to_string(),
        severity: 2,
        action: "email".to_string(),
        trigger_sql: "SELECT * FROM orders WHERE amount > 1000".to_string(),
        ..Alert::default()
    };

    let created = client.create_alert(&alert).await.unwrap();
    client.delete_alert(&created.id).await.unwrap();
}
