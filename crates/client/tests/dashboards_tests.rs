//! Integration tests for dashboard endpoints.

mod common;

use common::*;
use timeplus_client::Dashboard;
use wiremock::matchers::{method, path};

const DASHBOARD_ID: &str = "dddd0000-0000-4000-8000-000000000004";

#[tokio::test]
async fn test_get_dashboard_decodes_panels() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(api_path(&format!("dashboards/{}", DASHBOARD_ID))))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(load_fixture("dashboards/get_dashboard.json")),
        )
        .mount(&mock_server)
        .await;

    let client = test_client(&mock_server.uri());
    let dashboard = client.get_dashboard(DASHBOARD_ID).await.unwrap();

    assert_eq!(dashboard.name, "orders");
    assert_eq!(dashboard.panels.len(), 1);
    assert_eq!(dashboard.panels[0].viz_type, "chart");
    assert_eq!(dashboard.panels[0].position["w"], 6);
}

#[tokio::test]
async fn test_update_dashboard_uses_put_and_tolerates_empty_body() {
    let mock_server = MockServer::start().await;

    Mock::given(method("PUT"))
        .and(path(api_path(&format!("dashboards/{}", DASHBOARD_ID))))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = test_client(&mock_server.uri());
    let dashboard = Dashboard {
        id: DASHBOARD_ID.to_string(),
        name: "orders".to_string(),
        description: "renamed".to_string(),
        ..Dashboard::default()
    };

    let updated = client.update_dashboard(&dashboard).await.unwrap();
    assert_eq!(updated, dashboard);

    let body = single_request_body(&mock_server).await;
    assert_eq!(body["description"], "renamed");
}

#[tokio::test]
async fn test_delete_dashboard() {
    let mock_server = MockServer::start().await;

    Mock::given(method("DELETE"))
        .and(path(api_path(&format!("dashboards/{}", DASHBOARD_ID))))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = test_client(&mock_server.uri());
    client.delete_dashboard(DASHBOARD_ID).await.unwrap();
}
