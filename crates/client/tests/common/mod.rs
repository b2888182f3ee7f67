//! Common test utilities for integration tests.
//!
//! # Invariants
//! - Fixtures are loaded from the `fixtures/` directory relative to the crate root
//! - Every client built here targets workspace `ws1` with an API key
//!
//! # What this does NOT handle
//! - Mock server setup (use wiremock directly in tests)

// Re-export test utilities from timeplus-client
#[allow(unused_imports)]
pub use timeplus_client::testing::{TEST_API_KEY, api_path, load_fixture, test_client};

#[allow(unused_imports)]
pub use wiremock::{Mock, MockServer, ResponseTemplate};

/// JSON body of the only request the server received.
#[allow(dead_code)]
pub async fn single_request_body(server: &MockServer) -> serde_json::Value {
    let requests = server
        .received_requests()
        .await
        .expect("request recording is enabled");
    assert_eq!(requests.len(), 1, "expected exactly one request");
    serde_json::from_slice(&requests[0].body).expect("request body is JSON")
}
