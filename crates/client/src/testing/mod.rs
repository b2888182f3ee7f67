//! Testing utilities for Timeplus client tests.
//!
//! Available when running tests or when the `test-utils` feature is enabled.
//!
//! # Example
//! ```ignore
//! use timeplus_client::testing::{load_fixture, test_client};
//!
//! let fixture = load_fixture("streams/get_stream.json");
//! let client = test_client(&mock_server.uri());
//! ```

use std::path::Path;

use secrecy::SecretString;

use crate::auth::AuthStrategy;
use crate::client::TimeplusClient;

/// Workspace used by [`test_client`].
pub const TEST_WORKSPACE: &str = "ws1";

/// API key used by [`test_client`].
pub const TEST_API_KEY: &str = "test-api-key";

/// Load a JSON fixture file from the fixtures directory.
///
/// # Panics
/// - If the fixture file cannot be read
/// - If the file content is not valid JSON
pub fn load_fixture(fixture_path: &str) -> serde_json::Value {
    let manifest_dir = Path::new(env!("CARGO_MANIFEST_DIR"));
    let full_path = manifest_dir.join("fixtures").join(fixture_path);
    let content = std::fs::read_to_string(&full_path)
        .unwrap_or_else(|_| panic!("Failed to load fixture: {}", full_path.display()));
    serde_json::from_str(&content).expect("Invalid JSON in fixture")
}

/// API-key client rooted at `{endpoint}/ws1/api/v1beta2`.
///
/// # Panics
/// If the client cannot be built, which only happens for a malformed endpoint.
pub fn test_client(endpoint: &str) -> TimeplusClient {
    TimeplusClient::builder()
        .endpoint(endpoint.to_string())
        .workspace(TEST_WORKSPACE.to_string())
        .auth_strategy(AuthStrategy::ApiKey {
            api_key: SecretString::new(TEST_API_KEY.to_string().into()),
        })
        .build()
        .expect("test client should build")
}

/// Path prefix every request from [`test_client`] carries.
pub fn api_path(collection_and_id: &str) -> String {
    format!("/{}/api/v1beta2/{}", TEST_WORKSPACE, collection_and_id)
}
