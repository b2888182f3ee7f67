//! Shared helpers for provider integration tests.

use timeplus_client::testing::test_client;
use timeplus_provider::Provider;

/// A provider configured with an API-key client rooted at `endpoint`.
pub fn provider(endpoint: &str) -> Provider {
    let mut provider = Provider::new();
    provider.configure_with_client(test_client(endpoint));
    provider
}
