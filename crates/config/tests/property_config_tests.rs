//! Property-based tests for endpoint normalization.

use proptest::prelude::*;
use timeplus_config::ConfigLoader;

fn endpoint_strategy() -> impl Strategy<Value = String> {
    let scheme = prop_oneof![Just("http"), Just("https")];
    let host = prop_oneof![
        Just("localhost"),
        Just("us.timeplus.cloud"),
        Just("timeplus.internal"),
    ];
    (scheme, host, 1024u16..=65535u16)
        .prop_map(|(scheme, host, port)| format!("{}://{}:{}", scheme, host, port))
}

proptest! {
    #[test]
    fn prop_trailing_slashes_are_removed(endpoint in endpoint_strategy(), slashes in 0usize..4) {
        let raw = format!("{}{}", endpoint, "/".repeat(slashes));
        let config = ConfigLoader::new()
            .with_endpoint(raw)
            .with_username("proton".to_string())
            .with_password("pw".to_string())
            .build()
            .unwrap();
        prop_assert_eq!(config.connection.endpoint, endpoint);
    }
}
