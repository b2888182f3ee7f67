//! Timeout validation tests for the configuration loader builder.

use crate::constants::MAX_TIMEOUT_SECS;
use crate::loader::builder::ConfigLoader;
use crate::loader::error::ConfigError;
use std::time::Duration;

fn basic_loader() -> ConfigLoader {
    ConfigLoader::new()
        .with_username("proton".to_string())
        .with_password("secret".to_string())
}

#[test]
fn test_timeout_zero_invalid() {
    let result = basic_loader().with_timeout(Duration::from_secs(0)).build();
    match result {
        Err(ConfigError::InvalidTimeout { message }) => {
            assert!(
                message.contains("must be greater than 0"),
                "Expected message about timeout > 0, got: {}",
                message
            );
        }
        Ok(_) => panic!("Expected InvalidTimeout error for zero timeout, got Ok"),
        Err(ref e) => panic!("Expected InvalidTimeout error, got {:?}", e),
    }
}

#[test]
fn test_timeout_exceeds_max_invalid() {
    let result = basic_loader()
        .with_timeout(Duration::from_secs(MAX_TIMEOUT_SECS + 1))
        .build();
    assert!(matches!(result, Err(ConfigError::InvalidTimeout { .. })));
}

#[test]
fn test_timeout_at_max_valid() {
    let config = basic_loader()
        .with_timeout(Duration::from_secs(MAX_TIMEOUT_SECS))
        .build()
        .unwrap();
    assert_eq!(config.connection.timeout.as_secs(), MAX_TIMEOUT_SECS);
}
