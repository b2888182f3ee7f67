//! Builder-method tests for the configuration loader.

use crate::loader::builder::ConfigLoader;
use crate::loader::error::ConfigError;
use crate::types::AuthStrategy;
use secrecy::ExposeSecret;
use std::time::Duration;

#[test]
fn test_api_key_defaults_to_cloud_endpoint() {
    let config = ConfigLoader::new()
        .with_api_key("key-123".to_string())
        .with_workspace("ws1".to_string())
        .build()
        .unwrap();

    assert_eq!(config.connection.endpoint, "https://us.timeplus.cloud");
    assert_eq!(config.connection.workspace, "ws1");
    assert!(config.is_cloud());
    match config.auth.strategy {
        AuthStrategy::ApiKey { api_key } => assert_eq!(api_key.expose_secret(), "key-123"),
        other => panic!("Expected ApiKey, got {:?}", other),
    }
}

#[test]
fn test_basic_auth_defaults_to_onprem_endpoint() {
    let config = ConfigLoader::new()
        .with_username("proton".to_string())
        .with_password("secret".to_string())
        .build()
        .unwrap();

    assert_eq!(config.connection.endpoint, "http://localhost:8000");
    assert_eq!(config.connection.workspace, "");
    assert!(!config.is_cloud());
}

#[test]
fn test_explicit_endpoint_is_normalized() {
    let config = ConfigLoader::new()
        .with_endpoint("https://timeplus.internal:8443/".to_string())
        .with_username("proton".to_string())
        .with_password("secret".to_string())
        .with_timeout(Duration::from_secs(60))
        .with_skip_verify(true)
        .build()
        .unwrap();

    assert_eq!(config.connection.endpoint, "https://timeplus.internal:8443");
    assert_eq!(config.connection.timeout, Duration::from_secs(60));
    assert!(config.connection.skip_verify);
}

#[test]
fn test_workspace_slashes_trimmed() {
    let config = ConfigLoader::new()
        .with_api_key("key".to_string())
        .with_workspace("/ws1/".to_string())
        .build()
        .unwrap();
    assert_eq!(config.connection.workspace, "ws1");
}

#[test]
fn test_missing_auth() {
    let result = ConfigLoader::new()
        .with_endpoint("http://localhost:8000".to_string())
        .build();
    assert!(matches!(result, Err(ConfigError::MissingAuth)));
}

#[test]
fn test_api_key_and_basic_auth_conflict() {
    let result = ConfigLoader::new()
        .with_api_key("key".to_string())
        .with_username("proton".to_string())
        .with_password("secret".to_string())
        .build();
    assert!(matches!(result, Err(ConfigError::ConflictingAuth(_))));
}

#[test]
fn test_username_without_password_rejected() {
    let result = ConfigLoader::new()
        .with_username("proton".to_string())
        .build();
    assert!(matches!(result, Err(ConfigError::InvalidValue { .. })));
}

#[test]
fn test_invalid_endpoint_rejected() {
    let result = ConfigLoader::new()
        .with_endpoint("not a url".to_string())
        .with_api_key("key".to_string())
        .build();
    match result {
        Err(ConfigError::InvalidValue { var, .. }) => assert_eq!(var, "endpoint"),
        other => panic!("Expected InvalidValue, got {:?}", other.map(|_| ())),
    }
}

#[test]
fn test_non_http_scheme_rejected() {
    let result = ConfigLoader::new()
        .with_endpoint("ftp://example.com".to_string())
        .with_api_key("key".to_string())
        .build();
    assert!(matches!(result, Err(ConfigError::InvalidValue { .. })));
}
