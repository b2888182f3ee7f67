//! Connection configuration types for the Timeplus provider.
//!
//! Responsibilities:
//! - Define connection settings (endpoint, workspace, TLS verification, timeout).
//! - Define the main `Config` structure combining connection and auth.
//! - Provide convenience constructors for the cloud and on-prem shapes.
//!
//! Does NOT handle:
//! - Configuration loading from env (see `loader` module).
//! - Building the versioned API base URL (see client crate).
//!
//! Invariants:
//! - All duration fields are serialized as seconds (integers).
//! - `endpoint` carries no trailing slash.

use crate::constants::{DEFAULT_CLOUD_ENDPOINT, DEFAULT_ONPREM_ENDPOINT, DEFAULT_TIMEOUT_SECS};
use crate::types::auth::{AuthConfig, AuthStrategy};
use secrecy::SecretString;
use serde::{Deserialize, Serialize};
use std::time::Duration;

mod duration_seconds {
    use serde::{Deserialize, Deserializer, Serialize, Serializer};
    use std::time::Duration;

    pub fn serialize<S>(duration: &Duration, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        duration.as_secs().serialize(serializer)
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Duration, D::Error>
    where
        D: Deserializer<'de>,
    {
        let secs = u64::deserialize(deserializer)?;
        Ok(Duration::from_secs(secs))
    }
}

/// Connection configuration for a Timeplus deployment.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConnectionConfig {
    /// Base URL of the deployment (e.g. https://us.timeplus.cloud)
    pub endpoint: String,
    /// Workspace identifier, joined as a path segment. Empty for on-prem.
    #[serde(default)]
    pub workspace: String,
    /// Whether to skip TLS verification (for self-signed certificates)
    #[serde(default)]
    pub skip_verify: bool,
    /// Request timeout (serialized as seconds)
    #[serde(with = "duration_seconds")]
    pub timeout: Duration,
}

/// Main configuration structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub connection: ConnectionConfig,
    pub auth: AuthConfig,
}

impl Config {
    /// Cloud configuration: API key plus workspace.
    pub fn with_api_key(endpoint: String, workspace: String, api_key: SecretString) -> Self {
        Self {
            connection: ConnectionConfig {
                endpoint,
                workspace,
                skip_verify: false,
                timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            },
            auth: AuthConfig {
                strategy: AuthStrategy::ApiKey { api_key },
            },
        }
    }

    /// On-prem configuration: username and password, no workspace.
    pub fn with_basic_auth(endpoint: String, username: String, password: SecretString) -> Self {
        Self {
            connection: ConnectionConfig {
                endpoint,
                workspace: String::new(),
                skip_verify: false,
                timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            },
            auth: AuthConfig {
                strategy: AuthStrategy::Basic { username, password },
            },
        }
    }

    /// Whether this configuration targets Timeplus Cloud (API key auth).
    ///
    /// Cloud-only resources such as alerts are registered only in this case.
    pub fn is_cloud(&self) -> bool {
        self.auth.strategy.is_api_key()
    }

    /// The endpoint used when none is configured for the given auth shape.
    pub fn default_endpoint(strategy: &AuthStrategy) -> &'static str {
        match strategy {
            AuthStrategy::ApiKey { .. } => DEFAULT_CLOUD_ENDPOINT,
            AuthStrategy::Basic { .. } => DEFAULT_ONPREM_ENDPOINT,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_connection_config_timeout_as_seconds() {
        let config = Config::with_basic_auth(
            "http://localhost:8000".to_string(),
            "proton".to_string(),
            SecretString::new("pw".to_string().into()),
        );
        let json = serde_json::to_value(&config.connection).unwrap();
        assert_eq!(json["timeout"], 30);
        assert_eq!(json["workspace"], "");
    }

    #[test]
    fn test_is_cloud() {
        let cloud = Config::with_api_key(
            DEFAULT_CLOUD_ENDPOINT.to_string(),
            "ws1".to_string(),
            SecretString::new("key".to_string().into()),
        );
        assert!(cloud.is_cloud());

        let onprem = Config::with_basic_auth(
            DEFAULT_ONPREM_ENDPOINT.to_string(),
            "proton".to_string(),
            SecretString::new("pw".to_string().into()),
        );
        assert!(!onprem.is_cloud());
    }

    #[test]
    fn test_default_endpoint_per_auth_shape() {
        let key = AuthStrategy::ApiKey {
            api_key: SecretString::new("k".to_string().into()),
        };
        let basic = AuthStrategy::Basic {
            username: "u".to_string(),
            password: SecretString::new("p".to_string().into()),
        };
        assert_eq!(Config::default_endpoint(&key), "https://us.timeplus.cloud");
        assert_eq!(Config::default_endpoint(&basic), "http://localhost:8000");
    }
}
