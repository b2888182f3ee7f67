//! Authentication types for the Timeplus provider configuration.
//!
//! Responsibilities:
//! - Define the two authentication shapes: cloud API key and on-prem basic auth.
//! - Handle serialization of secret values.
//!
//! Does NOT handle:
//! - Turning credentials into request headers (see client crate).
//!
//! Invariants:
//! - All secret values use `secrecy::SecretString`; `Debug` output never shows them.

use secrecy::SecretString;
use serde::{Deserialize, Serialize};

mod secret_string {
    use secrecy::{ExposeSecret, SecretString};
    use serde::{Deserialize as DeserializeTrait, Serialize as SerializeTrait};
    use serde::{Deserializer, Serializer};

    pub fn serialize<S>(secret: &SecretString, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        secret.expose_secret().serialize(serializer)
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<SecretString, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Ok(SecretString::new(s.into()))
    }
}

/// Strategy for authenticating with Timeplus.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum AuthStrategy {
    /// Timeplus Cloud API key, sent as `X-Api-Key`.
    #[serde(rename = "api_key")]
    ApiKey {
        #[serde(with = "secret_string")]
        api_key: SecretString,
    },
    /// Username and password, sent as HTTP basic auth.
    #[serde(rename = "basic")]
    Basic {
        username: String,
        #[serde(with = "secret_string")]
        password: SecretString,
    },
}

impl AuthStrategy {
    /// Whether this is the cloud (API key) shape.
    pub fn is_api_key(&self) -> bool {
        matches!(self, Self::ApiKey { .. })
    }
}

/// Authentication configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthConfig {
    #[serde(flatten)]
    pub strategy: AuthStrategy,
}
