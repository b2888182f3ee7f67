//! Authentication strategies and how they are applied to requests.

use reqwest::RequestBuilder;
use secrecy::{ExposeSecret, SecretString};

/// Header carrying a Timeplus Cloud API key.
pub const API_KEY_HEADER: &str = "X-Api-Key";

/// Strategy for authenticating with Timeplus.
#[derive(Debug, Clone)]
pub enum AuthStrategy {
    /// Timeplus Cloud API key.
    ApiKey { api_key: SecretString },
    /// Username and password, sent as HTTP basic auth (on-prem).
    Basic {
        username: String,
        password: SecretString,
    },
}

impl AuthStrategy {
    /// Attach the credentials to an outgoing request.
    pub(crate) fn apply(&self, builder: RequestBuilder) -> RequestBuilder {
        match self {
            AuthStrategy::ApiKey { api_key } => {
                builder.header(API_KEY_HEADER, api_key.expose_secret())
            }
            AuthStrategy::Basic { username, password } => {
                builder.basic_auth(username, Some(password.expose_secret()))
            }
        }
    }

    pub fn is_api_key(&self) -> bool {
        matches!(self, AuthStrategy::ApiKey { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_key_applied_as_header() {
        let auth = AuthStrategy::ApiKey {
            api_key: SecretString::new("k-123".to_string().into()),
        };
        let request = auth
            .apply(reqwest::Client::new().get("http://localhost:8000/api/v1beta2/streams/x"))
            .build()
            .unwrap();
        assert_eq!(request.headers()[API_KEY_HEADER], "k-123");
        assert!(request.headers().get(reqwest::header::AUTHORIZATION).is_none());
    }

    #[test]
    fn test_basic_auth_applied_as_authorization() {
        let auth = AuthStrategy::Basic {
            username: "proton".to_string(),
            password: SecretString::new("pw".to_string().into()),
        };
        let request = auth
            .apply(reqwest::Client::new().get("http://localhost:8000/api/v1beta2/streams/x"))
            .build()
            .unwrap();
        let header = request.headers()[reqwest::header::AUTHORIZATION]
            .to_str()
            .unwrap();
        // base64("proton:pw")
        assert_eq!(header, "Basic cHJvdG9uOnB3");
    }

    #[test]
    fn test_debug_does_not_leak_secret() {
        let auth = AuthStrategy::ApiKey {
            api_key: SecretString::new("super-secret".to_string().into()),
        };
        assert!(!format!("{:?}", auth).contains("super-secret"));
    }
}
