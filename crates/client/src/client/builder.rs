//! Client builder for constructing [`TimeplusClient`] instances.
//!
//! This module is responsible for:
//! - Providing a fluent builder API for client configuration
//! - Composing the versioned base URL from endpoint and workspace
//! - Configuring the underlying HTTP client (timeouts, TLS verification)
//!
//! # What this module does NOT handle:
//! - Actual API calls (handled by [`TimeplusClient`] methods in `mod.rs`)
//! - Reading environment variables (handled by the config crate's loader)
//!
//! # Invariants
//! - `endpoint` and `auth_strategy` are required and must be provided before calling `build()`
//! - The base URL never carries a trailing slash
//! - An empty workspace contributes no path segment
//! - `skip_verify` only affects HTTPS connections; HTTP connections log a warning

use std::time::Duration;

use timeplus_config::{
    AuthStrategy as ConfigAuthStrategy, Config,
    constants::{API_PATH_SEGMENTS, DEFAULT_MAX_REDIRECTS, DEFAULT_TIMEOUT_SECS},
};

use crate::auth::AuthStrategy;
use crate::client::TimeplusClient;
use crate::endpoints::encode_path_segment;
use crate::error::{ClientError, Result};
use crate::metrics::MetricsCollector;

/// Builder for creating a new [`TimeplusClient`].
pub struct TimeplusClientBuilder {
    endpoint: Option<String>,
    workspace: String,
    auth_strategy: Option<AuthStrategy>,
    skip_verify: bool,
    timeout: Duration,
    metrics: Option<MetricsCollector>,
}

impl Default for TimeplusClientBuilder {
    fn default() -> Self {
        Self {
            endpoint: None,
            workspace: String::new(),
            auth_strategy: None,
            skip_verify: false,
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            metrics: None,
        }
    }
}

impl TimeplusClientBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the deployment endpoint, e.g. `https://us.timeplus.cloud`.
    ///
    /// Trailing slashes are removed.
    pub fn endpoint(mut self, url: String) -> Self {
        self.endpoint = Some(url);
        self
    }

    /// Set the workspace identifier. Leave empty for on-prem deployments.
    pub fn workspace(mut self, workspace: String) -> Self {
        self.workspace = workspace;
        self
    }

    pub fn auth_strategy(mut self, strategy: AuthStrategy) -> Self {
        self.auth_strategy = Some(strategy);
        self
    }

    /// Set whether to skip TLS certificate verification.
    ///
    /// # Security Warning
    /// Only use this against self-signed development deployments.
    pub fn skip_verify(mut self, skip: bool) -> Self {
        self.skip_verify = skip;
        self
    }

    /// Set the per-request timeout. Default is 30 seconds.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Set the metrics collector for API call performance tracking.
    pub fn metrics(mut self, metrics: MetricsCollector) -> Self {
        self.metrics = Some(metrics);
        self
    }

    /// Create a client builder from loaded configuration.
    ///
    /// ```rust,ignore
    /// use timeplus_client::TimeplusClient;
    /// use timeplus_config::ConfigLoader;
    ///
    /// let config = ConfigLoader::new().from_env()?.build()?;
    /// let client = TimeplusClient::builder().from_config(&config).build()?;
    /// ```
    pub fn from_config(mut self, config: &Config) -> Self {
        let auth_strategy = match &config.auth.strategy {
            ConfigAuthStrategy::ApiKey { api_key } => AuthStrategy::ApiKey {
                api_key: api_key.clone(),
            },
            ConfigAuthStrategy::Basic { username, password } => AuthStrategy::Basic {
                username: username.clone(),
                password: password.clone(),
            },
        };

        self.endpoint = Some(config.connection.endpoint.clone());
        self.workspace = config.connection.workspace.clone();
        self.auth_strategy = Some(auth_strategy);
        self.skip_verify = config.connection.skip_verify;
        self.timeout = config.connection.timeout;
        self
    }

    /// `{endpoint}/{workspace}/api/v1beta2`, with the workspace segment omitted when empty.
    ///
    /// - `("https://us.timeplus.cloud/", "ws1")` -> `"https://us.timeplus.cloud/ws1/api/v1beta2"`
    /// - `("http://localhost:8000", "")` -> `"http://localhost:8000/api/v1beta2"`
    fn compose_base_url(endpoint: &str, workspace: &str) -> String {
        let mut url = endpoint.trim_end_matches('/').to_string();
        let workspace = workspace.trim_matches('/');
        if !workspace.is_empty() {
            url.push('/');
            url.push_str(&encode_path_segment(workspace));
        }
        for segment in API_PATH_SEGMENTS {
            url.push('/');
            url.push_str(segment);
        }
        url
    }

    /// Build the [`TimeplusClient`] with the configured options.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::InvalidUrl`] if `endpoint` was not provided or is not a URL.
    /// Returns [`ClientError::AuthFailed`] if `auth_strategy` was not provided.
    /// Returns `ClientError::HttpError` if the HTTP client fails to build.
    pub fn build(self) -> Result<TimeplusClient> {
        let endpoint = self
            .endpoint
            .ok_or_else(|| ClientError::InvalidUrl("endpoint is required".to_string()))?;
        url::Url::parse(&endpoint)
            .map_err(|e| ClientError::InvalidUrl(format!("{}: {}", endpoint, e)))?;
        let base_url = Self::compose_base_url(&endpoint, &self.workspace);

        let auth = self
            .auth_strategy
            .ok_or_else(|| ClientError::AuthFailed("auth_strategy is required".to_string()))?;

        let mut http_builder = reqwest::Client::builder()
            .timeout(self.timeout)
            .redirect(reqwest::redirect::Policy::limited(DEFAULT_MAX_REDIRECTS));

        if self.skip_verify {
            if base_url.starts_with("https://") {
                http_builder = http_builder.danger_accept_invalid_certs(true);
            } else {
                tracing::warn!(
                    "skip_verify=true has no effect on HTTP URLs. TLS verification only applies to HTTPS connections."
                );
            }
        }

        let http = http_builder.build()?;

        Ok(TimeplusClient {
            http,
            base_url,
            auth,
            timeout: self.timeout,
            metrics: self.metrics,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use secrecy::SecretString;

    #[test]
    fn test_from_config_with_api_key() {
        let config = Config::with_api_key(
            "https://us.timeplus.cloud".to_string(),
            "ws1".to_string(),
            SecretString::new("test-key".to_string().into()),
        );

        let client = TimeplusClient::builder().from_config(&config).build();

        assert!(client.is_ok());
        let client = client.unwrap();
        assert_eq!(client.base_url(), "https://us.timeplus.cloud/ws1/api/v1beta2");
        assert!(client.is_api_key_auth());
    }

    #[test]
    fn test_from_config_with_basic_auth() {
        let config = Config::with_basic_auth(
            "http://localhost:8000".to_string(),
            "proton".to_string(),
            SecretString::new("pw".to_string().into()),
        );

        let client = TimeplusClient::builder().from_config(&config).build().unwrap();

        assert_eq!(client.base_url(), "http://localhost:8000/api/v1beta2");
        assert!(!client.is_api_key_auth());
    }

    #[test]
    fn test_from_config_preserves_settings() {
        let mut config = Config::with_api_key(
            "https://us.timeplus.cloud".to_string(),
            "ws1".to_string(),
            SecretString::new("test-key".to_string().into()),
        );
        config.connection.skip_verify = true;
        config.connection.timeout = Duration::from_secs(120);

        let builder = TimeplusClient::builder().from_config(&config);

        assert_eq!(
            builder.endpoint,
            Some("https://us.timeplus.cloud".to_string())
        );
        assert_eq!(builder.workspace, "ws1");
        assert!(builder.skip_verify);
        assert_eq!(builder.timeout, Duration::from_secs(120));
    }

    #[test]
    fn test_compose_base_url_trailing_slash() {
        assert_eq!(
            TimeplusClientBuilder::compose_base_url("https://us.timeplus.cloud/", "ws1"),
            "https://us.timeplus.cloud/ws1/api/v1beta2"
        );
        assert_eq!(
            TimeplusClientBuilder::compose_base_url("https://us.timeplus.cloud//", "/ws1/"),
            "https://us.timeplus.cloud/ws1/api/v1beta2"
        );
    }

    #[test]
    fn test_compose_base_url_empty_workspace() {
        assert_eq!(
            TimeplusClientBuilder::compose_base_url("http://localhost:8000", ""),
            "http://localhost:8000/api/v1beta2"
        );
    }

    #[test]
    fn test_build_requires_endpoint() {
        let err = TimeplusClient::builder()
            .auth_strategy(AuthStrategy::ApiKey {
                api_key: SecretString::new("k".to_string().into()),
            })
            .build()
            .unwrap_err();
        assert!(matches!(err, ClientError::InvalidUrl(_)));
    }

    #[test]
    fn test_build_requires_auth() {
        let err = TimeplusClient::builder()
            .endpoint("http://localhost:8000".to_string())
            .build()
            .unwrap_err();
        assert!(matches!(err, ClientError::AuthFailed(_)));
    }

    #[test]
    fn test_build_rejects_malformed_endpoint() {
        let err = TimeplusClient::builder()
            .endpoint("not a url".to_string())
            .auth_strategy(AuthStrategy::ApiKey {
                api_key: SecretString::new("k".to_string().into()),
            })
            .build()
            .unwrap_err();
        assert!(matches!(err, ClientError::InvalidUrl(_)));
    }
}
