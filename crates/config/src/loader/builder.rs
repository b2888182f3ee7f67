//! Configuration loader builder implementation.
//!
//! Responsibilities:
//! - Collect provider settings from builder methods and the environment.
//! - Resolve the auth shape and its default endpoint.
//! - Validate the endpoint URL and timeout.
//!
//! Does NOT handle:
//! - Direct environment variable parsing logic (delegated to env.rs).
//!
//! Invariants / Assumptions:
//! - Builder methods take precedence over environment variables.
//! - Exactly one of `api_key` or `username`+`password` must be present.
//! - The `DOTENV_DISABLED` variable is checked before `dotenvy::dotenv()` is called.

use secrecy::SecretString;
use std::time::Duration;
use tracing::debug;

use super::env::apply_env;
use super::error::ConfigError;
use crate::constants::{DEFAULT_TIMEOUT_SECS, MAX_TIMEOUT_SECS};
use crate::types::{AuthConfig, AuthStrategy, Config, ConnectionConfig};

/// Configuration loader that builds a [`Config`] from explicit values and the environment.
#[derive(Default)]
pub struct ConfigLoader {
    pub(super) endpoint: Option<String>,
    pub(super) workspace: Option<String>,
    pub(super) api_key: Option<SecretString>,
    pub(super) username: Option<String>,
    pub(super) password: Option<SecretString>,
    pub(super) skip_verify: Option<bool>,
    pub(super) timeout: Option<Duration>,
}

impl ConfigLoader {
    /// Create a new configuration loader.
    pub fn new() -> Self {
        Self::default()
    }

    fn dotenv_disabled() -> bool {
        matches!(
            std::env::var("DOTENV_DISABLED").ok().as_deref(),
            Some("true") | Some("1")
        )
    }

    /// Load environment variables from a `.env` file if present.
    ///
    /// Skipped entirely when `DOTENV_DISABLED` is `true` or `1`. A missing
    /// file is not an error.
    ///
    /// # Errors
    ///
    /// - `ConfigError::DotenvParse` if the file has invalid syntax
    /// - `ConfigError::DotenvIo` if the file exists but cannot be read
    pub fn load_dotenv(self) -> Result<Self, ConfigError> {
        if Self::dotenv_disabled() {
            debug!("Skipping .env loading (DOTENV_DISABLED is set)");
            return Ok(self);
        }

        match dotenvy::dotenv() {
            Ok(path) => {
                debug!(path = %path.display(), "Loaded .env file");
                Ok(self)
            }
            Err(e) if Self::is_not_found(&e) => Ok(self),
            Err(dotenvy::Error::LineParse(_, idx)) => {
                Err(ConfigError::DotenvParse { error_index: idx })
            }
            Err(dotenvy::Error::Io(io_err)) => Err(ConfigError::DotenvIo {
                kind: io_err.kind(),
            }),
            Err(_) => Err(ConfigError::DotenvUnknown),
        }
    }

    fn is_not_found(err: &dotenvy::Error) -> bool {
        matches!(
            err,
            dotenvy::Error::Io(io_err) if io_err.kind() == std::io::ErrorKind::NotFound
        )
    }

    /// Fill any value not set explicitly from `TIMEPLUS_*` environment variables.
    pub fn from_env(mut self) -> Result<Self, ConfigError> {
        apply_env(&mut self)?;
        debug!(
            endpoint = ?self.endpoint,
            workspace = ?self.workspace,
            api_key = self.api_key.is_some(),
            username = ?self.username,
            "Applied TIMEPLUS_* environment layer"
        );
        Ok(self)
    }

    pub fn with_endpoint(mut self, endpoint: String) -> Self {
        self.endpoint = Some(endpoint);
        self
    }

    pub fn with_workspace(mut self, workspace: String) -> Self {
        self.workspace = Some(workspace);
        self
    }

    pub fn with_api_key(mut self, api_key: String) -> Self {
        self.api_key = Some(SecretString::new(api_key.into()));
        self
    }

    pub fn with_username(mut self, username: String) -> Self {
        self.username = Some(username);
        self
    }

    pub fn with_password(mut self, password: String) -> Self {
        self.password = Some(SecretString::new(password.into()));
        self
    }

    pub fn with_skip_verify(mut self, skip: bool) -> Self {
        self.skip_verify = Some(skip);
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Build the final configuration.
    ///
    /// # Errors
    ///
    /// - `ConfigError::ConflictingAuth` when both an API key and username/password are set
    /// - `ConfigError::MissingAuth` when neither shape is complete
    /// - `ConfigError::InvalidValue` when the endpoint is not an absolute http(s) URL
    /// - `ConfigError::InvalidTimeout` when the timeout is zero or too large
    pub fn build(self) -> Result<Config, ConfigError> {
        let strategy = match (self.api_key, self.username, self.password) {
            (Some(_), Some(_), _) | (Some(_), _, Some(_)) => {
                return Err(ConfigError::ConflictingAuth(
                    "api_key cannot be combined with username/password".to_string(),
                ));
            }
            (Some(api_key), None, None) => AuthStrategy::ApiKey { api_key },
            (None, Some(username), Some(password)) => AuthStrategy::Basic { username, password },
            (None, Some(_), None) | (None, None, Some(_)) => {
                return Err(ConfigError::InvalidValue {
                    var: "username/password".to_string(),
                    message: "username and password must be provided together".to_string(),
                });
            }
            (None, None, None) => return Err(ConfigError::MissingAuth),
        };

        let endpoint = match self.endpoint {
            Some(raw) => validate_and_normalize_endpoint(&raw)?,
            None => Config::default_endpoint(&strategy).to_string(),
        };

        let workspace = self
            .workspace
            .map(|w| w.trim().trim_matches('/').to_string())
            .unwrap_or_default();

        let connection = ConnectionConfig {
            endpoint,
            workspace,
            skip_verify: self.skip_verify.unwrap_or(false),
            timeout: self
                .timeout
                .unwrap_or(Duration::from_secs(DEFAULT_TIMEOUT_SECS)),
        };

        Self::validate_timeout(&connection)?;

        Ok(Config {
            connection,
            auth: AuthConfig { strategy },
        })
    }

    fn validate_timeout(connection: &ConnectionConfig) -> Result<(), ConfigError> {
        let timeout_secs = connection.timeout.as_secs();

        if timeout_secs == 0 {
            return Err(ConfigError::InvalidTimeout {
                message: "timeout must be greater than 0 seconds".to_string(),
            });
        }

        if timeout_secs > MAX_TIMEOUT_SECS {
            return Err(ConfigError::InvalidTimeout {
                message: format!(
                    "timeout exceeds maximum allowed value of {} seconds",
                    MAX_TIMEOUT_SECS
                ),
            });
        }

        Ok(())
    }
}

fn validate_and_normalize_endpoint(raw: &str) -> Result<String, ConfigError> {
    let trimmed = raw.trim();

    let parsed = url::Url::parse(trimmed).map_err(|e| ConfigError::InvalidValue {
        var: "endpoint".into(),
        message: format!(
            "must be an absolute http(s) URL with a host (e.g. https://us.timeplus.cloud): {e}"
        ),
    })?;

    let scheme = parsed.scheme();
    if scheme != "http" && scheme != "https" {
        return Err(ConfigError::InvalidValue {
            var: "endpoint".into(),
            message: format!("scheme must be http or https, got: {scheme}"),
        });
    }

    if parsed.host_str().is_none() {
        return Err(ConfigError::InvalidValue {
            var: "endpoint".into(),
            message: "host is required (e.g. http://localhost:8000)".into(),
        });
    }

    Ok(trimmed.trim_end_matches('/').to_string())
}
