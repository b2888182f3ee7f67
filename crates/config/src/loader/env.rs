//! Environment variable parsing for configuration.
//!
//! Responsibilities:
//! - Read `TIMEPLUS_*` variables and apply them to a `ConfigLoader`.
//! - Provide a helper for reading env vars with empty/whitespace filtering.
//!
//! Does NOT handle:
//! - Building the final Config (see builder.rs).
//! - .env file loading (handled by `ConfigLoader::load_dotenv`).
//!
//! Invariants:
//! - Empty or whitespace-only environment variables are treated as unset.
//! - Returned values are trimmed.
//! - Values already set on the loader are never overwritten.
//! - Invalid numeric or boolean values return `ConfigError::InvalidValue`.

use secrecy::SecretString;
use std::time::Duration;

use super::builder::ConfigLoader;
use super::error::ConfigError;
use crate::constants::{
    ENV_API_KEY, ENV_ENDPOINT, ENV_PASSWORD, ENV_SKIP_VERIFY, ENV_TIMEOUT, ENV_USERNAME,
    ENV_WORKSPACE,
};

/// Read an environment variable, returning None if unset, empty, or whitespace-only.
pub fn env_var_or_none(key: &str) -> Option<String> {
    std::env::var(key).ok().and_then(|s| {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            None
        } else if trimmed.len() == s.len() {
            Some(s)
        } else {
            Some(trimmed.to_string())
        }
    })
}

/// Fill unset loader fields from the environment.
pub(super) fn apply_env(loader: &mut ConfigLoader) -> Result<(), ConfigError> {
    if loader.endpoint.is_none() {
        loader.endpoint = env_var_or_none(ENV_ENDPOINT);
    }
    if loader.workspace.is_none() {
        loader.workspace = env_var_or_none(ENV_WORKSPACE);
    }
    if loader.api_key.is_none() {
        loader.api_key = env_var_or_none(ENV_API_KEY).map(|k| SecretString::new(k.into()));
    }
    if loader.username.is_none() {
        loader.username = env_var_or_none(ENV_USERNAME);
    }
    if loader.password.is_none() {
        loader.password = env_var_or_none(ENV_PASSWORD).map(|p| SecretString::new(p.into()));
    }
    if loader.skip_verify.is_none()
        && let Some(skip) = env_var_or_none(ENV_SKIP_VERIFY)
    {
        loader.skip_verify = Some(skip.parse().map_err(|_| ConfigError::InvalidValue {
            var: ENV_SKIP_VERIFY.to_string(),
            message: "must be true or false".to_string(),
        })?);
    }
    if loader.timeout.is_none()
        && let Some(timeout) = env_var_or_none(ENV_TIMEOUT)
    {
        let secs: u64 = timeout.parse().map_err(|_| ConfigError::InvalidValue {
            var: ENV_TIMEOUT.to_string(),
            message: "must be a number".to_string(),
        })?;
        loader.timeout = Some(Duration::from_secs(secs));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    #[serial]
    fn test_env_var_or_none_filters_whitespace() {
        temp_env::with_vars(
            [
                ("TIMEPLUS_TEST_EMPTY", Some("")),
                ("TIMEPLUS_TEST_SPACES", Some("   ")),
                ("TIMEPLUS_TEST_PADDED", Some("  value  ")),
            ],
            || {
                assert_eq!(env_var_or_none("TIMEPLUS_TEST_EMPTY"), None);
                assert_eq!(env_var_or_none("TIMEPLUS_TEST_SPACES"), None);
                assert_eq!(
                    env_var_or_none("TIMEPLUS_TEST_PADDED"),
                    Some("value".to_string())
                );
                assert_eq!(env_var_or_none("TIMEPLUS_TEST_UNSET_VAR"), None);
            },
        );
    }
}
