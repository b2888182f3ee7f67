//! Configuration context for command execution.
//!
//! Responsibilities:
//! - Carry the configuration resolved in `main()`, or the reason it could not be built.
//! - Hand each command a provider configured the way the command needs.
//!
//! Invariants:
//! - Lifecycle commands never run against an unconfigured provider.
//! - Offline commands (schema, validate, plan) use a configured provider when
//!   credentials are present so API-key-only types such as `alert` are listed.

use timeplus_config::{Config, ConfigError};
use timeplus_provider::{Provider, ProviderError};
use tracing::debug;

pub(crate) enum ConfigCommandContext {
    Real(Box<Config>),
    Unavailable(ConfigError),
}

impl ConfigCommandContext {
    /// A configured provider, failing if no usable configuration was found.
    pub(crate) fn into_provider(self) -> anyhow::Result<Provider> {
        match self {
            ConfigCommandContext::Real(config) => configured(&config),
            ConfigCommandContext::Unavailable(e) => Err(ProviderError::Config(e).into()),
        }
    }

    /// A configured provider when possible, otherwise an unconfigured one.
    pub(crate) fn into_offline_provider(self) -> anyhow::Result<Provider> {
        match self {
            ConfigCommandContext::Real(config) => configured(&config),
            ConfigCommandContext::Unavailable(e) => {
                debug!(error = %e, "No provider configuration, running offline");
                Ok(Provider::new())
            }
        }
    }
}

fn configured(config: &Config) -> anyhow::Result<Provider> {
    let mut provider = Provider::new();
    provider.configure(config)?;
    Ok(provider)
}
