//! Provider configuration for the Timeplus infrastructure provider.
//!
//! This crate provides the configuration types and the loader that resolves
//! them from explicit values, environment variables, and `.env` files.

pub mod constants;
mod loader;
pub mod types;

pub use loader::{ConfigError, ConfigLoader, env_var_or_none};
pub use types::{AuthConfig, AuthStrategy, Config, ConnectionConfig};
