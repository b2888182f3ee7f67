//! Configuration loader for explicit values, environment variables, and `.env` files.
//!
//! Responsibilities:
//! - Provide a builder-pattern `ConfigLoader` for layered configuration.
//! - Enforce the `DOTENV_DISABLED` gate to prevent accidental dotenv loading in tests.
//! - Enforce that exactly one authentication shape is configured.
//!
//! Does NOT handle:
//! - Building HTTP clients (see the client crate).
//!
//! Invariants / Assumptions:
//! - Builder methods take precedence over environment variables.
//! - `load_dotenv()` must be called explicitly to enable `.env` file loading.

mod builder;
mod env;
mod error;

#[cfg(test)]
mod tests;

pub use builder::ConfigLoader;
pub use env::env_var_or_none;
pub use error::ConfigError;
