//! Configuration type definitions for the Timeplus provider.
//!
//! Responsibilities:
//! - Define authentication strategies (API key, basic auth).
//! - Define connection settings and the combined `Config`.
//!
//! Does NOT handle:
//! - Loading configuration from the environment (see `loader` module).
//! - Building HTTP clients (see the client crate).
//!
//! Invariants:
//! - All secret types use `secrecy::SecretString` to prevent accidental logging.

mod auth;
pub(crate) mod connection;

pub use auth::{AuthConfig, AuthStrategy};
pub use connection::{Config, ConnectionConfig};
