//! CLI exit codes for scripting and automation.
//!
//! Responsibilities:
//! - Define structured exit codes that scripts can use to distinguish error types.
//! - Map provider, client, and configuration errors to exit codes.
//!
//! Does NOT handle:
//! - Error message formatting (handled by anyhow Display).
//! - Signal handling (see cancellation.rs for SIGINT handling).
//!
//! Invariants:
//! - Exit codes 1-5 are reserved for specific error categories.
//! - Exit code 130 is reserved for SIGINT (Unix standard: 128 + SIGINT).

use std::fmt;

use timeplus_client::ClientError;
use timeplus_config::ConfigError;
use timeplus_provider::ProviderError;

/// Structured exit codes for timeplus-provider.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum ExitCode {
    Success = 0,

    /// Unhandled or generic failure.
    GeneralError = 1,

    /// Missing or rejected credentials (HTTP 401/403).
    AuthenticationFailed = 2,

    /// Network, timeout, TLS, or endpoint failure.
    ///
    /// Scripts may retry with backoff.
    ConnectionError = 3,

    /// The entity does not exist (HTTP 404/410).
    NotFound = 4,

    /// Invalid configuration, plan, or state. Scripts should fix the input.
    ValidationError = 5,

    /// SIGINT/Ctrl+C (128 + 2).
    Interrupted = 130,
}

impl ExitCode {
    pub const fn as_i32(self) -> i32 {
        self as u8 as i32
    }
}

impl From<&ClientError> for ExitCode {
    fn from(err: &ClientError) -> Self {
        if err.is_auth_error() {
            return ExitCode::AuthenticationFailed;
        }
        if err.is_not_found() {
            return ExitCode::NotFound;
        }
        if err.is_connection_error() {
            return ExitCode::ConnectionError;
        }
        match err {
            ClientError::InvalidUrl(_) => ExitCode::ConnectionError,
            ClientError::ApiError { status: 400, .. } => ExitCode::ValidationError,
            _ => ExitCode::GeneralError,
        }
    }
}

impl From<&ProviderError> for ExitCode {
    fn from(err: &ProviderError) -> Self {
        match err {
            ProviderError::Client(source) | ProviderError::Transport { source, .. } => {
                Self::from(source)
            }
            ProviderError::Config(_)
            | ProviderError::NotConfigured
            | ProviderError::Validation(_)
            | ProviderError::TypeMismatch { .. }
            | ProviderError::UnknownType(_)
            | ProviderError::State(_) => ExitCode::ValidationError,
        }
    }
}

/// An import target that Timeplus does not have.
#[derive(Debug)]
pub struct ImportMissing {
    pub type_name: String,
    pub id: String,
}

impl fmt::Display for ImportMissing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Cannot import non-existent remote object: {} {:?}",
            self.type_name, self.id
        )
    }
}

impl std::error::Error for ImportMissing {}

/// Extension trait for anyhow::Error to extract exit codes.
pub trait ExitCodeExt {
    fn exit_code(&self) -> ExitCode;
}

impl ExitCodeExt for anyhow::Error {
    fn exit_code(&self) -> ExitCode {
        for cause in self.chain() {
            if let Some(err) = cause.downcast_ref::<ProviderError>() {
                return ExitCode::from(err);
            }
            if let Some(err) = cause.downcast_ref::<ClientError>() {
                return ExitCode::from(err);
            }
            if cause.is::<ConfigError>() {
                return ExitCode::ValidationError;
            }
            if cause.is::<ImportMissing>() {
                return ExitCode::NotFound;
            }
        }
        ExitCode::GeneralError
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;
    use timeplus_provider::{Action, Diagnostic};

    fn api_error(status: u16) -> ClientError {
        ClientError::ApiError {
            status,
            method: "GET".to_string(),
            url: "http://localhost:8000/api/v1beta2/streams/orders".to_string(),
            message: "boom".to_string(),
        }
    }

    fn transport(status: u16) -> ProviderError {
        ProviderError::Transport {
            action: Action::Reading,
            entity: "Stream",
            identifier: "orders".to_string(),
            source: api_error(status),
        }
    }

    #[test]
    fn test_exit_code_as_i32() {
        assert_eq!(ExitCode::Success.as_i32(), 0);
        assert_eq!(ExitCode::GeneralError.as_i32(), 1);
        assert_eq!(ExitCode::AuthenticationFailed.as_i32(), 2);
        assert_eq!(ExitCode::ValidationError.as_i32(), 5);
        assert_eq!(ExitCode::Interrupted.as_i32(), 130);
    }

    #[test]
    fn test_from_transport_error_uses_status() {
        assert_eq!(ExitCode::from(&transport(401)), ExitCode::AuthenticationFailed);
        assert_eq!(ExitCode::from(&transport(403)), ExitCode::AuthenticationFailed);
        assert_eq!(ExitCode::from(&transport(404)), ExitCode::NotFound);
        assert_eq!(ExitCode::from(&transport(410)), ExitCode::NotFound);
        assert_eq!(ExitCode::from(&transport(400)), ExitCode::ValidationError);
        assert_eq!(ExitCode::from(&transport(500)), ExitCode::GeneralError);
    }

    #[test]
    fn test_from_client_error_timeout() {
        let err = ClientError::Timeout(Duration::from_secs(30));
        assert_eq!(ExitCode::from(&err), ExitCode::ConnectionError);
    }

    #[test]
    fn test_validation_errors_map_to_validation() {
        let err = ProviderError::Validation(
            Diagnostic::attribute_error("column", "No Columns", "at least one column").into(),
        );
        assert_eq!(ExitCode::from(&err), ExitCode::ValidationError);
        assert_eq!(
            ExitCode::from(&ProviderError::UnknownType("bogus".to_string())),
            ExitCode::ValidationError
        );
    }

    #[test]
    fn test_anyhow_chain_is_searched() {
        let err = anyhow::Error::new(transport(404)).context("reading state");
        assert_eq!(err.exit_code(), ExitCode::NotFound);

        let err = anyhow::Error::new(ImportMissing {
            type_name: "timeplus_stream".to_string(),
            id: "orders".to_string(),
        });
        assert_eq!(err.exit_code(), ExitCode::NotFound);

        assert_eq!(anyhow::anyhow!("other").exit_code(), ExitCode::GeneralError);
    }
}
