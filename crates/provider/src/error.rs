//! Error types for the provider.
//!
//! The variants map onto the four ways an operation fails:
//! configuration, validation, transport, and read-side type mismatch.
//! Decoding host-supplied plan or state JSON is reported as [`ProviderError::State`].

use std::fmt;

use thiserror::Error;
use timeplus_client::ClientError;
use timeplus_config::ConfigError;

use crate::diagnostics::Diagnostics;

/// Result type alias for provider operations.
pub type Result<T> = std::result::Result<T, ProviderError>;

/// The lifecycle step a transport error happened in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Creating,
    Reading,
    Updating,
    Deleting,
}

impl Action {
    fn verb(self) -> &'static str {
        match self {
            Action::Creating => "create",
            Action::Reading => "read",
            Action::Updating => "update",
            Action::Deleting => "delete",
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Action::Creating => "Creating",
            Action::Reading => "Reading",
            Action::Updating => "Updating",
            Action::Deleting => "Deleting",
        })
    }
}

#[derive(Error, Debug)]
pub enum ProviderError {
    #[error("Invalid provider configuration: {0}")]
    Config(#[from] ConfigError),

    #[error("Provider is not configured; call configure before managing resources")]
    NotConfigured,

    #[error("Unable to create Timeplus client: {0}")]
    Client(#[source] ClientError),

    #[error("Validation failed: {0}")]
    Validation(Diagnostics),

    #[error(
        "Error {action} {entity}: Unable to {verb} {lower} {identifier:?}, got error: {source}",
        verb = .action.verb(),
        lower = .entity.to_lowercase()
    )]
    Transport {
        action: Action,
        entity: &'static str,
        identifier: String,
        #[source]
        source: ClientError,
    },

    #[error("Error Reading {entity}: {message}")]
    TypeMismatch {
        entity: &'static str,
        message: String,
    },

    #[error("Unknown resource or data source type: {0}")]
    UnknownType(String),

    #[error("Unable to decode plan or state: {0}")]
    State(#[from] serde_json::Error),
}

impl ProviderError {
    pub(crate) fn transport(
        action: Action,
        entity: &'static str,
        identifier: impl Into<String>,
        source: ClientError,
    ) -> Self {
        Self::Transport {
            action,
            entity,
            identifier: identifier.into(),
            source,
        }
    }

    /// The underlying transport error, if any.
    pub fn client_error(&self) -> Option<&ClientError> {
        match self {
            Self::Transport { source, .. } | Self::Client(source) => Some(source),
            _ => None,
        }
    }

    /// Whether the Service reported the resource as gone.
    pub fn is_not_found(&self) -> bool {
        self.client_error().is_some_and(ClientError::is_not_found)
    }

    /// Attribute-scoped diagnostics when this is a validation failure.
    pub fn diagnostics(&self) -> Option<&Diagnostics> {
        match self {
            Self::Validation(diags) => Some(diags),
            _ => None,
        }
    }
}

impl From<Diagnostics> for ProviderError {
    fn from(diags: Diagnostics) -> Self {
        Self::Validation(diags)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diagnostics::Diagnostic;

    fn api_error(status: u16) -> ClientError {
        ClientError::ApiError {
            status,
            method: "GET".to_string(),
            url: "http://localhost:8000/api/v1beta2/streams/orders".to_string(),
            message: "not here".to_string(),
        }
    }

    #[test]
    fn test_transport_error_message() {
        let err = ProviderError::transport(Action::Creating, "Stream", "orders", api_error(500));
        assert_eq!(
            err.to_string(),
            "Error Creating Stream: Unable to create stream \"orders\", got error: \
             GET http://localhost:8000/api/v1beta2/streams/orders failed: statusCode=500 body='not here'"
        );
    }

    #[test]
    fn test_transport_error_lowercases_multiword_entity() {
        let err = ProviderError::transport(
            Action::Deleting,
            "Materialized View",
            "mv1",
            api_error(500),
        );
        assert!(
            err.to_string()
                .starts_with("Error Deleting Materialized View: Unable to delete materialized view \"mv1\"")
        );
    }

    #[test]
    fn test_is_not_found() {
        let err = ProviderError::transport(Action::Reading, "Stream", "orders", api_error(404));
        assert!(err.is_not_found());

        let err = ProviderError::transport(Action::Reading, "Stream", "orders", api_error(500));
        assert!(!err.is_not_found());

        assert!(!ProviderError::NotConfigured.is_not_found());
    }

    #[test]
    fn test_validation_exposes_diagnostics() {
        let err: ProviderError =
            Diagnostics::from(Diagnostic::attribute_error("column", "No Columns", "x")).into();
        assert!(err.diagnostics().unwrap().has_error());
    }

    #[test]
    fn test_type_mismatch_message() {
        let err = ProviderError::TypeMismatch {
            entity: "Remote Function",
            message: "Function with name foo is not a remote function".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Error Reading Remote Function: Function with name foo is not a remote function"
        );
    }
}
