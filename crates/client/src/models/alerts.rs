//! Alert models.
//!
//! # What this module handles:
//! - The `/alerts` wire shape
//!
//! # What this module does NOT handle:
//! - Redacted properties; the server may omit sensitive keys on read and the
//!   provider crate reconciles that against state

use serde::{Deserialize, Serialize};

use super::{ApiResource, Properties};
use crate::serde_helpers::{i64_from_string_or_number, null_as_default};

/// An alert as exchanged with `/alerts`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Alert {
    #[serde(default, deserialize_with = "null_as_default")]
    pub id: String,
    pub name: String,
    #[serde(
        default,
        skip_serializing_if = "String::is_empty",
        deserialize_with = "null_as_default"
    )]
    pub description: String,
    #[serde(default, deserialize_with = "i64_from_string_or_number")]
    pub severity: i64,
    /// Action type fired by the alert (e.g. `email`, `webhook`).
    #[serde(default, deserialize_with = "null_as_default")]
    pub action: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub properties: Properties,
    #[serde(default, deserialize_with = "null_as_default")]
    pub trigger_sql: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub resolve_sql: String,
}

impl Alert {
    pub fn with_id(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            ..Self::default()
        }
    }
}

impl ApiResource for Alert {
    fn path(&self) -> &'static str {
        "alerts"
    }

    fn id(&self) -> &str {
        &self.id
    }
}
