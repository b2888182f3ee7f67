//! Source models.

use serde::{Deserialize, Serialize};

use super::{ApiResource, Properties};
use crate::serde_helpers::null_as_default;

/// A source as exchanged with `/sources`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Source {
    #[serde(default, deserialize_with = "null_as_default")]
    pub id: String,
    pub name: String,
    #[serde(
        default,
        skip_serializing_if = "String::is_empty",
        deserialize_with = "null_as_default"
    )]
    pub description: String,
    /// Stream the source writes into.
    #[serde(default, deserialize_with = "null_as_default")]
    pub stream: String,
    #[serde(rename = "type")]
    pub source_type: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub properties: Properties,
}

impl Source {
    pub fn with_id(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            ..Self::default()
        }
    }
}

impl ApiResource for Source {
    fn path(&self) -> &'static str {
        "sources"
    }

    fn id(&self) -> &str {
        &self.id
    }
}
