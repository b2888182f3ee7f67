//! Dashboard models.

use serde::{Deserialize, Serialize};

use super::{ApiResource, Properties};
use crate::serde_helpers::null_as_default;

/// A dashboard panel. The content is opaque to the provider.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Panel {
    #[serde(default, deserialize_with = "null_as_default")]
    pub id: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub title: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub description: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub position: Properties,
    #[serde(default, deserialize_with = "null_as_default")]
    pub viz_type: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub viz_content: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub viz_config: Properties,
}

/// A dashboard as exchanged with `/dashboards`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Dashboard {
    #[serde(default, deserialize_with = "null_as_default")]
    pub id: String,
    pub name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub description: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub panels: Vec<Panel>,
}

impl Dashboard {
    pub fn with_id(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            ..Self::default()
        }
    }
}

impl ApiResource for Dashboard {
    fn path(&self) -> &'static str {
        "dashboards"
    }

    fn id(&self) -> &str {
        &self.id
    }
}
