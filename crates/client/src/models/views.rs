//! View and materialized view models.
//!
//! Both are served by `/views` and share [`ViewApiModel`], discriminated by
//! `materialized`. [`View`] and [`MaterializedView`] are the typed shapes the
//! rest of the workspace uses.

use serde::{Deserialize, Serialize};

use super::ApiResource;
use crate::serde_helpers::{i64_from_string_or_number, null_as_default};

/// Shared wire shape of `/views`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ViewApiModel {
    pub name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub description: String,
    /// Omitted when empty; a materialized view's query cannot be re-sent on update.
    #[serde(
        default,
        skip_serializing_if = "String::is_empty",
        deserialize_with = "null_as_default"
    )]
    pub query: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub materialized: bool,
    #[serde(
        default,
        skip_serializing_if = "String::is_empty",
        deserialize_with = "null_as_default"
    )]
    pub target_stream: String,
    #[serde(
        rename = "logstore_retention_bytes",
        default,
        skip_serializing_if = "is_zero",
        deserialize_with = "i64_from_string_or_number"
    )]
    pub retention_bytes: i64,
    #[serde(
        rename = "logstore_retention_ms",
        default,
        skip_serializing_if = "is_zero",
        deserialize_with = "i64_from_string_or_number"
    )]
    pub retention_ms: i64,
    #[serde(
        rename(serialize = "ttl_expression", deserialize = "ttl"),
        default,
        skip_serializing_if = "String::is_empty",
        deserialize_with = "null_as_default"
    )]
    pub ttl_expression: String,
}

fn is_zero(v: &i64) -> bool {
    *v == 0
}

impl ViewApiModel {
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }
}

impl ApiResource for ViewApiModel {
    fn path(&self) -> &'static str {
        "views"
    }

    fn id(&self) -> &str {
        &self.name
    }
}

/// A plain (non-materialized) view.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct View {
    pub name: String,
    pub description: String,
    pub query: String,
}

impl From<&View> for ViewApiModel {
    fn from(v: &View) -> Self {
        Self {
            name: v.name.clone(),
            description: v.description.clone(),
            query: v.query.clone(),
            materialized: false,
            ..Self::default()
        }
    }
}

impl From<ViewApiModel> for View {
    fn from(m: ViewApiModel) -> Self {
        Self {
            name: m.name,
            description: m.description,
            query: m.query,
        }
    }
}

/// A materialized view writing into an optional target stream.
///
/// Retention values of `-1` on read mean "server default".
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MaterializedView {
    pub name: String,
    pub description: String,
    pub query: String,
    pub target_stream: String,
    pub retention_bytes: i64,
    pub retention_ms: i64,
    pub ttl_expression: String,
}

impl From<&MaterializedView> for ViewApiModel {
    fn from(v: &MaterializedView) -> Self {
        Self {
            name: v.name.clone(),
            description: v.description.clone(),
            query: v.query.clone(),
            materialized: true,
            target_stream: v.target_stream.clone(),
            retention_bytes: v.retention_bytes,
            retention_ms: v.retention_ms,
            ttl_expression: v.ttl_expression.clone(),
        }
    }
}

impl From<ViewApiModel> for MaterializedView {
    fn from(m: ViewApiModel) -> Self {
        Self {
            name: m.name,
            description: m.description,
            query: m.query,
            target_stream: m.target_stream,
            retention_bytes: m.retention_bytes,
            retention_ms: m.retention_ms,
            ttl_expression: m.ttl_expression,
        }
    }
}
