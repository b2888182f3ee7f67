//! Stream models.
//!
//! # What this module handles:
//! - The stream and column wire shape, including the `ttl_expression` (request)
//!   versus `ttl` (response) asymmetry
//! - The closed set of stream modes
//!
//! # What this module does NOT handle:
//! - Codec unwrapping, primary-key parsing, `_tp_time` elision (provider crate)

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::ApiResource;
use crate::serde_helpers::{i64_from_string_or_number, null_as_default, opt_parse_non_empty};

/// Storage mode of a stream.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StreamMode {
    #[default]
    Append,
    Changelog,
    ChangelogKv,
    VersionedKv,
}

impl StreamMode {
    pub const ALL: [StreamMode; 4] = [
        StreamMode::Append,
        StreamMode::Changelog,
        StreamMode::ChangelogKv,
        StreamMode::VersionedKv,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            StreamMode::Append => "append",
            StreamMode::Changelog => "changelog",
            StreamMode::ChangelogKv => "changelog_kv",
            StreamMode::VersionedKv => "versioned_kv",
        }
    }
}

impl fmt::Display for StreamMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for StreamMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|mode| mode.as_str() == s)
            .ok_or_else(|| {
                format!(
                    "invalid stream mode {:?}, must be one of: append, changelog, changelog_kv, versioned_kv",
                    s
                )
            })
    }
}

/// A stream column.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Column {
    pub name: String,
    #[serde(rename = "type")]
    pub column_type: String,
    #[serde(
        default,
        skip_serializing_if = "String::is_empty",
        deserialize_with = "null_as_default"
    )]
    pub default: String,
    #[serde(
        default,
        skip_serializing_if = "String::is_empty",
        deserialize_with = "null_as_default"
    )]
    pub compression_codec: String,
    /// Sent on create; omitted on update because the server refuses codec changes.
    /// Read back wrapped as `CODEC(<value>)`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub codec: Option<String>,
    #[serde(
        default,
        skip_serializing_if = "String::is_empty",
        deserialize_with = "null_as_default"
    )]
    pub ttl_expression: String,
    #[serde(
        default,
        skip_serializing_if = "String::is_empty",
        deserialize_with = "null_as_default"
    )]
    pub skipping_index_expression: String,
}

/// A stream as exchanged with `/streams`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Stream {
    pub name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub description: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub columns: Vec<Column>,
    /// Column used as event time; only meaningful on create.
    #[serde(
        default,
        skip_serializing_if = "String::is_empty",
        deserialize_with = "null_as_default"
    )]
    pub event_time_column: String,
    #[serde(
        default,
        skip_serializing_if = "String::is_empty",
        deserialize_with = "null_as_default"
    )]
    pub event_time_timezone: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shards: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub replication_factor: Option<u32>,
    #[serde(
        default,
        skip_serializing_if = "String::is_empty",
        deserialize_with = "null_as_default"
    )]
    pub order_by_expression: String,
    #[serde(
        default,
        skip_serializing_if = "String::is_empty",
        deserialize_with = "null_as_default"
    )]
    pub order_by_granularity: String,
    #[serde(
        default,
        skip_serializing_if = "String::is_empty",
        deserialize_with = "null_as_default"
    )]
    pub partition_by_granularity: String,
    /// Historical-store TTL expression.
    #[serde(
        rename(serialize = "ttl_expression", deserialize = "ttl"),
        default,
        skip_serializing_if = "String::is_empty",
        deserialize_with = "null_as_default"
    )]
    pub ttl_expression: String,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "opt_parse_non_empty"
    )]
    pub mode: Option<StreamMode>,
    /// Primary key expression, e.g. ``(`a`,`b`)``.
    #[serde(
        default,
        skip_serializing_if = "String::is_empty",
        deserialize_with = "null_as_default"
    )]
    pub primary_key: String,
    /// Log-store retention size; `0` on read means unset.
    #[serde(
        rename = "logstore_retention_bytes",
        default,
        skip_serializing_if = "is_zero",
        deserialize_with = "i64_from_string_or_number"
    )]
    pub retention_bytes: i64,
    /// Log-store retention time; `0` on read means unset.
    #[serde(
        rename = "logstore_retention_ms",
        default,
        skip_serializing_if = "is_zero",
        deserialize_with = "i64_from_string_or_number"
    )]
    pub retention_ms: i64,
}

fn is_zero(v: &i64) -> bool {
    *v == 0
}

impl Stream {
    /// A stream value addressing `name`, for get and delete.
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }
}

impl ApiResource for Stream {
    fn path(&self) -> &'static str {
        "streams"
    }

    fn id(&self) -> &str {
        &self.name
    }
}
