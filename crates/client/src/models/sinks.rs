//! Sink models.

use serde::{Deserialize, Serialize};

use super::{ApiResource, Properties};
use crate::serde_helpers::null_as_default;

/// A sink as exchanged with `/sinks`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Sink {
    /// Server-assigned identifier; empty before create.
    #[serde(default, deserialize_with = "null_as_default")]
    pub id: String,
    pub name: String,
    #[serde(
        default,
        skip_serializing_if = "String::is_empty",
        deserialize_with = "null_as_default"
    )]
    pub description: String,
    /// The sink query. Written as `sql`, returned as `query`.
    #[serde(
        rename(serialize = "sql", deserialize = "query"),
        default,
        deserialize_with = "null_as_default"
    )]
    pub sql: String,
    #[serde(rename = "type")]
    pub sink_type: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub properties: Properties,
}

impl Sink {
    pub fn with_id(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            ..Self::default()
        }
    }
}

impl ApiResource for Sink {
    fn path(&self) -> &'static str {
        "sinks"
    }

    fn id(&self) -> &str {
        &self.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_sql_written_as_sql_read_as_query() {
        let sink = Sink {
            name: "to-kafka".to_string(),
            sql: "SELECT * FROM orders".to_string(),
            sink_type: "kafka".to_string(),
            ..Sink::default()
        };
        let body = serde_json::to_value(&sink).unwrap();
        assert_eq!(body["sql"], "SELECT * FROM orders");
        assert!(body.get("query").is_none());

        let read: Sink = serde_json::from_value(json!({
            "id": "s-1",
            "name": "to-kafka",
            "type": "kafka",
            "query": "SELECT * FROM orders",
            "properties": null
        }))
        .unwrap();
        assert_eq!(read.sql, "SELECT * FROM orders");
        assert!(read.properties.is_empty());
    }
}
