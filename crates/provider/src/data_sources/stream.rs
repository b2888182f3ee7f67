//! `timeplus_stream` data source.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use timeplus_client::TimeplusClient;

use super::{DataSource, nested};
use crate::drift;
use crate::error::{Action, ProviderError, Result};
use crate::resources::ColumnModel;
use crate::schema::{Attribute, Schema};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StreamDataModel {
    #[serde(default)]
    pub name: String,
    pub description: Option<String>,
    pub mode: Option<String>,
    #[serde(default)]
    pub columns: Vec<ColumnModel>,
    pub retention_bytes: Option<i64>,
    pub retention_ms: Option<i64>,
    pub history_ttl: Option<String>,
}

pub struct StreamDataSource;

#[async_trait]
impl DataSource for StreamDataSource {
    type Model = StreamDataModel;

    fn type_name(&self) -> &'static str {
        "stream"
    }

    fn schema(&self) -> Schema {
        let columns = nested([
            ("name", Attribute::computed_string().description("The column name")),
            ("type", Attribute::computed_string().description("The type name of the column")),
            ("default", Attribute::computed_string().description("The default value for the column")),
            ("codec", Attribute::computed_string().description("The codec for value encoding")),
            (
                "use_as_event_time",
                Attribute::computed_bool()
                    .description("Whether this column is used as the event time column"),
            ),
            (
                "primary_key",
                Attribute::computed_bool()
                    .description("Whether this column is part of the primary key"),
            ),
        ]);

        Schema::new("Look up an existing Timeplus stream by name.")
            .with_attribute("name", Attribute::required_string().description("The stream name"))
            .with_attribute(
                "description",
                Attribute::computed_string().description("A detailed text describes the stream"),
            )
            .with_attribute("mode", Attribute::computed_string().description("The stream mode"))
            .with_attribute(
                "columns",
                Attribute::computed_list(columns).description("The columns of the stream"),
            )
            .with_attribute(
                "retention_bytes",
                Attribute::computed_int64()
                    .description("The retention size threshold in bytes of the streaming store"),
            )
            .with_attribute(
                "retention_ms",
                Attribute::computed_int64().description(
                    "The retention period threshold in milliseconds of the streaming store",
                ),
            )
            .with_attribute(
                "history_ttl",
                Attribute::computed_string()
                    .description("The maximum age of data persisted in the historical store"),
            )
    }

    async fn read(&self, client: &TimeplusClient, config: StreamDataModel) -> Result<StreamDataModel> {
        let s = client
            .get_stream(&config.name)
            .await
            .map_err(|e| ProviderError::transport(Action::Reading, "Stream", &config.name, e))?;

        let primary_keys = drift::parse_primary_key(&s.primary_key);
        let columns = s
            .columns
            .into_iter()
            .filter(|c| !drift::hide_column(&c.name, false))
            .map(|c| ColumnModel {
                codec: Some(drift::unwrap_codec(c.codec.as_deref().unwrap_or_default())),
                primary_key: primary_keys.contains(&c.name).then_some(true),
                use_as_event_time: None,
                default: Some(c.default),
                column_type: c.column_type,
                name: c.name,
            })
            .collect();

        Ok(StreamDataModel {
            name: s.name,
            description: Some(s.description),
            mode: Some(s.mode.unwrap_or_default().to_string()),
            columns,
            retention_bytes: Some(s.retention_bytes),
            retention_ms: Some(s.retention_ms),
            history_ttl: Some(s.ttl_expression),
        })
    }
}
