//! `timeplus_sink` data source, looked up by id.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use timeplus_client::TimeplusClient;

use super::DataSource;
use crate::error::{Action, ProviderError, Result};
use crate::schema::{Attribute, Schema};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SinkDataModel {
    #[serde(default)]
    pub id: String,
    pub name: Option<String>,
    pub description: Option<String>,
    #[serde(rename = "type")]
    pub sink_type: Option<String>,
    pub sql: Option<String>,
    pub properties: Option<String>,
}

pub struct SinkDataSource;

#[async_trait]
impl DataSource for SinkDataSource {
    type Model = SinkDataModel;

    fn type_name(&self) -> &'static str {
        "sink"
    }

    fn schema(&self) -> Schema {
        Schema::new("Look up an existing Timeplus sink by id.")
            .with_attribute("id", Attribute::required_string().description("The sink ID"))
            .with_attribute("name", Attribute::computed_string().description("The sink name"))
            .with_attribute(
                "description",
                Attribute::computed_string().description("A detailed text describes the sink"),
            )
            .with_attribute("type", Attribute::computed_string().description("The sink type"))
            .with_attribute(
                "sql",
                Attribute::computed_string().description("The query the sink runs"),
            )
            .with_attribute(
                "properties",
                Attribute::computed_string()
                    .description("The sink configuration as a JSON object")
                    .sensitive(),
            )
    }

    async fn read(&self, client: &TimeplusClient, config: SinkDataModel) -> Result<SinkDataModel> {
        let s = client
            .get_sink(&config.id)
            .await
            .map_err(|e| ProviderError::transport(Action::Reading, "Sink", &config.id, e))?;

        Ok(SinkDataModel {
            properties: Some(serde_json::to_string(&s.properties)?),
            id: s.id,
            name: Some(s.name),
            description: Some(s.description),
            sink_type: Some(s.sink_type),
            sql: Some(s.sql),
        })
    }
}
