//! `timeplus_source` data source, looked up by id.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use timeplus_client::TimeplusClient;

use super::DataSource;
use crate::error::{Action, ProviderError, Result};
use crate::schema::{Attribute, Schema};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SourceDataModel {
    #[serde(default)]
    pub id: String,
    pub name: Option<String>,
    pub description: Option<String>,
    #[serde(rename = "type")]
    pub source_type: Option<String>,
    pub stream: Option<String>,
    pub properties: Option<String>,
}

pub struct SourceDataSource;

#[async_trait]
impl DataSource for SourceDataSource {
    type Model = SourceDataModel;

    fn type_name(&self) -> &'static str {
        "source"
    }

    fn schema(&self) -> Schema {
        Schema::new("Look up an existing Timeplus source by id.")
            .with_attribute("id", Attribute::required_string().description("The source ID"))
            .with_attribute("name", Attribute::computed_string().description("The source name"))
            .with_attribute(
                "description",
                Attribute::computed_string().description("A detailed text describes the source"),
            )
            .with_attribute("type", Attribute::computed_string().description("The source type"))
            .with_attribute(
                "stream",
                Attribute::computed_string().description("The stream the source writes to"),
            )
            .with_attribute(
                "properties",
                Attribute::computed_string()
                    .description("The source configuration as a JSON object")
                    .sensitive(),
            )
    }

    async fn read(
        &self,
        client: &TimeplusClient,
        config: SourceDataModel,
    ) -> Result<SourceDataModel> {
        let s = client
            .get_source(&config.id)
            .await
            .map_err(|e| ProviderError::transport(Action::Reading, "Source", &config.id, e))?;

        Ok(SourceDataModel {
            properties: Some(serde_json::to_string(&s.properties)?),
            id: s.id,
            name: Some(s.name),
            description: Some(s.description),
            source_type: Some(s.source_type),
            stream: Some(s.stream),
        })
    }
}
