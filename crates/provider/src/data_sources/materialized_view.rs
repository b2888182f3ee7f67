//! `timeplus_materialized_view` data source.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use timeplus_client::TimeplusClient;

use super::DataSource;
use crate::error::{Action, ProviderError, Result};
use crate::schema::{Attribute, Schema};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MaterializedViewDataModel {
    #[serde(default)]
    pub name: String,
    pub description: Option<String>,
    pub query: Option<String>,
    pub target_stream: Option<String>,
    pub retention_bytes: Option<i64>,
    pub retention_ms: Option<i64>,
    pub history_ttl: Option<String>,
}

pub struct MaterializedViewDataSource;

#[async_trait]
impl DataSource for MaterializedViewDataSource {
    type Model = MaterializedViewDataModel;

    fn type_name(&self) -> &'static str {
        "materialized_view"
    }

    fn schema(&self) -> Schema {
        Schema::new("Look up an existing Timeplus materialized view by name.")
            .with_attribute("name", Attribute::required_string().description("The view name"))
            .with_attribute(
                "description",
                Attribute::computed_string().description("A detailed text describes the view"),
            )
            .with_attribute(
                "query",
                Attribute::computed_string().description("The query SQL of the view"),
            )
            .with_attribute(
                "target_stream",
                Attribute::computed_string()
                    .description("The stream name that the materialized view writes data to"),
            )
            .with_attribute(
                "retention_bytes",
                Attribute::computed_int64()
                    .description("The retention size threshold in bytes, -1 for the server default"),
            )
            .with_attribute(
                "retention_ms",
                Attribute::computed_int64().description(
                    "The retention period threshold in milliseconds, -1 for the server default",
                ),
            )
            .with_attribute(
                "history_ttl",
                Attribute::computed_string()
                    .description("The maximum age of data persisted in the historical store"),
            )
    }

    async fn read(
        &self,
        client: &TimeplusClient,
        config: MaterializedViewDataModel,
    ) -> Result<MaterializedViewDataModel> {
        let v = client.get_materialized_view(&config.name).await.map_err(|e| {
            ProviderError::transport(Action::Reading, "Materialized View", &config.name, e)
        })?;

        Ok(MaterializedViewDataModel {
            name: v.name,
            description: Some(v.description),
            query: Some(v.query),
            target_stream: Some(v.target_stream),
            retention_bytes: Some(v.retention_bytes),
            retention_ms: Some(v.retention_ms),
            history_ttl: Some(v.ttl_expression),
        })
    }
}
