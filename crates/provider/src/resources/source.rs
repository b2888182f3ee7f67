//! `timeplus_source` resource.
//!
//! A source pulls data from an external system into a stream.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use timeplus_client::{Source, TimeplusClient};
use tracing::debug;

use super::{Resource, assigned_id, label, or_empty, parse_properties, refresh_properties};
use crate::drift;
use crate::error::{Action, ProviderError, Result};
use crate::schema::{Attribute, Schema};
use crate::validators::Validator;

const ENTITY: &str = "Source";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SourceModel {
    pub id: Option<String>,
    #[serde(default)]
    pub name: String,
    pub description: Option<String>,
    #[serde(rename = "type", default)]
    pub source_type: String,
    #[serde(default)]
    pub stream: String,
    pub properties: Option<String>,
}

pub struct SourceResource;

impl SourceModel {
    fn id(&self) -> &str {
        self.id.as_deref().unwrap_or_default()
    }

    fn to_wire(&self) -> Result<Source> {
        Ok(Source {
            id: self.id().to_string(),
            name: self.name.clone(),
            description: or_empty(&self.description),
            stream: self.stream.clone(),
            source_type: self.source_type.clone(),
            properties: parse_properties("properties", &self.properties)?,
        })
    }

    pub(crate) fn refresh(mut self, server: Source) -> Result<Self> {
        self.properties = refresh_properties(self.properties.take(), &server.properties)?;
        self.description = drift::optional_string(&self.description, &server.description);
        self.name = server.name;
        self.source_type = server.source_type;
        self.stream = server.stream;
        Ok(self)
    }
}

#[async_trait]
impl Resource for SourceResource {
    type Model = SourceModel;

    fn type_name(&self) -> &'static str {
        "source"
    }

    fn schema(&self) -> Schema {
        Schema::new("Sources continuously ingest data from external systems into a stream.")
            .with_attribute(
                "id",
                Attribute::computed_string()
                    .description("The source immutable ID, generated by Timeplus")
                    .use_state_for_unknown(),
            )
            .with_attribute(
                "name",
                Attribute::required_string().description("The human-friendly name for the source"),
            )
            .with_attribute(
                "description",
                Attribute::optional_string().description("A detailed text describes the source"),
            )
            .with_attribute(
                "type",
                Attribute::required_string()
                    .description("The type of the source, like 'kafka' or 'pulsar'")
                    .requires_replace(),
            )
            .with_attribute(
                "stream",
                Attribute::required_string()
                    .description("The name of the stream the source writes data to"),
            )
            .with_attribute(
                "properties",
                Attribute::required_string()
                    .description(
                        "A JSON object defines the configurations for the specific source type. \
                         The properties could contain sensitive information like passwords.",
                    )
                    .sensitive()
                    .validator(Validator::JsonObject),
            )
    }

    async fn create(&self, client: &TimeplusClient, plan: SourceModel) -> Result<SourceModel> {
        let source = plan.to_wire()?;
        let created = client
            .create_source(&source)
            .await
            .map_err(|e| ProviderError::transport(Action::Creating, ENTITY, &plan.name, e))?;

        let id = assigned_id(ENTITY, &plan.name, created.id)?;
        let mut state = plan;
        state.id = Some(id);
        debug!(id = ?state.id, "created a timeplus_source resource");
        Ok(state)
    }

    async fn read(&self, client: &TimeplusClient, state: SourceModel) -> Result<SourceModel> {
        let server = client.get_source(state.id()).await.map_err(|e| {
            ProviderError::transport(Action::Reading, ENTITY, label(&state.name, state.id()), e)
        })?;
        state.refresh(server)
    }

    async fn update(
        &self,
        client: &TimeplusClient,
        mut plan: SourceModel,
        prior: SourceModel,
    ) -> Result<SourceModel> {
        if plan.id.is_none() {
            plan.id = prior.id;
        }
        let source = plan.to_wire()?;
        client.update_source(&source).await.map_err(|e| {
            ProviderError::transport(Action::Updating, ENTITY, label(&plan.name, plan.id()), e)
        })?;
        debug!(id = ?plan.id, "updated a timeplus_source resource");
        Ok(plan)
    }

    async fn delete(&self, client: &TimeplusClient, state: SourceModel) -> Result<()> {
        client.delete_source(state.id()).await.map_err(|e| {
            ProviderError::transport(Action::Deleting, ENTITY, label(&state.name, state.id()), e)
        })
    }

    fn import_state(&self, id: &str) -> SourceModel {
        SourceModel {
            id: Some(id.to_string()),
            ..SourceModel::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_refresh_adopts_server_stream() {
        let prior = SourceModel {
            id: Some("src-1".to_string()),
            name: "from-kafka".to_string(),
            source_type: "kafka".to_string(),
            stream: "orders".to_string(),
            properties: Some(r#"{"topic":"t","password":"p"}"#.to_string()),
            ..SourceModel::default()
        };
        let server = Source {
            id: "src-1".to_string(),
            name: "from-kafka".to_string(),
            source_type: "kafka".to_string(),
            stream: "orders_v2".to_string(),
            properties: json!({"topic": "t"}).as_object().cloned().unwrap(),
            ..Source::default()
        };

        let state = prior.clone().refresh(server).unwrap();
        assert_eq!(state.stream, "orders_v2");
        assert_eq!(state.properties, prior.properties);
    }
}
