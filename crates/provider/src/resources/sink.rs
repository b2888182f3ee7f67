//! `timeplus_sink` resource.
//!
//! A sink continuously writes the results of a query to an external system.
//! The sink kind (`type`) cannot change in place. `properties` may hold
//! credentials, so it is sensitive and reconciled like alert properties.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use timeplus_client::{Sink, TimeplusClient};
use tracing::debug;

use super::{Resource, assigned_id, label, or_empty, parse_properties, refresh_properties};
use crate::drift;
use crate::error::{Action, ProviderError, Result};
use crate::schema::{Attribute, Schema};
use crate::validators::Validator;

const ENTITY: &str = "Sink";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SinkModel {
    pub id: Option<String>,
    #[serde(default)]
    pub name: String,
    pub description: Option<String>,
    #[serde(rename = "type", default)]
    pub sink_type: String,
    #[serde(default)]
    pub sql: String,
    pub properties: Option<String>,
}

pub struct SinkResource;

impl SinkModel {
    fn id(&self) -> &str {
        self.id.as_deref().unwrap_or_default()
    }

    fn to_wire(&self) -> Result<Sink> {
        Ok(Sink {
            id: self.id().to_string(),
            name: self.name.clone(),
            description: or_empty(&self.description),
            sql: self.sql.clone(),
            sink_type: self.sink_type.clone(),
            properties: parse_properties("properties", &self.properties)?,
        })
    }

    pub(crate) fn refresh(mut self, server: Sink) -> Result<Self> {
        self.properties = refresh_properties(self.properties.take(), &server.properties)?;
        self.description = drift::optional_string(&self.description, &server.description);
        self.name = server.name;
        self.sink_type = server.sink_type;
        self.sql = server.sql;
        Ok(self)
    }
}

#[async_trait]
impl Resource for SinkResource {
    type Model = SinkModel;

    fn type_name(&self) -> &'static str {
        "sink"
    }

    fn schema(&self) -> Schema {
        Schema::new(
            "Sinks send the results of a streaming query to external systems such as Kafka, \
             Slack, or a webhook.",
        )
        .with_attribute(
            "id",
            Attribute::computed_string()
                .description("The sink immutable ID, generated by Timeplus")
                .use_state_for_unknown(),
        )
        .with_attribute(
            "name",
            Attribute::required_string().description("The human-friendly name for the sink"),
        )
        .with_attribute(
            "description",
            Attribute::optional_string().description("A detailed text describes the sink"),
        )
        .with_attribute(
            "type",
            Attribute::required_string()
                .description("The type of the sink, like 'kafka' or 'slack'")
                .requires_replace(),
        )
        .with_attribute(
            "sql",
            Attribute::required_string()
                .description("The query the sink uses to generate data for the target system"),
        )
        .with_attribute(
            "properties",
            Attribute::required_string()
                .description(
                    "A JSON object defines the configurations for the specific sink type. The \
                     properties could contain sensitive information like passwords.",
                )
                .sensitive()
                .validator(Validator::JsonObject),
        )
    }

    async fn create(&self, client: &TimeplusClient, plan: SinkModel) -> Result<SinkModel> {
        let sink = plan.to_wire()?;
        let created = client
            .create_sink(&sink)
            .await
            .map_err(|e| ProviderError::transport(Action::Creating, ENTITY, &plan.name, e))?;

        let id = assigned_id(ENTITY, &plan.name, created.id)?;
        let mut state = plan;
        state.id = Some(id);
        debug!(id = ?state.id, "created a timeplus_sink resource");
        Ok(state)
    }

    async fn read(&self, client: &TimeplusClient, state: SinkModel) -> Result<SinkModel> {
        let server = client.get_sink(state.id()).await.map_err(|e| {
            ProviderError::transport(Action::Reading, ENTITY, label(&state.name, state.id()), e)
        })?;
        state.refresh(server)
    }

    async fn update(
        &self,
        client: &TimeplusClient,
        mut plan: SinkModel,
        prior: SinkModel,
    ) -> Result<SinkModel> {
        if plan.id.is_none() {
            plan.id = prior.id;
        }
        let sink = plan.to_wire()?;
        client.update_sink(&sink).await.map_err(|e| {
            ProviderError::transport(Action::Updating, ENTITY, label(&plan.name, plan.id()), e)
        })?;
        debug!(id = ?plan.id, "updated a timeplus_sink resource");
        Ok(plan)
    }

    async fn delete(&self, client: &TimeplusClient, state: SinkModel) -> Result<()> {
        client.delete_sink(state.id()).await.map_err(|e| {
            ProviderError::transport(Action::Deleting, ENTITY, label(&state.name, state.id()), e)
        })
    }

    fn import_state(&self, id: &str) -> SinkModel {
        SinkModel {
            id: Some(id.to_string()),
            ..SinkModel::default()
        }
    }
}
