//! `timeplus_alert` resource.
//!
//! Alerts exist only on Timeplus Cloud; the registry offers this resource
//! only when the provider is configured with an API key.
//!
//! `properties` is sensitive. The Service may drop secret keys when it
//! echoes them back, so read overlays the server's keys onto the value in
//! state instead of replacing it.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use timeplus_client::{Alert, TimeplusClient};
use tracing::debug;

use super::{Resource, assigned_id, label, or_empty, parse_properties, refresh_properties};
use crate::drift;
use crate::error::{Action, ProviderError, Result};
use crate::schema::{Attribute, Schema};
use crate::validators::Validator;

const ENTITY: &str = "Alert";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AlertModel {
    pub id: Option<String>,
    #[serde(default)]
    pub name: String,
    pub description: Option<String>,
    pub severity: Option<i64>,
    #[serde(default)]
    pub action: String,
    pub properties: Option<String>,
    #[serde(default)]
    pub trigger_sql: String,
    pub resolve_sql: Option<String>,
}

pub struct AlertResource;

impl AlertModel {
    fn id(&self) -> &str {
        self.id.as_deref().unwrap_or_default()
    }

    fn label(&self) -> &str {
        label(&self.name, self.id())
    }

    fn to_wire(&self) -> Result<Alert> {
        Ok(Alert {
            id: self.id().to_string(),
            name: self.name.clone(),
            description: or_empty(&self.description),
            severity: self.severity.unwrap_or_default(),
            action: self.action.clone(),
            properties: parse_properties("properties", &self.properties)?,
            trigger_sql: self.trigger_sql.clone(),
            resolve_sql: or_empty(&self.resolve_sql),
        })
    }

    pub(crate) fn refresh(mut self, server: Alert) -> Result<Self> {
        self.properties = refresh_properties(self.properties.take(), &server.properties)?;
        self.severity = drift::optional_i64(self.severity, server.severity, 0);
        self.description = drift::optional_string(&self.description, &server.description);
        self.resolve_sql = drift::optional_string(&self.resolve_sql, &server.resolve_sql);
        self.name = server.name;
        self.action = server.action;
        self.trigger_sql = server.trigger_sql;
        Ok(self)
    }
}

#[async_trait]
impl Resource for AlertResource {
    type Model = AlertModel;

    fn type_name(&self) -> &'static str {
        "alert"
    }

    fn schema(&self) -> Schema {
        Schema::new(
            "Alerts send data to external systems like sinks do, but they have two statuses: \
             triggered and resolved. An alert runs two queries in the background to detect \
             which status it should be in, and only notifies the target when the status changes.",
        )
        .with_attribute(
            "id",
            Attribute::computed_string()
                .description("The alert immutable ID, generated by Timeplus")
                .use_state_for_unknown(),
        )
        .with_attribute(
            "name",
            Attribute::required_string().description("The human-friendly name for the alert"),
        )
        .with_attribute(
            "description",
            Attribute::optional_string().description("A detailed text describes the alert"),
        )
        .with_attribute(
            "severity",
            Attribute::optional_int64().description("A number indicates how serious this alert is"),
        )
        .with_attribute(
            "action",
            Attribute::required_string()
                .description(
                    "The type of action the alert should take, i.e. the name of the target \
                     system, like 'slack' or 'email'",
                )
                .requires_replace(),
        )
        .with_attribute(
            "properties",
            Attribute::required_string()
                .description(
                    "A JSON object defines the configurations for the specific alert action. \
                     The properties could contain sensitive information like passwords.",
                )
                .sensitive()
                .validator(Validator::JsonObject),
        )
        .with_attribute(
            "trigger_sql",
            Attribute::required_string()
                .description("The query the alert uses to generate events that trigger the alert"),
        )
        .with_attribute(
            "resolve_sql",
            Attribute::optional_string()
                .description("The query the alert uses to generate events that resolve the alert"),
        )
    }

    async fn create(&self, client: &TimeplusClient, plan: AlertModel) -> Result<AlertModel> {
        let alert = plan.to_wire()?;
        let created = client
            .create_alert(&alert)
            .await
            .map_err(|e| ProviderError::transport(Action::Creating, ENTITY, &plan.name, e))?;

        let id = assigned_id(ENTITY, &plan.name, created.id)?;
        let mut state = plan;
        state.id = Some(id);
        debug!(id = ?state.id, "created a timeplus_alert resource");
        Ok(state)
    }

    async fn read(&self, client: &TimeplusClient, state: AlertModel) -> Result<AlertModel> {
        let server = client
            .get_alert(state.id())
            .await
            .map_err(|e| ProviderError::transport(Action::Reading, ENTITY, state.label(), e))?;
        state.refresh(server)
    }

    async fn update(
        &self,
        client: &TimeplusClient,
        mut plan: AlertModel,
        prior: AlertModel,
    ) -> Result<AlertModel> {
        if plan.id.is_none() {
            plan.id = prior.id;
        }
        let alert = plan.to_wire()?;
        client
            .update_alert(&alert)
            .await
            .map_err(|e| ProviderError::transport(Action::Updating, ENTITY, plan.label(), e))?;
        debug!(id = ?plan.id, "updated a timeplus_alert resource");
        Ok(plan)
    }

    async fn delete(&self, client: &TimeplusClient, state: AlertModel) -> Result<()> {
        client
            .delete_alert(state.id())
            .await
            .map_err(|e| ProviderError::transport(Action::Deleting, ENTITY, state.label(), e))
    }

    fn import_state(&self, id: &str) -> AlertModel {
        AlertModel {
            id: Some(id.to_string()),
            ..AlertModel::default()
        }
    }
}
