//! `timeplus_dashboard` resource.
//!
//! Panels are held in state as a JSON array string, usually copied from the
//! Timeplus console. On read the prior text is kept whenever it describes
//! the same panels as the server, so reformatting on the server side does
//! not show up as drift.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use timeplus_client::{Dashboard, Panel, TimeplusClient};
use tracing::debug;

use super::{Resource, assigned_id, label, or_empty};
use crate::diagnostics::Diagnostic;
use crate::drift;
use crate::error::{Action, ProviderError, Result};
use crate::schema::{Attribute, Schema};
use crate::validators::Validator;

const ENTITY: &str = "Dashboard";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DashboardModel {
    pub id: Option<String>,
    #[serde(default)]
    pub name: String,
    pub description: Option<String>,
    pub panels: Option<String>,
}

pub struct DashboardResource;

fn parse_panels(panels: &Option<String>) -> Result<Vec<Panel>> {
    match panels.as_deref() {
        None => Ok(Vec::new()),
        Some(s) if s.trim().is_empty() => Ok(Vec::new()),
        Some(s) => serde_json::from_str(s).map_err(|e| {
            ProviderError::Validation(
                Diagnostic::attribute_error("panels", "Invalid panels JSON", e.to_string()).into(),
            )
        }),
    }
}

impl DashboardModel {
    fn id(&self) -> &str {
        self.id.as_deref().unwrap_or_default()
    }

    fn to_wire(&self) -> Result<Dashboard> {
        Ok(Dashboard {
            id: self.id().to_string(),
            name: self.name.clone(),
            description: or_empty(&self.description),
            panels: parse_panels(&self.panels)?,
        })
    }

    pub(crate) fn refresh(mut self, server: Dashboard) -> Result<Self> {
        self.panels = Some(drift::json_document(self.panels.as_deref(), &server.panels)?);
        self.description = drift::optional_string(&self.description, &server.description);
        self.name = server.name;
        Ok(self)
    }
}

#[async_trait]
impl Resource for DashboardResource {
    type Model = DashboardModel;

    fn type_name(&self) -> &'static str {
        "dashboard"
    }

    fn schema(&self) -> Schema {
        Schema::new(
            "A dashboard is a set of one or more panels organized and arranged in one web page, \
             used to build visualizations for monitoring and analytics.",
        )
        .with_attribute(
            "id",
            Attribute::computed_string()
                .description("The dashboard immutable ID, generated by Timeplus")
                .use_state_for_unknown(),
        )
        .with_attribute(
            "name",
            Attribute::required_string().description("The human-friendly name for the dashboard"),
        )
        .with_attribute(
            "description",
            Attribute::optional_string().description("A detailed text describes the dashboard"),
        )
        .with_attribute(
            "panels",
            Attribute::required_string()
                .description(
                    "A list of panels defined in a JSON array. The best way to generate such an \
                     array is to copy it directly from the Timeplus console UI.",
                )
                .validator(Validator::JsonArrayOfObjects),
        )
    }

    async fn create(&self, client: &TimeplusClient, plan: DashboardModel) -> Result<DashboardModel> {
        let dashboard = plan.to_wire()?;
        let created = client
            .create_dashboard(&dashboard)
            .await
            .map_err(|e| ProviderError::transport(Action::Creating, ENTITY, &plan.name, e))?;

        let id = assigned_id(ENTITY, &plan.name, created.id)?;
        let mut state = plan;
        state.id = Some(id);
        debug!(id = ?state.id, "created a timeplus_dashboard resource");
        Ok(state)
    }

    async fn read(&self, client: &TimeplusClient, state: DashboardModel) -> Result<DashboardModel> {
        let server = client.get_dashboard(state.id()).await.map_err(|e| {
            ProviderError::transport(Action::Reading, ENTITY, label(&state.name, state.id()), e)
        })?;
        state.refresh(server)
    }

    async fn update(
        &self,
        client: &TimeplusClient,
        mut plan: DashboardModel,
        prior: DashboardModel,
    ) -> Result<DashboardModel> {
        if plan.id.is_none() {
            plan.id = prior.id;
        }
        let dashboard = plan.to_wire()?;
        client.update_dashboard(&dashboard).await.map_err(|e| {
            ProviderError::transport(Action::Updating, ENTITY, label(&plan.name, plan.id()), e)
        })?;
        debug!(id = ?plan.id, "updated a timeplus_dashboard resource");
        Ok(plan)
    }

    async fn delete(&self, client: &TimeplusClient, state: DashboardModel) -> Result<()> {
        client.delete_dashboard(state.id()).await.map_err(|e| {
            ProviderError::transport(Action::Deleting, ENTITY, label(&state.name, state.id()), e)
        })
    }

    fn import_state(&self, id: &str) -> DashboardModel {
        DashboardModel {
            id: Some(id.to_string()),
            ..DashboardModel::default()
        }
    }
}
