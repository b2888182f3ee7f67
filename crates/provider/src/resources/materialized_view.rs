//! `timeplus_materialized_view` resource.
//!
//! The query and target stream cannot change in place; both force a replace.
//! Retention values of `-1` from the Service mean "server default" and are
//! kept null in state when the user never set them.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use timeplus_client::{MaterializedView, TimeplusClient};
use tracing::debug;

use super::{Resource, or_empty};
use crate::drift::{self, VIEW_RETENTION_UNSET};
use crate::error::{Action, ProviderError, Result};
use crate::schema::{Attribute, Schema};

const ENTITY: &str = "Materialized View";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MaterializedViewModel {
    #[serde(default)]
    pub name: String,
    pub description: Option<String>,
    #[serde(default)]
    pub query: String,
    pub target_stream: Option<String>,
    pub retention_size: Option<i64>,
    pub retention_period: Option<i64>,
    pub historical_data_ttl: Option<String>,
}

pub struct MaterializedViewResource;

impl MaterializedViewModel {
    fn to_wire(&self) -> MaterializedView {
        MaterializedView {
            name: self.name.clone(),
            description: or_empty(&self.description),
            query: self.query.clone(),
            target_stream: or_empty(&self.target_stream),
            retention_bytes: self.retention_size.unwrap_or_default(),
            retention_ms: self.retention_period.unwrap_or_default(),
            ttl_expression: or_empty(&self.historical_data_ttl),
        }
    }

    fn absorb_retention(&mut self, server: &MaterializedView) {
        self.retention_size =
            drift::optional_i64(self.retention_size, server.retention_bytes, VIEW_RETENTION_UNSET);
        self.retention_period =
            drift::optional_i64(self.retention_period, server.retention_ms, VIEW_RETENTION_UNSET);
    }

    pub(crate) fn refresh(mut self, server: MaterializedView) -> Self {
        self.absorb_retention(&server);
        self.description = drift::optional_string(&self.description, &server.description);
        self.target_stream = drift::optional_string(&self.target_stream, &server.target_stream);
        self.historical_data_ttl =
            drift::ttl_expression(&self.historical_data_ttl, &server.ttl_expression);
        self.name = server.name;
        self.query = server.query;
        self
    }
}

#[async_trait]
impl Resource for MaterializedViewResource {
    type Model = MaterializedViewModel;

    fn type_name(&self) -> &'static str {
        "materialized_view"
    }

    fn schema(&self) -> Schema {
        Schema::new(
            "Timeplus materialized views are special views that persist their data. Once \
             created, a materialized view keeps running in the background and continuously \
             writes the query results to the underlying storage system.",
        )
        .with_attribute(
            "name",
            Attribute::required_string()
                .description("The view name")
                .requires_replace(),
        )
        .with_attribute(
            "description",
            Attribute::optional_string().description("A detailed text describes the view"),
        )
        .with_attribute(
            "query",
            Attribute::required_string()
                .description("The query SQL of the view")
                .requires_replace(),
        )
        .with_attribute(
            "target_stream",
            Attribute::optional_string()
                .description("The optional stream name that the materialized view writes data to")
                .requires_replace(),
        )
        .with_attribute(
            "retention_size",
            Attribute::optional_computed_int64().description(
                "The retention size threshold in bytes indicates how much data could be kept \
                 in the streaming store",
            ),
        )
        .with_attribute(
            "retention_period",
            Attribute::optional_computed_int64().description(
                "The retention period threshold in milliseconds indicates how long data could \
                 be kept in the streaming store",
            ),
        )
        .with_attribute(
            "historical_data_ttl",
            Attribute::optional_string().description(
                "A SQL expression defines the maximum age of data that are persisted in the \
                 historical store",
            ),
        )
    }

    async fn create(
        &self,
        client: &TimeplusClient,
        plan: MaterializedViewModel,
    ) -> Result<MaterializedViewModel> {
        let created = client
            .create_materialized_view(&plan.to_wire())
            .await
            .map_err(|e| ProviderError::transport(Action::Creating, ENTITY, &plan.name, e))?;

        let mut state = plan;
        state.absorb_retention(&created);
        debug!(name = %state.name, "created a timeplus_materialized_view resource");
        Ok(state)
    }

    async fn read(
        &self,
        client: &TimeplusClient,
        state: MaterializedViewModel,
    ) -> Result<MaterializedViewModel> {
        let server = client
            .get_materialized_view(&state.name)
            .await
            .map_err(|e| ProviderError::transport(Action::Reading, ENTITY, &state.name, e))?;
        Ok(state.refresh(server))
    }

    async fn update(
        &self,
        client: &TimeplusClient,
        plan: MaterializedViewModel,
        _prior: MaterializedViewModel,
    ) -> Result<MaterializedViewModel> {
        let updated = client
            .update_materialized_view(&plan.to_wire())
            .await
            .map_err(|e| ProviderError::transport(Action::Updating, ENTITY, &plan.name, e))?;

        let mut state = plan;
        state.absorb_retention(&updated);
        debug!(name = %state.name, "updated a timeplus_materialized_view resource");
        Ok(state)
    }

    async fn delete(&self, client: &TimeplusClient, state: MaterializedViewModel) -> Result<()> {
        client
            .delete_materialized_view(&state.name)
            .await
            .map_err(|e| ProviderError::transport(Action::Deleting, ENTITY, &state.name, e))
    }

    fn import_state(&self, id: &str) -> MaterializedViewModel {
        MaterializedViewModel {
            name: id.to_string(),
            ..MaterializedViewModel::default()
        }
    }
}
