//! `timeplus_view` resource.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use timeplus_client::{TimeplusClient, View};
use tracing::debug;

use super::{Resource, or_empty};
use crate::drift;
use crate::error::{Action, ProviderError, Result};
use crate::schema::{Attribute, Schema};

const ENTITY: &str = "View";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ViewModel {
    #[serde(default)]
    pub name: String,
    pub description: Option<String>,
    #[serde(default)]
    pub query: String,
}

pub struct ViewResource;

impl ViewModel {
    fn to_wire(&self) -> View {
        View {
            name: self.name.clone(),
            description: or_empty(&self.description),
            query: self.query.clone(),
        }
    }

    pub(crate) fn refresh(mut self, server: View) -> Self {
        self.name = server.name;
        self.query = server.query;
        self.description = drift::optional_string(&self.description, &server.description);
        self
    }
}

#[async_trait]
impl Resource for ViewResource {
    type Model = ViewModel;

    fn type_name(&self) -> &'static str {
        "view"
    }

    fn schema(&self) -> Schema {
        Schema::new(
            "Timeplus views are named queries. When you create a view, you are essentially \
             creating a query that can be referenced by other queries.",
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
            Attribute::required_string().description("The query SQL of the view"),
        )
    }

    async fn create(&self, client: &TimeplusClient, plan: ViewModel) -> Result<ViewModel> {
        client
            .create_view(&plan.to_wire())
            .await
            .map_err(|e| ProviderError::transport(Action::Creating, ENTITY, &plan.name, e))?;
        debug!(name = %plan.name, "created a timeplus_view resource");
        Ok(plan)
    }

    async fn read(&self, client: &TimeplusClient, state: ViewModel) -> Result<ViewModel> {
        let server = client
            .get_view(&state.name)
            .await
            .map_err(|e| ProviderError::transport(Action::Reading, ENTITY, &state.name, e))?;
        Ok(state.refresh(server))
    }

    async fn update(
        &self,
        client: &TimeplusClient,
        plan: ViewModel,
        _prior: ViewModel,
    ) -> Result<ViewModel> {
        client
            .update_view(&plan.to_wire())
            .await
            .map_err(|e| ProviderError::transport(Action::Updating, ENTITY, &plan.name, e))?;
        debug!(name = %plan.name, "updated a timeplus_view resource");
        Ok(plan)
    }

    async fn delete(&self, client: &TimeplusClient, state: ViewModel) -> Result<()> {
        client
            .delete_view(&state.name)
            .await
            .map_err(|e| ProviderError::transport(Action::Deleting, ENTITY, &state.name, e))
    }

    fn import_state(&self, id: &str) -> ViewModel {
        ViewModel {
            name: id.to_string(),
            ..ViewModel::default()
        }
    }
}
