//! `timeplus_dashboard` data source, looked up by id.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use timeplus_client::TimeplusClient;

use super::DataSource;
use crate::error::{Action, ProviderError, Result};
use crate::schema::{Attribute, Schema};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DashboardDataModel {
    #[serde(default)]
    pub id: String,
    pub name: Option<String>,
    pub description: Option<String>,
    pub panels: Option<String>,
}

pub struct DashboardDataSource;

#[async_trait]
impl DataSource for DashboardDataSource {
    type Model = DashboardDataModel;

    fn type_name(&self) -> &'static str {
        "dashboard"
    }

    fn schema(&self) -> Schema {
        Schema::new("Look up an existing Timeplus dashboard by id.")
            .with_attribute("id", Attribute::required_string().description("The dashboard ID"))
            .with_attribute(
                "name",
                Attribute::computed_string().description("The human-friendly name for the dashboard"),
            )
            .with_attribute(
                "description",
                Attribute::computed_string().description("A detailed text describes the dashboard"),
            )
            .with_attribute(
                "panels",
                Attribute::computed_string().description("The dashboard panels as a JSON array"),
            )
    }

    async fn read(
        &self,
        client: &TimeplusClient,
        config: DashboardDataModel,
    ) -> Result<DashboardDataModel> {
        let d = client
            .get_dashboard(&config.id)
            .await
            .map_err(|e| ProviderError::transport(Action::Reading, "Dashboard", &config.id, e))?;

        Ok(DashboardDataModel {
            panels: Some(serde_json::to_string(&d.panels)?),
            id: d.id,
            name: Some(d.name),
            description: Some(d.description),
        })
    }
}
