//! `timeplus_alert` data source, looked up by id.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use timeplus_client::TimeplusClient;

use super::DataSource;
use crate::error::{Action, ProviderError, Result};
use crate::schema::{Attribute, Schema};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AlertDataModel {
    #[serde(default)]
    pub id: String,
    pub name: Option<String>,
    pub description: Option<String>,
    pub severity: Option<i64>,
    pub action: Option<String>,
    pub properties: Option<String>,
    pub trigger_sql: Option<String>,
    pub resolve_sql: Option<String>,
}

pub struct AlertDataSource;

#[async_trait]
impl DataSource for AlertDataSource {
    type Model = AlertDataModel;

    fn type_name(&self) -> &'static str {
        "alert"
    }

    fn schema(&self) -> Schema {
        Schema::new("Look up an existing Timeplus alert by id.")
            .with_attribute("id", Attribute::required_string().description("The alert ID"))
            .with_attribute(
                "name",
                Attribute::computed_string().description("The human-friendly name for the alert"),
            )
            .with_attribute(
                "description",
                Attribute::computed_string().description("A detailed text describes the alert"),
            )
            .with_attribute(
                "severity",
                Attribute::computed_int64().description("A number indicates how serious this alert is"),
            )
            .with_attribute(
                "action",
                Attribute::computed_string().description("The type of action the alert takes"),
            )
            .with_attribute(
                "properties",
                Attribute::computed_string()
                    .description("The alert action configuration as a JSON object")
                    .sensitive(),
            )
            .with_attribute(
                "trigger_sql",
                Attribute::computed_string().description("The query that triggers the alert"),
            )
            .with_attribute(
                "resolve_sql",
                Attribute::computed_string().description("The query that resolves the alert"),
            )
    }

    async fn read(&self, client: &TimeplusClient, config: AlertDataModel) -> Result<AlertDataModel> {
        let a = client
            .get_alert(&config.id)
            .await
            .map_err(|e| ProviderError::transport(Action::Reading, "Alert", &config.id, e))?;

        Ok(AlertDataModel {
            properties: Some(serde_json::to_string(&a.properties)?),
            id: a.id,
            name: Some(a.name),
            description: Some(a.description),
            severity: Some(a.severity),
            action: Some(a.action),
            trigger_sql: Some(a.trigger_sql),
            resolve_sql: Some(a.resolve_sql),
        })
    }
}
