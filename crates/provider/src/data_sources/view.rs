//! `timeplus_view` data source.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use timeplus_client::TimeplusClient;

use super::DataSource;
use crate::error::{Action, ProviderError, Result};
use crate::schema::{Attribute, Schema};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ViewDataModel {
    #[serde(default)]
    pub name: String,
    pub description: Option<String>,
    pub query: Option<String>,
}

pub struct ViewDataSource;

#[async_trait]
impl DataSource for ViewDataSource {
    type Model = ViewDataModel;

    fn type_name(&self) -> &'static str {
        "view"
    }

    fn schema(&self) -> Schema {
        Schema::new("Look up an existing Timeplus view by name.")
            .with_attribute("name", Attribute::required_string().description("The view name"))
            .with_attribute(
                "description",
                Attribute::computed_string().description("A detailed text describes the view"),
            )
            .with_attribute(
                "query",
                Attribute::computed_string().description("The query SQL of the view"),
            )
    }

    async fn read(&self, client: &TimeplusClient, config: ViewDataModel) -> Result<ViewDataModel> {
        let v = client
            .get_view(&config.name)
            .await
            .map_err(|e| ProviderError::transport(Action::Reading, "View", &config.name, e))?;

        Ok(ViewDataModel {
            name: v.name,
            description: Some(v.description),
            query: Some(v.query),
        })
    }
}
