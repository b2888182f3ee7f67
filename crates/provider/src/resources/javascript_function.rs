//! `timeplus_javascript_function` resource.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::json;
use timeplus_client::{TimeplusClient, Udf, UdfType};
use tracing::debug;

use super::udf::{self, ArgumentModel};
use super::{Resource, or_empty};
use crate::diagnostics::{Diagnostic, Diagnostics};
use crate::drift;
use crate::error::{Action, ProviderError, Result};
use crate::schema::{Attribute, Schema};

const ENTITY: &str = "Javascript Function";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct JavascriptFunctionModel {
    #[serde(default)]
    pub name: String,
    pub description: Option<String>,
    #[serde(default)]
    pub arg: Vec<ArgumentModel>,
    #[serde(default)]
    pub return_type: String,
    #[serde(default)]
    pub source: String,
    pub is_aggregate_function: Option<bool>,
}

pub struct JavascriptFunctionResource;

impl JavascriptFunctionModel {
    fn to_wire(&self) -> Udf {
        Udf {
            name: self.name.clone(),
            description: or_empty(&self.description),
            udf_type: UdfType::Javascript,
            arguments: udf::args_to_wire(&self.arg),
            return_type: self.return_type.clone(),
            is_aggregation: self.is_aggregate_function.unwrap_or_default(),
            source: self.source.clone(),
            ..Udf::default()
        }
    }

    pub(crate) fn refresh(mut self, server: Udf) -> Result<Self> {
        udf::ensure_kind(&server, UdfType::Javascript, ENTITY, &self.name)?;

        self.description = drift::optional_string(&self.description, &server.description);
        self.is_aggregate_function = Some(server.is_aggregation);
        self.name = server.name;
        self.source = server.source;
        self.return_type = server.return_type;
        self.arg = udf::args_from_wire(server.arguments);
        Ok(self)
    }
}

#[async_trait]
impl Resource for JavascriptFunctionResource {
    type Model = JavascriptFunctionModel;

    fn type_name(&self) -> &'static str {
        "javascript_function"
    }

    fn schema(&self) -> Schema {
        Schema::new(
            "Timeplus JavaScript functions are one of the supported user defined function \
             types. They run JavaScript source inside the query engine and can be scalar or \
             aggregate functions.",
        )
        .with_attribute(
            "name",
            Attribute::required_string()
                .description("The javascript function name")
                .requires_replace(),
        )
        .with_attribute(
            "description",
            Attribute::optional_string()
                .description("A detailed text describes the javascript function"),
        )
        .with_attribute(
            "is_aggregate_function",
            Attribute::optional_bool()
                .description("Indicates if the javascript function is an aggregate function")
                .default(json!(false)),
        )
        .with_attribute(
            "source",
            Attribute::required_string().description("The javascript function source code"),
        )
        .with_attribute(
            "return_type",
            Attribute::required_string().description("The type of the function's return value"),
        )
        .with_block("arg", udf::arg_block("javascript"))
    }

    fn validate(&self, model: &JavascriptFunctionModel) -> Diagnostics {
        let mut diags = Diagnostics::new();
        if model.source.trim().is_empty() {
            diags.push(Diagnostic::attribute_error(
                "source",
                "Missing Source",
                "A javascript function requires its source code.",
            ));
        }
        diags
    }

    async fn create(
        &self,
        client: &TimeplusClient,
        mut plan: JavascriptFunctionModel,
    ) -> Result<JavascriptFunctionModel> {
        client
            .create_udf(&plan.to_wire())
            .await
            .map_err(|e| ProviderError::transport(Action::Creating, ENTITY, &plan.name, e))?;
        plan.is_aggregate_function.get_or_insert(false);
        debug!(name = %plan.name, "created a timeplus_javascript_function resource");
        Ok(plan)
    }

    async fn read(
        &self,
        client: &TimeplusClient,
        state: JavascriptFunctionModel,
    ) -> Result<JavascriptFunctionModel> {
        let server = client
            .get_udf(&state.name)
            .await
            .map_err(|e| ProviderError::transport(Action::Reading, ENTITY, &state.name, e))?;
        state.refresh(server)
    }

    async fn update(
        &self,
        client: &TimeplusClient,
        mut plan: JavascriptFunctionModel,
        _prior: JavascriptFunctionModel,
    ) -> Result<JavascriptFunctionModel> {
        client
            .update_udf(&plan.to_wire())
            .await
            .map_err(|e| ProviderError::transport(Action::Updating, ENTITY, &plan.name, e))?;
        plan.is_aggregate_function.get_or_insert(false);
        debug!(name = %plan.name, "updated a timeplus_javascript_function resource");
        Ok(plan)
    }

    async fn delete(
        &self,
        client: &TimeplusClient,
        state: JavascriptFunctionModel,
    ) -> Result<()> {
        client
            .delete_udf(&state.name)
            .await
            .map_err(|e| ProviderError::transport(Action::Deleting, ENTITY, &state.name, e))
    }

    fn import_state(&self, id: &str) -> JavascriptFunctionModel {
        JavascriptFunctionModel {
            name: id.to_string(),
            ..JavascriptFunctionModel::default()
        }
    }
}
