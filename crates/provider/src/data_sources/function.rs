//! `timeplus_remote_function` and `timeplus_javascript_function` data sources.
//!
//! Both look a function up by name in `/udfs` and refuse one of the other kind.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use timeplus_client::{TimeplusClient, UdfType};

use super::{DataSource, nested};
use crate::error::{Action, ProviderError, Result};
use crate::resources::udf::{self, ArgumentModel, AuthHeaderModel};
use crate::schema::{Attribute, Schema};

fn arguments_attribute() -> Attribute {
    Attribute::computed_list(nested([
        ("name", Attribute::computed_string().description("The argument name")),
        ("type", Attribute::computed_string().description("The argument type")),
    ]))
    .description("The arguments of the function, in order")
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RemoteFunctionDataModel {
    #[serde(default)]
    pub name: String,
    pub description: Option<String>,
    pub url: Option<String>,
    pub auth_header: Option<AuthHeaderModel>,
    pub return_type: Option<String>,
    #[serde(default)]
    pub arguments: Vec<ArgumentModel>,
}

pub struct RemoteFunctionDataSource;

#[async_trait]
impl DataSource for RemoteFunctionDataSource {
    type Model = RemoteFunctionDataModel;

    fn type_name(&self) -> &'static str {
        "remote_function"
    }

    fn schema(&self) -> Schema {
        let header = nested([
            ("name", Attribute::computed_string().description("The HTTP header name")),
            (
                "value",
                Attribute::computed_string()
                    .description("The value for the header")
                    .sensitive(),
            ),
        ]);

        Schema::new("Look up an existing Timeplus remote function by name.")
            .with_attribute(
                "name",
                Attribute::required_string().description("The remote function name"),
            )
            .with_attribute(
                "description",
                Attribute::computed_string()
                    .description("A detailed text describes the remote function"),
            )
            .with_attribute(
                "url",
                Attribute::computed_string()
                    .description("The HTTP endpoint to be used to call the function"),
            )
            .with_attribute(
                "auth_header",
                Attribute::computed_object(header)
                    .description("The HTTP header used to authenticate calls"),
            )
            .with_attribute(
                "return_type",
                Attribute::computed_string().description("The type of the function's return value"),
            )
            .with_attribute("arguments", arguments_attribute())
    }

    async fn read(
        &self,
        client: &TimeplusClient,
        config: RemoteFunctionDataModel,
    ) -> Result<RemoteFunctionDataModel> {
        let entity = "Remote Function";
        let f = client
            .get_udf(&config.name)
            .await
            .map_err(|e| ProviderError::transport(Action::Reading, entity, &config.name, e))?;
        udf::ensure_kind(&f, UdfType::Remote, entity, &config.name)?;

        let auth_header = f.uses_auth_header().then(|| {
            let context = f.auth_context.clone().unwrap_or_default();
            AuthHeaderModel {
                name: context.key_name,
                value: context.key_value,
            }
        });

        Ok(RemoteFunctionDataModel {
            auth_header,
            name: f.name,
            description: Some(f.description),
            url: Some(f.url),
            return_type: Some(f.return_type),
            arguments: udf::args_from_wire(f.arguments),
        })
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct JavascriptFunctionDataModel {
    #[serde(default)]
    pub name: String,
    pub description: Option<String>,
    pub is_aggregate_function: Option<bool>,
    pub source: Option<String>,
    pub return_type: Option<String>,
    #[serde(default)]
    pub arg: Vec<ArgumentModel>,
}

pub struct JavascriptFunctionDataSource;

#[async_trait]
impl DataSource for JavascriptFunctionDataSource {
    type Model = JavascriptFunctionDataModel;

    fn type_name(&self) -> &'static str {
        "javascript_function"
    }

    fn schema(&self) -> Schema {
        Schema::new("Look up an existing Timeplus javascript function by name.")
            .with_attribute(
                "name",
                Attribute::required_string().description("The javascript function name"),
            )
            .with_attribute(
                "description",
                Attribute::computed_string()
                    .description("A detailed text describes the javascript function"),
            )
            .with_attribute(
                "is_aggregate_function",
                Attribute::computed_bool()
                    .description("Indicates if the javascript function is an aggregate function"),
            )
            .with_attribute(
                "source",
                Attribute::computed_string().description("The javascript function source code"),
            )
            .with_attribute(
                "return_type",
                Attribute::computed_string().description("The type of the function's return value"),
            )
            .with_attribute("arg", arguments_attribute())
    }

    async fn read(
        &self,
        client: &TimeplusClient,
        config: JavascriptFunctionDataModel,
    ) -> Result<JavascriptFunctionDataModel> {
        let entity = "Javascript Function";
        let f = client
            .get_udf(&config.name)
            .await
            .map_err(|e| ProviderError::transport(Action::Reading, entity, &config.name, e))?;
        udf::ensure_kind(&f, UdfType::Javascript, entity, &config.name)?;

        Ok(JavascriptFunctionDataModel {
            name: f.name,
            description: Some(f.description),
            is_aggregate_function: Some(f.is_aggregation),
            source: Some(f.source),
            return_type: Some(f.return_type),
            arg: udf::args_from_wire(f.arguments),
        })
    }
}
