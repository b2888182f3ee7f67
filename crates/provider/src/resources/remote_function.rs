//! `timeplus_remote_function` resource.
//!
//! A remote function registers an HTTP webhook that queries can call like a
//! built-in function.

use std::collections::BTreeMap;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use timeplus_client::{TimeplusClient, Udf, UdfAuthContext, UdfAuthMethod, UdfType};
use tracing::debug;

use super::udf::{self, ArgumentModel, AuthHeaderModel};
use super::{Resource, or_empty};
use crate::diagnostics::{Diagnostic, Diagnostics};
use crate::drift;
use crate::error::{Action, ProviderError, Result};
use crate::schema::{Attribute, Schema};
use crate::validators::{self, Validator};

const ENTITY: &str = "Remote Function";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RemoteFunctionModel {
    #[serde(default)]
    pub name: String,
    pub description: Option<String>,
    #[serde(default)]
    pub arg: Vec<ArgumentModel>,
    #[serde(default)]
    pub return_type: String,
    #[serde(default)]
    pub url: String,
    pub auth_header: Option<AuthHeaderModel>,
}

pub struct RemoteFunctionResource;

impl RemoteFunctionModel {
    fn to_wire(&self) -> Udf {
        let (auth_method, auth_context) = match &self.auth_header {
            Some(header) => (
                Some(UdfAuthMethod::AuthHeader),
                Some(UdfAuthContext {
                    key_name: header.name.clone(),
                    key_value: header.value.clone(),
                }),
            ),
            None => (Some(UdfAuthMethod::None), None),
        };

        Udf {
            name: self.name.clone(),
            description: or_empty(&self.description),
            udf_type: UdfType::Remote,
            arguments: udf::args_to_wire(&self.arg),
            return_type: self.return_type.clone(),
            url: self.url.clone(),
            auth_method,
            auth_context,
            ..Udf::default()
        }
    }

    pub(crate) fn refresh(mut self, server: Udf) -> Result<Self> {
        udf::ensure_kind(&server, UdfType::Remote, ENTITY, &self.name)?;

        if drift::hide_auth_header(self.auth_header.is_some(), server.auth_method) {
            self.auth_header = None;
        } else {
            let context = server.auth_context.unwrap_or_default();
            self.auth_header = Some(AuthHeaderModel {
                name: context.key_name,
                value: context.key_value,
            });
        }

        self.description = drift::optional_string(&self.description, &server.description);
        self.name = server.name;
        self.url = server.url;
        self.return_type = server.return_type;
        self.arg = udf::args_from_wire(server.arguments);
        Ok(self)
    }
}

#[async_trait]
impl Resource for RemoteFunctionResource {
    type Model = RemoteFunctionModel;

    fn type_name(&self) -> &'static str {
        "remote_function"
    }

    fn schema(&self) -> Schema {
        let header = BTreeMap::from([
            (
                "name".to_string(),
                Attribute::required_string().description("The HTTP header name"),
            ),
            (
                "value".to_string(),
                Attribute::required_string()
                    .description("The value for the header")
                    .sensitive(),
            ),
        ]);

        Schema::new(
            "Timeplus remote functions are one of the supported user defined function types. \
             Remote functions allow users to register an HTTP webhook as a function which can \
             be called in queries.",
        )
        .with_attribute(
            "name",
            Attribute::required_string()
                .description("The remote function name")
                .requires_replace(),
        )
        .with_attribute(
            "description",
            Attribute::optional_string()
                .description("A detailed text describes the remote function"),
        )
        .with_attribute(
            "url",
            Attribute::required_string()
                .description("The HTTP endpoint to be used to call the function")
                .validator(Validator::Url),
        )
        .with_attribute(
            "auth_header",
            Attribute::optional_object(header).description(
                "The HTTP header and its value to be used as an authentication means to call \
                 the function",
            ),
        )
        .with_attribute(
            "return_type",
            Attribute::required_string().description("The type of the function's return value"),
        )
        .with_block("arg", udf::arg_block("remote"))
    }

    fn validate(&self, model: &RemoteFunctionModel) -> Diagnostics {
        let mut diags = Diagnostics::new();
        if model.url.is_empty() {
            diags.push(Diagnostic::attribute_error(
                "url",
                "Missing URL",
                "A remote function requires the URL of its HTTP endpoint.",
            ));
        } else if let Some(diag) = validators::url("url", Some(model.url.as_str())) {
            diags.push(diag);
        }
        diags
    }

    async fn create(
        &self,
        client: &TimeplusClient,
        plan: RemoteFunctionModel,
    ) -> Result<RemoteFunctionModel> {
        client
            .create_udf(&plan.to_wire())
            .await
            .map_err(|e| ProviderError::transport(Action::Creating, ENTITY, &plan.name, e))?;
        debug!(name = %plan.name, "created a timeplus_remote_function resource");
        Ok(plan)
    }

    async fn read(
        &self,
        client: &TimeplusClient,
        state: RemoteFunctionModel,
    ) -> Result<RemoteFunctionModel> {
        let server = client
            .get_udf(&state.name)
            .await
            .map_err(|e| ProviderError::transport(Action::Reading, ENTITY, &state.name, e))?;
        state.refresh(server)
    }

    async fn update(
        &self,
        client: &TimeplusClient,
        plan: RemoteFunctionModel,
        _prior: RemoteFunctionModel,
    ) -> Result<RemoteFunctionModel> {
        client
            .update_udf(&plan.to_wire())
            .await
            .map_err(|e| ProviderError::transport(Action::Updating, ENTITY, &plan.name, e))?;
        debug!(name = %plan.name, "updated a timeplus_remote_function resource");
        Ok(plan)
    }

    async fn delete(&self, client: &TimeplusClient, state: RemoteFunctionModel) -> Result<()> {
        client
            .delete_udf(&state.name)
            .await
            .map_err(|e| ProviderError::transport(Action::Deleting, ENTITY, &state.name, e))
    }

    fn import_state(&self, id: &str) -> RemoteFunctionModel {
        RemoteFunctionModel {
            name: id.to_string(),
            ..RemoteFunctionModel::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state() -> RemoteFunctionModel {
        RemoteFunctionModel {
            name: "ip_lookup".to_string(),
            url: "https://udf.example/lookup".to_string(),
            return_type: "string".to_string(),
            arg: vec![ArgumentModel {
                name: "ip".to_string(),
                arg_type: "string".to_string(),
            }],
            ..RemoteFunctionModel::default()
        }
    }

    #[test]
    fn test_validate_requires_url() {
        let mut model = state();
        model.url = String::new();
        let diags = RemoteFunctionResource.validate(&model);
        assert_eq!(diags.for_attribute("url").unwrap().summary, "Missing URL");

        model.url = "not a url".to_string();
        assert!(RemoteFunctionResource.validate(&model).has_error());
        assert!(!RemoteFunctionResource.validate(&state()).has_error());
    }

    #[test]
    fn test_to_wire_without_header_sends_none() {
        let wire = serde_json::to_value(state().to_wire()).unwrap();
        assert_eq!(wire["type"], "remote");
        assert_eq!(wire["auth_method"], "none");
        assert!(wire.get("auth_context").is_none());
    }

    #[test]
    fn test_refresh_hides_empty_auth_method() {
        let mut server = state().to_wire();
        server.auth_method = None;

        let refreshed = state().refresh(server).unwrap();
        assert_eq!(refreshed, state());
    }

    #[test]
    fn test_refresh_reports_server_header() {
        let mut server = state().to_wire();
        server.auth_method = Some(UdfAuthMethod::AuthHeader);
        server.auth_context = Some(UdfAuthContext {
            key_name: "X-Token".to_string(),
            key_value: "t".to_string(),
        });

        let refreshed = state().refresh(server).unwrap();
        assert_eq!(
            refreshed.auth_header,
            Some(AuthHeaderModel {
                name: "X-Token".to_string(),
                value: "t".to_string(),
            })
        );
    }
}
