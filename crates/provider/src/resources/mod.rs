//! Managed resources.
//!
//! Every Timeplus entity the provider manages implements [`Resource`] over a
//! typed state model. The registry holds them as [`DynResource`] trait
//! objects, which speak plain JSON; a blanket impl bridges the two by
//! decoding plan and state values into the model, running the entity's
//! plan-time checks, and encoding the result.
//!
//! # Submodules
//! - one module per entity, each with its state model, schema, and lifecycle
//! - [`udf`]: argument and auth-header models shared by both function kinds

mod alert;
mod dashboard;
mod javascript_function;
mod materialized_view;
mod remote_function;
mod sink;
mod source;
mod stream;
pub(crate) mod udf;
mod view;

pub use alert::{AlertModel, AlertResource};
pub use dashboard::{DashboardModel, DashboardResource};
pub use javascript_function::{JavascriptFunctionModel, JavascriptFunctionResource};
pub use materialized_view::{MaterializedViewModel, MaterializedViewResource};
pub use remote_function::{RemoteFunctionModel, RemoteFunctionResource};
pub use sink::{SinkModel, SinkResource};
pub use source::{SourceModel, SourceResource};
pub use stream::{ColumnModel, StreamModel, StreamResource};
pub use udf::{ArgumentModel, AuthHeaderModel};
pub use view::{ViewModel, ViewResource};

use async_trait::async_trait;
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;
use timeplus_client::{ClientError, Properties, TimeplusClient};

use crate::diagnostics::{Diagnostic, Diagnostics};
use crate::drift;
use crate::error::{Action, ProviderError, Result};
use crate::schema::Schema;

/// Lifecycle of one managed entity over its typed state model.
#[async_trait]
pub trait Resource: Send + Sync {
    type Model: Serialize + DeserializeOwned + Send + Sync;

    /// Type name without the provider prefix, e.g. `stream`.
    fn type_name(&self) -> &'static str;

    fn schema(&self) -> Schema;

    /// Entity-specific preconditions beyond what the schema expresses.
    fn validate(&self, _model: &Self::Model) -> Diagnostics {
        Diagnostics::new()
    }

    /// Create the entity and return the state to persist.
    async fn create(&self, client: &TimeplusClient, plan: Self::Model) -> Result<Self::Model>;

    /// Refresh `state` from the Service, suppressing cosmetic drift.
    async fn read(&self, client: &TimeplusClient, state: Self::Model) -> Result<Self::Model>;

    async fn update(
        &self,
        client: &TimeplusClient,
        plan: Self::Model,
        prior: Self::Model,
    ) -> Result<Self::Model>;

    async fn delete(&self, client: &TimeplusClient, state: Self::Model) -> Result<()>;

    /// State seeded with the identity attribute only; a read fills the rest.
    fn import_state(&self, id: &str) -> Self::Model;
}

/// Object-safe JSON view of a [`Resource`], as held by the registry.
#[async_trait]
pub trait DynResource: Send + Sync {
    fn type_name(&self) -> &'static str;

    fn schema(&self) -> Schema;

    /// Schema checks, then the entity's own checks when the config decodes.
    fn validate_config(&self, config: &Value) -> Diagnostics;

    async fn create(&self, client: &TimeplusClient, plan: Value) -> Result<Value>;

    async fn read(&self, client: &TimeplusClient, state: Value) -> Result<Value>;

    async fn update(&self, client: &TimeplusClient, plan: Value, prior: Value) -> Result<Value>;

    async fn delete(&self, client: &TimeplusClient, state: Value) -> Result<()>;

    fn import_state(&self, id: &str) -> Result<Value>;
}

fn ensure_valid(diags: Diagnostics) -> Result<()> {
    if diags.has_error() {
        Err(ProviderError::Validation(diags))
    } else {
        Ok(())
    }
}

#[async_trait]
impl<R: Resource> DynResource for R {
    fn type_name(&self) -> &'static str {
        Resource::type_name(self)
    }

    fn schema(&self) -> Schema {
        Resource::schema(self)
    }

    fn validate_config(&self, config: &Value) -> Diagnostics {
        let mut diags = Resource::schema(self).validate_config(config);
        if !diags.has_error()
            && let Ok(model) = serde_json::from_value::<R::Model>(config.clone())
        {
            diags.extend(self.validate(&model));
        }
        diags
    }

    async fn create(&self, client: &TimeplusClient, plan: Value) -> Result<Value> {
        let plan: R::Model = serde_json::from_value(plan)?;
        ensure_valid(self.validate(&plan))?;
        let state = Resource::create(self, client, plan).await?;
        Ok(serde_json::to_value(state)?)
    }

    async fn read(&self, client: &TimeplusClient, state: Value) -> Result<Value> {
        let state: R::Model = serde_json::from_value(state)?;
        let state = Resource::read(self, client, state).await?;
        Ok(serde_json::to_value(state)?)
    }

    async fn update(&self, client: &TimeplusClient, plan: Value, prior: Value) -> Result<Value> {
        let plan: R::Model = serde_json::from_value(plan)?;
        let prior: R::Model = serde_json::from_value(prior)?;
        ensure_valid(self.validate(&plan))?;
        let state = Resource::update(self, client, plan, prior).await?;
        Ok(serde_json::to_value(state)?)
    }

    async fn delete(&self, client: &TimeplusClient, state: Value) -> Result<()> {
        let state: R::Model = serde_json::from_value(state)?;
        Resource::delete(self, client, state).await
    }

    fn import_state(&self, id: &str) -> Result<Value> {
        Ok(serde_json::to_value(Resource::import_state(self, id))?)
    }
}

/// Wire value of an optional string attribute; null goes out as empty.
pub(crate) fn or_empty(value: &Option<String>) -> String {
    value.clone().unwrap_or_default()
}

/// Decode a JSON-object attribute into the wire properties map.
///
/// Null and the empty string yield an empty map.
pub(crate) fn parse_properties(attribute: &str, value: &Option<String>) -> Result<Properties> {
    match value.as_deref() {
        None => Ok(Properties::new()),
        Some(s) if s.trim().is_empty() => Ok(Properties::new()),
        Some(s) => serde_json::from_str(s).map_err(|e| {
            ProviderError::Validation(
                Diagnostic::attribute_error(
                    attribute,
                    "Invalid JSON Object",
                    format!("value must be a JSON object: {}", e),
                )
                .into(),
            )
        }),
    }
}

/// Reconcile a sensitive properties attribute against the server's copy.
pub(crate) fn refresh_properties(
    state: Option<String>,
    server: &Properties,
) -> Result<Option<String>> {
    match drift::overlay_properties(state.as_deref(), server)? {
        Some(overlaid) => Ok(Some(overlaid)),
        None => Ok(state),
    }
}

/// Label used in error messages for entities keyed by a server id.
pub(crate) fn label<'a>(name: &'a str, id: &'a str) -> &'a str {
    if name.is_empty() { id } else { name }
}

/// The identifier the Service assigned on create.
///
/// An empty body echoes the request back with no id; persisting that would
/// leave an entity no later read or delete can address.
pub(crate) fn assigned_id(entity: &'static str, name: &str, id: String) -> Result<String> {
    if id.is_empty() {
        return Err(ProviderError::transport(
            Action::Creating,
            entity,
            name,
            ClientError::InvalidResponse("response did not carry an identifier".to_string()),
        ));
    }
    Ok(id)
}
