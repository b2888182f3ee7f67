//! The provider registry.
//!
//! [`Provider`] is the entry point the host runtime (or the CLI driver)
//! talks to. It owns the resource and data source tables, builds the one
//! [`TimeplusClient`] a configured provider instance uses, and routes every
//! lifecycle call to the matching reconciler.
//!
//! # Invariants
//! - The client is created once by [`Provider::configure`] and never changes
//! - `alert` is offered only when the provider authenticates with an API key,
//!   because alerts exist only on Timeplus Cloud
//! - Type names are accepted with or without the `timeplus_` prefix

use std::collections::BTreeMap;
use std::sync::Arc;

use serde::Serialize;
use serde_json::Value;
use timeplus_client::TimeplusClient;
use timeplus_config::Config;
use tracing::{debug, info, warn};

use crate::data_sources::{
    AlertDataSource, DashboardDataSource, DynDataSource, JavascriptFunctionDataSource,
    MaterializedViewDataSource, RemoteFunctionDataSource, SinkDataSource, SourceDataSource,
    StreamDataSource, ViewDataSource,
};
use crate::diagnostics::Diagnostics;
use crate::error::{ProviderError, Result};
use crate::plan::{PlannedChange, plan_resource_change};
use crate::resources::{
    AlertResource, DashboardResource, DynResource, JavascriptFunctionResource,
    MaterializedViewResource, RemoteFunctionResource, SinkResource, SourceResource,
    StreamResource, ViewResource,
};
use crate::schema::Schema;

/// Prefix of every full resource and data source type name.
pub const TYPE_PREFIX: &str = "timeplus_";

/// Result of refreshing a resource.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", content = "state", rename_all = "snake_case")]
pub enum ReadOutcome {
    Present(Value),
    /// The Service no longer has the entity; the host should plan a create.
    Removed,
}

pub struct Provider {
    client: Option<Arc<TimeplusClient>>,
    resources: BTreeMap<&'static str, Box<dyn DynResource>>,
    data_sources: BTreeMap<&'static str, Box<dyn DynDataSource>>,
}

impl Default for Provider {
    fn default() -> Self {
        Self::new()
    }
}

fn short_name(type_name: &str) -> &str {
    type_name.strip_prefix(TYPE_PREFIX).unwrap_or(type_name)
}

impl Provider {
    /// An unconfigured provider offering every type available on all deployments.
    pub fn new() -> Self {
        let mut provider = Self {
            client: None,
            resources: BTreeMap::new(),
            data_sources: BTreeMap::new(),
        };

        provider.register_resource(StreamResource);
        provider.register_resource(ViewResource);
        provider.register_resource(MaterializedViewResource);
        provider.register_resource(SinkResource);
        provider.register_resource(SourceResource);
        provider.register_resource(RemoteFunctionResource);
        provider.register_resource(JavascriptFunctionResource);
        provider.register_resource(DashboardResource);

        provider.register_data_source(StreamDataSource);
        provider.register_data_source(ViewDataSource);
        provider.register_data_source(MaterializedViewDataSource);
        provider.register_data_source(SinkDataSource);
        provider.register_data_source(SourceDataSource);
        provider.register_data_source(RemoteFunctionDataSource);
        provider.register_data_source(JavascriptFunctionDataSource);
        provider.register_data_source(DashboardDataSource);

        provider
    }

    fn register_resource(&mut self, resource: impl DynResource + 'static) {
        self.resources.insert(resource.type_name(), Box::new(resource));
    }

    fn register_data_source(&mut self, data_source: impl DynDataSource + 'static) {
        self.data_sources
            .insert(data_source.type_name(), Box::new(data_source));
    }

    /// Build the transport client from `config`.
    ///
    /// # Errors
    ///
    /// Returns [`ProviderError::Client`] if the endpoint cannot be used.
    pub fn configure(&mut self, config: &Config) -> Result<()> {
        let client = TimeplusClient::builder()
            .from_config(config)
            .build()
            .map_err(ProviderError::Client)?;
        info!(
            endpoint = %config.connection.endpoint,
            workspace = %config.connection.workspace,
            cloud = config.is_cloud(),
            "Configured Timeplus provider"
        );
        self.configure_with_client(client);
        Ok(())
    }

    /// Use an already built client.
    pub fn configure_with_client(&mut self, client: TimeplusClient) {
        if client.is_api_key_auth() {
            self.register_resource(AlertResource);
            self.register_data_source(AlertDataSource);
        }
        self.client = Some(Arc::new(client));
    }

    pub fn is_configured(&self) -> bool {
        self.client.is_some()
    }

    fn client(&self) -> Result<&TimeplusClient> {
        self.client.as_deref().ok_or(ProviderError::NotConfigured)
    }

    fn resource(&self, type_name: &str) -> Result<&dyn DynResource> {
        self.resources
            .get(short_name(type_name))
            .map(Box::as_ref)
            .ok_or_else(|| ProviderError::UnknownType(type_name.to_string()))
    }

    fn data_source(&self, type_name: &str) -> Result<&dyn DynDataSource> {
        self.data_sources
            .get(short_name(type_name))
            .map(Box::as_ref)
            .ok_or_else(|| ProviderError::UnknownType(type_name.to_string()))
    }

    /// Full resource type names, e.g. `timeplus_stream`.
    pub fn resource_types(&self) -> Vec<String> {
        self.resources
            .keys()
            .map(|name| format!("{}{}", TYPE_PREFIX, name))
            .collect()
    }

    /// Full data source type names.
    pub fn data_source_types(&self) -> Vec<String> {
        self.data_sources
            .keys()
            .map(|name| format!("{}{}", TYPE_PREFIX, name))
            .collect()
    }

    pub fn resource_schema(&self, type_name: &str) -> Result<Schema> {
        Ok(self.resource(type_name)?.schema())
    }

    pub fn data_source_schema(&self, type_name: &str) -> Result<Schema> {
        Ok(self.data_source(type_name)?.schema())
    }

    pub fn validate_resource_config(&self, type_name: &str, config: &Value) -> Result<Diagnostics> {
        Ok(self.resource(type_name)?.validate_config(config))
    }

    pub fn validate_data_source_config(
        &self,
        type_name: &str,
        config: &Value,
    ) -> Result<Diagnostics> {
        Ok(self.data_source(type_name)?.validate_config(config))
    }

    /// Plan the change from `prior` state to `config`.
    ///
    /// # Errors
    ///
    /// Returns [`ProviderError::Validation`] when `config` fails validation.
    pub fn plan_resource_change(
        &self,
        type_name: &str,
        prior: Option<&Value>,
        config: Option<&Value>,
    ) -> Result<PlannedChange> {
        let resource = self.resource(type_name)?;
        if let Some(config) = config {
            let diags = resource.validate_config(config);
            if diags.has_error() {
                return Err(ProviderError::Validation(diags));
            }
        }
        let change = plan_resource_change(&resource.schema(), prior, config);
        debug!(type_name, action = ?change.action, "Planned resource change");
        Ok(change)
    }

    pub async fn create_resource(&self, type_name: &str, planned: Value) -> Result<Value> {
        let resource = self.resource(type_name)?;
        resource.create(self.client()?, planned).await
    }

    /// Refresh a resource. A 404 or 410 from the Service means the entity was
    /// removed outside the provider and yields [`ReadOutcome::Removed`].
    pub async fn read_resource(&self, type_name: &str, state: Value) -> Result<ReadOutcome> {
        let resource = self.resource(type_name)?;
        match resource.read(self.client()?, state).await {
            Ok(state) => Ok(ReadOutcome::Present(state)),
            Err(e) if e.is_not_found() => {
                warn!(type_name, error = %e, "Resource no longer exists, removing it from state");
                Ok(ReadOutcome::Removed)
            }
            Err(e) => Err(e),
        }
    }

    pub async fn update_resource(
        &self,
        type_name: &str,
        planned: Value,
        prior: Value,
    ) -> Result<Value> {
        let resource = self.resource(type_name)?;
        resource.update(self.client()?, planned, prior).await
    }

    pub async fn delete_resource(&self, type_name: &str, state: Value) -> Result<()> {
        let resource = self.resource(type_name)?;
        resource.delete(self.client()?, state).await
    }

    /// State seeded with the identity attribute `id`, ready for a read.
    pub fn import_resource_state(&self, type_name: &str, id: &str) -> Result<Value> {
        self.resource(type_name)?.import_state(id)
    }

    pub async fn read_data_source(&self, type_name: &str, config: Value) -> Result<Value> {
        let data_source = self.data_source(type_name)?;
        let diags = data_source.validate_config(&config);
        if diags.has_error() {
            return Err(ProviderError::Validation(diags));
        }
        data_source.read(self.client()?, config).await
    }
}
