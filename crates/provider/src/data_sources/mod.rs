//! Read-only data sources.
//!
//! Each data source looks one entity up by its identity attribute and
//! reports the server's representation. Unlike resources there is no prior
//! state to protect, so values are reported as the Service returns them,
//! apart from the same shaping resources apply (codec unwrapping, the
//! hidden `_tp_time` column, primary key flags).

mod alert;
mod dashboard;
mod function;
mod materialized_view;
mod sink;
mod source;
mod stream;
mod view;

pub use alert::{AlertDataSource, AlertDataModel};
pub use dashboard::{DashboardDataModel, DashboardDataSource};
pub use function::{
    JavascriptFunctionDataModel, JavascriptFunctionDataSource, RemoteFunctionDataModel,
    RemoteFunctionDataSource,
};
pub use materialized_view::{MaterializedViewDataModel, MaterializedViewDataSource};
pub use sink::{SinkDataModel, SinkDataSource};
pub use source::{SourceDataModel, SourceDataSource};
pub use stream::{StreamDataModel, StreamDataSource};
pub use view::{ViewDataModel, ViewDataSource};

use std::collections::BTreeMap;

use async_trait::async_trait;
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;
use timeplus_client::TimeplusClient;

use crate::diagnostics::Diagnostics;
use crate::error::Result;
use crate::schema::{Attribute, Schema};

#[async_trait]
pub trait DataSource: Send + Sync {
    type Model: Serialize + DeserializeOwned + Send + Sync;

    /// Type name without the provider prefix, e.g. `stream`.
    fn type_name(&self) -> &'static str;

    fn schema(&self) -> Schema;

    /// Look the entity up by the identity attribute set in `config`.
    async fn read(&self, client: &TimeplusClient, config: Self::Model) -> Result<Self::Model>;
}

/// Object-safe JSON view of a [`DataSource`], as held by the registry.
#[async_trait]
pub trait DynDataSource: Send + Sync {
    fn type_name(&self) -> &'static str;

    fn schema(&self) -> Schema;

    fn validate_config(&self, config: &Value) -> Diagnostics;

    async fn read(&self, client: &TimeplusClient, config: Value) -> Result<Value>;
}

#[async_trait]
impl<D: DataSource> DynDataSource for D {
    fn type_name(&self) -> &'static str {
        DataSource::type_name(self)
    }

    fn schema(&self) -> Schema {
        DataSource::schema(self)
    }

    fn validate_config(&self, config: &Value) -> Diagnostics {
        DataSource::schema(self).validate_config(config)
    }

    async fn read(&self, client: &TimeplusClient, config: Value) -> Result<Value> {
        let config: D::Model = serde_json::from_value(config)?;
        let state = DataSource::read(self, client, config).await?;
        Ok(serde_json::to_value(state)?)
    }
}

/// Attribute set of a computed nested object, built from `(name, attribute)` pairs.
pub(crate) fn nested<const N: usize>(fields: [(&str, Attribute); N]) -> BTreeMap<String, Attribute> {
    fields
        .into_iter()
        .map(|(name, attr)| (name.to_string(), attr))
        .collect()
}
