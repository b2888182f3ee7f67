//! Wire models for the Timeplus REST API.
//!
//! Types are organized by collection in submodules and re-exported here.
//! Field names follow the server's JSON; where the request and response use
//! different names for the same value, the model carries a single field with
//! split serde names.

pub mod alerts;
pub mod dashboards;
mod resource;
pub mod sinks;
pub mod sources;
pub mod streams;
pub mod udfs;
pub mod views;

pub use alerts::Alert;
pub use dashboards::{Dashboard, Panel};
pub use resource::ApiResource;
pub use sinks::Sink;
pub use sources::Source;
pub use streams::{Column, Stream, StreamMode};
pub use udfs::{Udf, UdfArgument, UdfAuthContext, UdfAuthMethod, UdfType};
pub use views::{MaterializedView, View, ViewApiModel};

/// Free-form `string → JSON` properties map used by sinks, sources, and alerts.
pub type Properties = serde_json::Map<String, serde_json::Value>;
