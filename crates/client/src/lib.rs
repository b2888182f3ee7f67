//! Timeplus REST API client.
//!
//! This crate provides a typed client for the Timeplus `v1beta2` REST API.
//! It supports Timeplus Cloud (API key, workspace-scoped) and on-prem
//! deployments (HTTP basic auth).

mod auth;
pub mod client;
pub mod error;
pub mod metrics;
pub mod models;
mod serde_helpers;

pub mod endpoints;

#[cfg(any(test, feature = "test-utils"))]
pub mod testing;

pub use auth::{API_KEY_HEADER, AuthStrategy};
pub use client::TimeplusClient;
pub use client::builder::TimeplusClientBuilder;
pub use error::{ClientError, Result};
pub use metrics::{ErrorCategory, MetricsCollector};
pub use models::{
    Alert, ApiResource, Column, Dashboard, MaterializedView, Panel, Properties, Sink, Source,
    Stream, StreamMode, Udf, UdfArgument, UdfAuthContext, UdfAuthMethod, UdfType, View,
    ViewApiModel,
};
