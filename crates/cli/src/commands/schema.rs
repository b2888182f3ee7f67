//! Commands that never contact Timeplus: type listing, schemas, validation, and planning.

use std::path::Path;

use anyhow::Result;
use serde::Serialize;
use timeplus_provider::{Provider, ProviderError};
use tracing::info;

use super::{print_json, read_json};

#[derive(Serialize)]
struct TypeListing {
    resources: Vec<String>,
    data_sources: Vec<String>,
}

pub fn resources(provider: &Provider) -> Result<()> {
    print_json(&TypeListing {
        resources: provider.resource_types(),
        data_sources: provider.data_source_types(),
    })
}

pub fn schema(provider: &Provider, type_name: &str, data_source: bool) -> Result<()> {
    let schema = if data_source {
        provider.data_source_schema(type_name)?
    } else {
        provider.resource_schema(type_name)?
    };
    print_json(&schema)
}

/// Print the diagnostics, then fail if any of them is an error.
pub fn validate(provider: &Provider, type_name: &str, config: &Path) -> Result<()> {
    let config = read_json(config)?;
    let diags = provider.validate_resource_config(type_name, &config)?;
    print_json(&diags)?;
    if diags.has_error() {
        return Err(ProviderError::Validation(diags).into());
    }
    Ok(())
}

pub fn plan(
    provider: &Provider,
    type_name: &str,
    config: Option<&Path>,
    state: Option<&Path>,
) -> Result<()> {
    let config = config.map(read_json).transpose()?;
    let prior = state.map(read_json).transpose()?;
    let change = provider.plan_resource_change(type_name, prior.as_ref(), config.as_ref())?;
    info!(type_name, action = ?change.action, "Planned change");
    print_json(&change)
}
