//! Resource lifecycle commands: create, read, update, delete, import.

use std::path::Path;

use anyhow::Result;
use serde_json::json;
use timeplus_provider::{Provider, ReadOutcome};
use tracing::info;

use super::{print_json, read_json};
use crate::cancellation::CancellationToken;
use crate::error::ImportMissing;

pub async fn create(
    provider: &Provider,
    type_name: &str,
    plan: &Path,
    cancel: &CancellationToken,
) -> Result<()> {
    let plan = read_json(plan)?;
    let state = cancel.run(provider.create_resource(type_name, plan)).await?;
    print_json(&state)
}

/// Prints `{"status": "present", "state": ...}` or `{"status": "removed"}`.
pub async fn read(
    provider: &Provider,
    type_name: &str,
    state: &Path,
    cancel: &CancellationToken,
) -> Result<()> {
    let state = read_json(state)?;
    let outcome = cancel.run(provider.read_resource(type_name, state)).await?;
    print_json(&outcome)
}

pub async fn update(
    provider: &Provider,
    type_name: &str,
    plan: &Path,
    prior: &Path,
    cancel: &CancellationToken,
) -> Result<()> {
    let plan = read_json(plan)?;
    let prior = read_json(prior)?;
    let state = cancel
        .run(provider.update_resource(type_name, plan, prior))
        .await?;
    print_json(&state)
}

pub async fn delete(
    provider: &Provider,
    type_name: &str,
    state: &Path,
    cancel: &CancellationToken,
) -> Result<()> {
    let state = read_json(state)?;
    cancel.run(provider.delete_resource(type_name, state)).await?;
    info!(type_name, "Deleted resource");
    print_json(&json!({"deleted": true}))
}

/// Seed state with the identity attribute, then refresh it.
pub async fn import(
    provider: &Provider,
    type_name: &str,
    id: &str,
    cancel: &CancellationToken,
) -> Result<()> {
    let seed = provider.import_resource_state(type_name, id)?;
    match cancel.run(provider.read_resource(type_name, seed)).await? {
        ReadOutcome::Present(state) => print_json(&state),
        ReadOutcome::Removed => Err(ImportMissing {
            type_name: type_name.to_string(),
            id: id.to_string(),
        }
        .into()),
    }
}
