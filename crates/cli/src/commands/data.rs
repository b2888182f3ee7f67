//! Data source reads.

use std::path::Path;

use anyhow::Result;
use timeplus_provider::Provider;

use super::{print_json, read_json};
use crate::cancellation::CancellationToken;

pub async fn run(
    provider: &Provider,
    type_name: &str,
    config: &Path,
    cancel: &CancellationToken,
) -> Result<()> {
    let config = read_json(config)?;
    let state = cancel.run(provider.read_data_source(type_name, config)).await?;
    print_json(&state)
}
