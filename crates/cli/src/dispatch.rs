//! Command dispatch logic.
//!
//! Responsibilities:
//! - Route parsed CLI arguments to the matching command handler.
//! - Give each handler a provider configured the way it needs: offline
//!   commands tolerate missing credentials, lifecycle commands do not.
//!
//! Invariants:
//! - Every lifecycle call that reaches Timeplus runs under the cancellation token.

use anyhow::Result;

use crate::args::{Cli, Commands};
use crate::cancellation::CancellationToken;
use crate::commands;
use crate::config_context::ConfigCommandContext;

pub(crate) async fn run_command(
    cli: Cli,
    config: ConfigCommandContext,
    cancel: &CancellationToken,
) -> Result<()> {
    match cli.command {
        Commands::Resources => commands::schema::resources(&config.into_offline_provider()?),
        Commands::Schema {
            type_name,
            data_source,
        } => commands::schema::schema(&config.into_offline_provider()?, &type_name, data_source),
        Commands::Validate {
            type_name,
            config: path,
        } => commands::schema::validate(&config.into_offline_provider()?, &type_name, &path),
        Commands::Plan {
            type_name,
            config: path,
            state,
        } => commands::schema::plan(
            &config.into_offline_provider()?,
            &type_name,
            path.as_deref(),
            state.as_deref(),
        ),
        Commands::Create { type_name, plan } => {
            let provider = config.into_provider()?;
            commands::lifecycle::create(&provider, &type_name, &plan, cancel).await
        }
        Commands::Read { type_name, state } => {
            let provider = config.into_provider()?;
            commands::lifecycle::read(&provider, &type_name, &state, cancel).await
        }
        Commands::Update {
            type_name,
            plan,
            state,
        } => {
            let provider = config.into_provider()?;
            commands::lifecycle::update(&provider, &type_name, &plan, &state, cancel).await
        }
        Commands::Delete { type_name, state } => {
            let provider = config.into_provider()?;
            commands::lifecycle::delete(&provider, &type_name, &state, cancel).await
        }
        Commands::Import { type_name, id } => {
            let provider = config.into_provider()?;
            commands::lifecycle::import(&provider, &type_name, &id, cancel).await
        }
        Commands::Data {
            type_name,
            config: path,
        } => {
            let provider = config.into_provider()?;
            commands::data::run(&provider, &type_name, &path, cancel).await
        }
    }
}
