//! Timeplus provider driver - run provider operations from the command line.
//!
//! Responsibilities:
//! - Parse command-line arguments and environment variables.
//! - Resolve the provider configuration and hand it to the dispatcher.
//! - Print JSON results to stdout and logs to stderr.
//!
//! Does NOT handle:
//! - Reconciliation logic (see `crates/provider`).
//! - HTTP transport (see `crates/client`).
//!
//! Invariants:
//! - `load_dotenv()` is called BEFORE CLI parsing to allow `.env` to provide clap defaults.
//! - stdout carries only command output; diagnostics and logs go to stderr.

mod args;
mod cancellation;
mod commands;
mod config_context;
mod dispatch;
mod error;

use args::Cli;
use cancellation::{CancellationToken, is_cancelled_error, print_cancelled_message};
use clap::Parser;
use config_context::ConfigCommandContext;
use dispatch::run_command;
use error::{ExitCode, ExitCodeExt};
use timeplus_config::{Config, ConfigError, ConfigLoader};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

fn load_config(cli: &Cli) -> Result<Config, ConfigError> {
    let mut loader = ConfigLoader::new().from_env()?;

    // CLI values win over the environment.
    if let Some(ref endpoint) = cli.endpoint {
        loader = loader.with_endpoint(endpoint.clone());
    }
    if let Some(ref workspace) = cli.workspace {
        loader = loader.with_workspace(workspace.clone());
    }
    if let Some(ref api_key) = cli.api_key {
        loader = loader.with_api_key(api_key.clone());
    }
    if let Some(ref username) = cli.username {
        loader = loader.with_username(username.clone());
    }
    if let Some(ref password) = cli.password {
        loader = loader.with_password(password.clone());
    }
    if let Some(timeout_secs) = cli.timeout {
        loader = loader.with_timeout(std::time::Duration::from_secs(timeout_secs));
    }
    if cli.skip_verify {
        loader = loader.with_skip_verify(true);
    }

    loader.build()
}

#[tokio::main]
async fn main() {
    if let Err(e) = ConfigLoader::new().load_dotenv() {
        eprintln!("Failed to load environment: {}", e);
        std::process::exit(ExitCode::GeneralError.as_i32());
    }

    let cli = Cli::parse();

    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with(fmt::layer().with_writer(std::io::stderr))
        .init();

    let config_context = match load_config(&cli) {
        Ok(config) => ConfigCommandContext::Real(Box::new(config)),
        Err(e) => ConfigCommandContext::Unavailable(e),
    };

    let cancel = CancellationToken::new();
    let cancel_clone = cancel.clone();

    tokio::spawn(async move {
        if let Err(e) = tokio::signal::ctrl_c().await {
            eprintln!("Failed to listen for Ctrl+C: {}", e);
            return;
        }
        cancel_clone.cancel();
    });

    let exit_code = match run_command(cli, config_context, &cancel).await {
        Ok(()) => ExitCode::Success,
        Err(e) if is_cancelled_error(&e) => {
            print_cancelled_message();
            ExitCode::Interrupted
        }
        Err(e) => {
            eprintln!("{:#}", e);
            e.exit_code()
        }
    };

    std::process::exit(exit_code.as_i32());
}
