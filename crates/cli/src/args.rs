//! CLI argument definitions and parsing.
//!
//! Responsibilities:
//! - Define the CLI structure using clap derive macros.
//! - Mirror the provider configuration as global flags with `TIMEPLUS_*` env fallbacks.
//!
//! Non-responsibilities:
//! - Does not execute commands (see `dispatch` module).
//! - Does not build the provider configuration (see `main()`).

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "timeplus-provider")]
#[command(about = "Timeplus infrastructure provider - plan and reconcile Timeplus entities", long_about = None)]
#[command(version)]
#[command(
    after_help = "Examples:\n  timeplus-provider resources\n  timeplus-provider schema timeplus_stream\n  timeplus-provider plan stream --config orders.json --state state.json\n  timeplus-provider create stream --plan planned.json\n  timeplus-provider import stream orders\n  timeplus-provider data view --config lookup.json\n\nPass '-' as a FILE to read JSON from stdin.\n"
)]
pub struct Cli {
    /// Timeplus endpoint (e.g., https://us.timeplus.cloud)
    #[arg(short, long, global = true, env = "TIMEPLUS_ENDPOINT")]
    pub endpoint: Option<String>,

    /// Cloud workspace identifier
    #[arg(short, long, global = true, env = "TIMEPLUS_WORKSPACE")]
    pub workspace: Option<String>,

    /// API key for Timeplus Cloud (exclusive with username/password)
    #[arg(short, long, global = true, env = "TIMEPLUS_API_KEY", hide_env_values = true)]
    pub api_key: Option<String>,

    /// Username for on-prem basic authentication
    #[arg(short, long, global = true, env = "TIMEPLUS_USERNAME")]
    pub username: Option<String>,

    /// Password for on-prem basic authentication
    #[arg(short, long, global = true, env = "TIMEPLUS_PASSWORD", hide_env_values = true)]
    pub password: Option<String>,

    /// Request timeout in seconds
    #[arg(long, global = true, env = "TIMEPLUS_TIMEOUT")]
    pub timeout: Option<u64>,

    /// Skip TLS certificate verification (for self-signed certificates)
    #[arg(long, global = true, env = "TIMEPLUS_SKIP_VERIFY")]
    pub skip_verify: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List the resource and data source types this provider offers
    Resources,

    /// Print the schema of a resource or data source type
    Schema {
        /// Type name, with or without the `timeplus_` prefix
        type_name: String,

        /// Look up a data source instead of a resource
        #[arg(long)]
        data_source: bool,
    },

    /// Validate a resource configuration and print its diagnostics
    Validate {
        type_name: String,

        /// Configuration JSON
        #[arg(long, value_name = "FILE")]
        config: PathBuf,
    },

    /// Plan the change from prior state to configuration
    Plan {
        type_name: String,

        /// Configuration JSON; omit to plan a destroy
        #[arg(long, value_name = "FILE")]
        config: Option<PathBuf>,

        /// Prior state JSON; omit to plan a create
        #[arg(long, value_name = "FILE")]
        state: Option<PathBuf>,
    },

    /// Create a resource from planned state and print the new state
    Create {
        type_name: String,

        #[arg(long, value_name = "FILE")]
        plan: PathBuf,
    },

    /// Refresh a resource's state from Timeplus
    Read {
        type_name: String,

        #[arg(long, value_name = "FILE")]
        state: PathBuf,
    },

    /// Update a resource in place and print the new state
    Update {
        type_name: String,

        #[arg(long, value_name = "FILE")]
        plan: PathBuf,

        /// Prior state JSON
        #[arg(long, value_name = "FILE")]
        state: PathBuf,
    },

    /// Delete a resource
    Delete {
        type_name: String,

        #[arg(long, value_name = "FILE")]
        state: PathBuf,
    },

    /// Import an existing entity by its identity attribute (name or id)
    Import { type_name: String, id: String },

    /// Read a data source
    Data {
        type_name: String,

        #[arg(long, value_name = "FILE")]
        config: PathBuf,
    },
}
