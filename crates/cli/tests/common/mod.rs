//! Shared test utilities for timeplus-provider CLI integration tests.
//!
//! Responsibilities:
//! - Provide a hermetic CLI command factory that prevents dotenv loading.
//! - Clear `TIMEPLUS_*` variables so the host environment cannot leak in.

use std::io::Write;

use assert_cmd::Command;
use tempfile::NamedTempFile;
use timeplus_client::testing::{TEST_API_KEY, TEST_WORKSPACE};

/// Returns a hermetic `timeplus-provider` command with no credentials.
pub fn timeplus_cmd() -> Command {
    let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("timeplus-provider");

    cmd.env("DOTENV_DISABLED", "1");
    cmd.env_remove("TIMEPLUS_ENDPOINT")
        .env_remove("TIMEPLUS_WORKSPACE")
        .env_remove("TIMEPLUS_API_KEY")
        .env_remove("TIMEPLUS_USERNAME")
        .env_remove("TIMEPLUS_PASSWORD")
        .env_remove("TIMEPLUS_TIMEOUT")
        .env_remove("TIMEPLUS_SKIP_VERIFY")
        .env_remove("RUST_LOG");

    cmd
}

/// Returns a command authenticated with an API key against `endpoint`.
#[allow(dead_code)]
pub fn timeplus_cmd_with_endpoint(endpoint: &str) -> Command {
    let mut cmd = timeplus_cmd();
    cmd.env("TIMEPLUS_ENDPOINT", endpoint)
        .env("TIMEPLUS_WORKSPACE", TEST_WORKSPACE)
        .env("TIMEPLUS_API_KEY", TEST_API_KEY);
    cmd
}

/// Write `value` to a temporary JSON file that lives as long as the handle.
#[allow(dead_code)]
pub fn json_file(value: &serde_json::Value) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("create temp file");
    write!(file, "{}", value).expect("write temp file");
    file
}
