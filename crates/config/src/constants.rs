//! Centralized constants for the Timeplus provider workspace.
//!
//! This module contains default values used across crates to avoid
//! magic number duplication.

// =============================================================================
// Endpoints
// =============================================================================

/// Default endpoint when authenticating with an API key (Timeplus Cloud).
pub const DEFAULT_CLOUD_ENDPOINT: &str = "https://us.timeplus.cloud";

/// Default endpoint when authenticating with username/password (on-prem).
pub const DEFAULT_ONPREM_ENDPOINT: &str = "http://localhost:8000";

/// API version path segments appended after the workspace.
pub const API_PATH_SEGMENTS: [&str; 2] = ["api", "v1beta2"];

// =============================================================================
// Connection & Timeout Defaults
// =============================================================================

/// Default HTTP request timeout in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Maximum allowed request timeout in seconds (5 minutes).
pub const MAX_TIMEOUT_SECS: u64 = 300;

/// Default maximum number of HTTP redirects to follow.
pub const DEFAULT_MAX_REDIRECTS: usize = 5;

// =============================================================================
// Environment variables
// =============================================================================

pub const ENV_ENDPOINT: &str = "TIMEPLUS_ENDPOINT";
pub const ENV_WORKSPACE: &str = "TIMEPLUS_WORKSPACE";
pub const ENV_API_KEY: &str = "TIMEPLUS_API_KEY";
pub const ENV_USERNAME: &str = "TIMEPLUS_USERNAME";
pub const ENV_PASSWORD: &str = "TIMEPLUS_PASSWORD";
pub const ENV_TIMEOUT: &str = "TIMEPLUS_TIMEOUT";
pub const ENV_SKIP_VERIFY: &str = "TIMEPLUS_SKIP_VERIFY";
