//! Configuration and constants for the client and CLI.

use std::time::Duration;

/// Default Langfuse API base URL
pub const DEFAULT_BASE_URL: &str = "https://cloud.langfuse.com";

/// Default timeout for API requests
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

// Environment variables read by `ClientConfig::from_env` and the CLI
pub const PUBLIC_KEY_ENV: &str = "LANGFUSE_PUBLIC_KEY";
pub const SECRET_KEY_ENV: &str = "LANGFUSE_SECRET_KEY";
pub const BASE_URL_ENV: &str = "LANGFUSE_BASE_URL";

// Path segments under the base URL
pub const API_PREFIX: &[&str] = &["api", "public"];
pub const TRACES_RESOURCE: &str = "traces";
pub const OBSERVATIONS_RESOURCE: &str = "observations";
pub const HEALTH_RESOURCE: &str = "health";
pub const EVENTS_RESOURCE: &str = "events";
pub const SPANS_RESOURCE: &str = "spans";
pub const GENERATIONS_RESOURCE: &str = "generations";
