//! Argument structs shared by the CLI commands.

use crate::api::ClientConfig;
use crate::utils::config::DEFAULT_BASE_URL;
use std::path::PathBuf;

/// Where and how to reach the API
///
/// **Public** - shared by every command that talks to the API
#[derive(Debug, Clone)]
pub struct ConnectionArgs {
    /// API base URL
    pub base_url: String,

    /// Project public key (pk-lf-...)
    pub public_key: String,

    /// Project secret key (sk-lf-...)
    pub secret_key: String,
}

impl Default for ConnectionArgs {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            public_key: String::new(),
            secret_key: String::new(),
        }
    }
}

impl ConnectionArgs {
    pub fn to_config(&self) -> ClientConfig {
        ClientConfig::new(&self.public_key, &self.secret_key).with_base_url(&self.base_url)
    }
}

/// Arguments for the tree command
///
/// **Public** - used by main.rs to construct from CLI args
#[derive(Debug, Clone, Default)]
pub struct TreeArgs {
    pub connection: ConnectionArgs,

    /// Trace to fetch
    pub trace_id: String,

    /// Output path for the JSON trace tree (optional)
    pub output_json: Option<PathBuf>,

    /// Print the observation hierarchy to stdout
    pub print_tree: bool,
}
