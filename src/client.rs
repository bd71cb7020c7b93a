//! Unified client combining every resource client.

use crate::api::{ClientConfig, HealthResponse, HttpClient};
use crate::observations::ObservationsClient;
use crate::traces::TracesClient;
use crate::utils::config::HEALTH_RESOURCE;
use crate::utils::error::ApiError;
use std::sync::Arc;

/// Entry point to the Langfuse API
///
/// # Example
/// ```ignore
/// let client = LangfuseClient::from_env()?;
/// let tree = client.traces().get_tree("37ae885d46abc96bde952bcc387304b7")?;
/// println!("{} root observations", tree.root_node.len());
/// ```
#[derive(Debug, Clone)]
pub struct LangfuseClient {
    http: Arc<HttpClient>,
    traces: TracesClient,
    observations: ObservationsClient,
}

impl LangfuseClient {
    pub fn new(config: ClientConfig) -> Result<Self, ApiError> {
        let http = Arc::new(HttpClient::new(config)?);

        Ok(Self {
            traces: TracesClient::new(Arc::clone(&http)),
            observations: ObservationsClient::new(Arc::clone(&http)),
            http,
        })
    }

    /// Create a client from `LANGFUSE_*` environment variables
    pub fn from_env() -> Result<Self, ApiError> {
        Self::new(ClientConfig::from_env()?)
    }

    pub fn traces(&self) -> &TracesClient {
        &self.traces
    }

    pub fn observations(&self) -> &ObservationsClient {
        &self.observations
    }

    pub fn base_url(&self) -> &str {
        self.http.base_url()
    }

    /// Check the health of the API
    pub fn health(&self) -> Result<HealthResponse, ApiError> {
        let url = self.http.endpoint(&[HEALTH_RESOURCE])?;
        self.http.get_json(url)
    }
}
