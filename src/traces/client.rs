//! Client for trace operations.

use super::types::{CreateTraceRequest, Trace, TraceTree, UpdateTraceRequest};
use crate::api::HttpClient;
use crate::utils::config::TRACES_RESOURCE;
use crate::utils::error::ApiError;
use log::{debug, info};
use reqwest::Method;
use std::sync::Arc;

/// Trace operations over a shared transport
#[derive(Debug, Clone)]
pub struct TracesClient {
    http: Arc<HttpClient>,
}

impl TracesClient {
    pub fn new(http: Arc<HttpClient>) -> Self {
        Self { http }
    }

    /// Create a new trace
    pub fn create(&self, request: &CreateTraceRequest) -> Result<(), ApiError> {
        let url = self.http.endpoint(&[TRACES_RESOURCE])?;
        self.http.send_json(Method::POST, url, request)
    }

    /// Fetch a trace with its flat observation list
    pub fn get(&self, trace_id: &str) -> Result<Trace, ApiError> {
        info!("Fetching trace: {}", trace_id);
        let url = self.http.endpoint(&[TRACES_RESOURCE, trace_id])?;
        let trace: Trace = self.http.get_json(url)?;
        debug!(
            "Trace {} returned {} observations",
            trace.header.id,
            trace.observations.len()
        );
        Ok(trace)
    }

    /// Update an existing trace
    pub fn update(&self, trace_id: &str, request: &UpdateTraceRequest) -> Result<(), ApiError> {
        let url = self.http.endpoint(&[TRACES_RESOURCE, trace_id])?;
        self.http.send_json(Method::PATCH, url, request)
    }

    /// Fetch a trace and rebuild its observations into a tree
    ///
    /// Transport and decode errors surface here; tree building itself
    /// cannot fail.
    pub fn get_tree(&self, trace_id: &str) -> Result<TraceTree, ApiError> {
        Ok(self.get(trace_id)?.into_trace_tree())
    }
}
