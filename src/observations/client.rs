//! Client for observations: ingesting events, spans and generations, and
//! reading them back.

use super::types::{
    CreateEventRequest, CreateGenerationRequest, CreateSpanRequest, ListParams, ListResponse,
    Observation, UpdateEventRequest, UpdateGenerationRequest, UpdateSpanRequest,
};
use crate::api::HttpClient;
use crate::utils::config::{
    EVENTS_RESOURCE, GENERATIONS_RESOURCE, OBSERVATIONS_RESOURCE, SPANS_RESOURCE,
};
use crate::utils::error::ApiError;
use log::{debug, info};
use reqwest::Method;
use serde::Serialize;
use std::sync::Arc;

/// Observation operations over a shared transport
#[derive(Debug, Clone)]
pub struct ObservationsClient {
    http: Arc<HttpClient>,
}

impl ObservationsClient {
    pub fn new(http: Arc<HttpClient>) -> Self {
        Self { http }
    }

    /// Create a new event
    pub fn create_event(&self, request: &CreateEventRequest) -> Result<(), ApiError> {
        self.create(EVENTS_RESOURCE, request)
    }

    /// Update an existing event
    pub fn update_event(
        &self,
        event_id: &str,
        request: &UpdateEventRequest,
    ) -> Result<(), ApiError> {
        self.update(EVENTS_RESOURCE, event_id, request)
    }

    /// Create a new span
    pub fn create_span(&self, request: &CreateSpanRequest) -> Result<(), ApiError> {
        self.create(SPANS_RESOURCE, request)
    }

    /// Update an existing span
    pub fn update_span(&self, span_id: &str, request: &UpdateSpanRequest) -> Result<(), ApiError> {
        self.update(SPANS_RESOURCE, span_id, request)
    }

    /// Create a new generation
    pub fn create_generation(&self, request: &CreateGenerationRequest) -> Result<(), ApiError> {
        self.create(GENERATIONS_RESOURCE, request)
    }

    /// Update an existing generation
    pub fn update_generation(
        &self,
        generation_id: &str,
        request: &UpdateGenerationRequest,
    ) -> Result<(), ApiError> {
        self.update(GENERATIONS_RESOURCE, generation_id, request)
    }

    /// Fetch one observation with its full payload
    pub fn get(&self, observation_id: &str) -> Result<Observation, ApiError> {
        info!("Fetching observation: {}", observation_id);
        let url = self.http.endpoint(&[OBSERVATIONS_RESOURCE, observation_id])?;
        self.http.get_json(url)
    }

    /// List observations, optionally filtered
    pub fn list(&self, params: Option<&ListParams>) -> Result<ListResponse, ApiError> {
        let mut url = self.http.endpoint(&[OBSERVATIONS_RESOURCE])?;

        let pairs = params.map(ListParams::to_query_pairs).unwrap_or_default();
        if !pairs.is_empty() {
            url.query_pairs_mut().extend_pairs(pairs);
        }

        let response: ListResponse = self.http.get_json(url)?;
        info!(
            "Listed {} observations (page {} of {})",
            response.data.len(),
            response.meta.page,
            response.meta.total_pages
        );
        Ok(response)
    }

    fn create<B: Serialize>(&self, resource: &str, request: &B) -> Result<(), ApiError> {
        debug!("Creating {}", resource);
        let url = self.http.endpoint(&[resource])?;
        self.http.send_json(Method::POST, url, request)
    }

    fn update<B: Serialize>(&self, resource: &str, id: &str, request: &B) -> Result<(), ApiError> {
        debug!("Updating {} {}", resource, id);
        let url = self.http.endpoint(&[resource, id])?;
        self.http.send_json(Method::PATCH, url, request)
    }
}
