//! Observations: events, spans and generations recorded within a trace.

pub mod client;
pub mod types;

pub use client::ObservationsClient;
pub use types::{
    CreateEventRequest, CreateGenerationRequest, CreateSpanRequest, ListParams, ListResponse,
    Observation, ObservationType, UpdateEventRequest, UpdateGenerationRequest, UpdateSpanRequest,
};
