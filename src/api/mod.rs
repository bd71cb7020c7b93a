//! Base HTTP client and shared wire types for the Langfuse public API.

pub mod client;
pub mod types;

// Re-export main types
pub use client::{build_url, ClientConfig, HttpClient};
pub use types::{HealthResponse, MetaResponse, Usage};
