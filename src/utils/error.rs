//! Error types for the entire library.
//!
//! We use `thiserror` for library-style errors with custom types,
//! and `anyhow` for application-level error propagation in main.rs and commands.

use thiserror::Error;

/// Errors that can occur while talking to the Langfuse API
#[derive(Error, Debug)]
pub enum ApiError {
    #[error("HTTP request failed: {0}")]
    RequestFailed(#[from] reqwest::Error),

    #[error("API error (status {status}): {body}")]
    Status { status: u16, body: String },

    #[error("Failed to decode response: {0}")]
    DecodeFailed(#[from] serde_json::Error),

    #[error("Failed to encode request body: {0}")]
    EncodeFailed(serde_json::Error),

    #[error("Empty response body (status {status})")]
    EmptyResponse { status: u16 },

    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    #[error("Missing credentials: {0}")]
    MissingCredentials(String),
}

/// Errors that can occur while writing or reading trace tree files
#[derive(Error, Debug)]
pub enum OutputError {
    #[error("Failed to write file: {0}")]
    WriteFailed(#[from] std::io::Error),

    #[error("Failed to serialize JSON: {0}")]
    SerializationFailed(#[from] serde_json::Error),

    #[error("Failed to read file: {0}")]
    ReadFailed(std::io::Error),

    #[error("Failed to parse trace tree JSON: {0}")]
    ParseFailed(serde_json::Error),

    #[error("Invalid output path: {0}")]
    InvalidPath(String),
}
