//! Outbound transport seam — the one external collaborator of the gateway.
//!
//! `StructuredResponseGateway` holds an `Arc<dyn GenerativeTransport>`; production wires in
//! `GeminiClient`, tests wire in stubs.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum TransportError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },

    #[error("Failed to decode response: {0}")]
    Decode(String),

    #[error("Model returned empty content")]
    EmptyContent,
}

/// How the transport should constrain the model's output.
#[derive(Debug, Clone, PartialEq)]
pub enum ResponseFormat {
    /// JSON output constrained to the given schema.
    Schema(Value),
    /// Plain prose.
    PlainText,
    /// No format directive at all. Required when the search tool is enabled.
    Unconstrained,
}

#[derive(Debug, Clone)]
pub struct TransportRequest {
    pub model: &'static str,
    pub prompt: String,
    pub format: ResponseFormat,
    pub web_search: bool,
}

/// A citation attached to a search-grounded response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GroundingSource {
    pub title: String,
    pub uri: String,
}

#[derive(Debug, Clone, Default)]
pub struct TransportResponse {
    pub text: String,
    pub sources: Vec<GroundingSource>,
}

#[async_trait]
pub trait GenerativeTransport: Send + Sync {
    async fn generate(&self, request: &TransportRequest)
        -> Result<TransportResponse, TransportError>;
}
