//! StructuredResponseGateway — sends a templated prompt, asks for a constrained JSON
//! shape, parses whatever text comes back and guarantees the caller a usable value.
//!
//! Outcome taxonomy:
//! - transport failure            → `Fallback` (warned)
//! - unparseable / non-object     → `Fallback` (warned, bounded text prefix)
//! - valid JSON, missing fields   → `Ok` with per-field defaults
//! - caller cancellation          → `Cancelled` (silent, never the fallback)
//!
//! The gateway is stateless: everything it needs arrives as explicit parameters.

pub mod extract;
pub mod gemini;
pub mod shape;
pub mod transport;

#[cfg(test)]
pub(crate) mod testing;

use std::fmt;
use std::sync::Arc;

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::{json, Value};
use thiserror::Error;
use tokio_util::sync::CancellationToken;
use tracing::{debug, warn};

use crate::gateway::extract::{bounded_prefix, extract_json, ExtractionError};
use crate::gateway::shape::Shape;
use crate::gateway::transport::{
    GenerativeTransport, ResponseFormat, TransportError, TransportRequest, TransportResponse,
};

/// Deep-reasoning model: CV analysis, campaign strategy, company dossiers.
pub const PRO_MODEL: &str = "gemini-3-pro-preview";
/// Fast model for everything else.
pub const FLASH_MODEL: &str = "gemini-2.5-flash";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Operation {
    CvAnalysis,
    SkillGap,
    OpportunityAnalysis,
    OutreachSequence,
    CampaignStrategy,
    EmailSignature,
    CompanyDossier,
    MorningBriefing,
}

/// What kind of text the model is asked to produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResponseMode {
    Json,
    PlainText,
}

impl Operation {
    pub fn as_str(&self) -> &'static str {
        match self {
            Operation::CvAnalysis => "CV_ANALYSIS",
            Operation::SkillGap => "SKILL_GAP",
            Operation::OpportunityAnalysis => "OPPORTUNITY_ANALYSIS",
            Operation::OutreachSequence => "OUTREACH_SEQUENCE",
            Operation::CampaignStrategy => "CAMPAIGN_STRATEGY",
            Operation::EmailSignature => "EMAIL_SIGNATURE",
            Operation::CompanyDossier => "COMPANY_DOSSIER",
            Operation::MorningBriefing => "MORNING_BRIEFING",
        }
    }

    pub fn model(&self) -> &'static str {
        match self {
            Operation::CvAnalysis | Operation::CampaignStrategy | Operation::CompanyDossier => {
                PRO_MODEL
            }
            _ => FLASH_MODEL,
        }
    }

    pub fn response_mode(&self) -> ResponseMode {
        match self {
            Operation::MorningBriefing => ResponseMode::PlainText,
            _ => ResponseMode::Json,
        }
    }

    /// Only the dossier may use the search tool.
    pub fn supports_web_search(&self) -> bool {
        matches!(self, Operation::CompanyDossier)
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ExecuteOptions {
    pub use_web_search: bool,
}

/// One templated request. Built fresh per user action, never cached.
#[derive(Debug, Clone)]
pub struct StructuredRequest {
    pub operation: Operation,
    pub prompt: String,
    pub shape: Shape,
    pub options: ExecuteOptions,
}

impl StructuredRequest {
    pub fn new(operation: Operation, prompt: impl Into<String>, shape: Shape) -> Self {
        Self {
            operation,
            prompt: prompt.into(),
            shape,
            options: ExecuteOptions::default(),
        }
    }

    pub fn with_web_search(mut self) -> Self {
        self.options.use_web_search = true;
        self
    }

    /// Search and schema enforcement are mutually exclusive on the wire: a search
    /// request goes out unconstrained and relies on `extract_json` alone.
    fn transport_request(&self) -> TransportRequest {
        let web_search = if self.options.use_web_search && !self.operation.supports_web_search()
        {
            warn!(
                operation = %self.operation,
                "Web search is not supported for this operation; keeping schema enforcement"
            );
            false
        } else {
            self.options.use_web_search
        };

        let format = match (web_search, self.operation.response_mode()) {
            (true, _) => ResponseFormat::Unconstrained,
            (false, ResponseMode::Json) => ResponseFormat::Schema(self.shape.to_schema()),
            (false, ResponseMode::PlainText) => ResponseFormat::PlainText,
        };

        TransportRequest {
            model: self.operation.model(),
            prompt: self.prompt.clone(),
            format,
            web_search,
        }
    }
}

/// Result of one gateway call. Never an error.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", content = "data", rename_all = "snake_case")]
pub enum StructuredResponse<T> {
    Ok(T),
    Fallback(T),
    Cancelled,
}

impl<T> StructuredResponse<T> {
    #[cfg(test)]
    pub fn is_cancelled(&self) -> bool {
        matches!(self, StructuredResponse::Cancelled)
    }

    #[cfg(test)]
    pub fn payload(&self) -> Option<&T> {
        match self {
            StructuredResponse::Ok(v) | StructuredResponse::Fallback(v) => Some(v),
            StructuredResponse::Cancelled => None,
        }
    }
}

#[derive(Debug, Error)]
enum GatewayError {
    #[error("transport failed: {0}")]
    Transport(#[from] TransportError),

    #[error("model returned blank text")]
    BlankText,

    #[error(transparent)]
    Extraction(#[from] ExtractionError),

    #[error("extracted JSON is not an object (starts with: {0:?})")]
    NotAnObject(String),

    #[error("plain-text operation has no string field to fill")]
    NoTextField,

    #[error("back-filled object does not match the record type: {0}")]
    Record(#[from] serde_json::Error),
}

#[derive(Clone)]
pub struct StructuredResponseGateway {
    transport: Arc<dyn GenerativeTransport>,
}

impl StructuredResponseGateway {
    pub fn new(transport: Arc<dyn GenerativeTransport>) -> Self {
        Self { transport }
    }

    /// Runs one request to completion. Cancellation is checked right before the
    /// transport call and right after it returns; the in-flight call itself is not
    /// aborted, only the processing of its result is skipped.
    pub async fn execute<T: DeserializeOwned>(
        &self,
        request: StructuredRequest,
        fallback: T,
        cancel: &CancellationToken,
    ) -> StructuredResponse<T> {
        let operation = request.operation;

        if cancel.is_cancelled() {
            debug!(operation = %operation, "Cancelled before transport call");
            return StructuredResponse::Cancelled;
        }

        let transport_request = request.transport_request();
        let result = self.transport.generate(&transport_request).await;

        if cancel.is_cancelled() {
            debug!(operation = %operation, "Cancelled while transport call was in flight");
            return StructuredResponse::Cancelled;
        }

        match process(&request.shape, operation, transport_request.web_search, result) {
            Ok(value) => StructuredResponse::Ok(value),
            Err(e) => {
                warn!(operation = %operation, error = %e, "Returning fallback payload");
                StructuredResponse::Fallback(fallback)
            }
        }
    }
}

fn process<T: DeserializeOwned>(
    shape: &Shape,
    operation: Operation,
    web_search: bool,
    result: Result<TransportResponse, TransportError>,
) -> Result<T, GatewayError> {
    let response = result?;
    let text = response.text.trim();
    if text.is_empty() {
        return Err(GatewayError::BlankText);
    }

    let mut value = match operation.response_mode() {
        ResponseMode::Json => {
            let extracted = extract_json(text)?;
            if !extracted.is_object() {
                return Err(GatewayError::NotAnObject(bounded_prefix(text)));
            }
            shape.backfill(&extracted)
        }
        ResponseMode::PlainText => {
            let field = shape.text_field().ok_or(GatewayError::NoTextField)?;
            shape.backfill(&json!({ field: text }))
        }
    };

    // Sources ride alongside the shape rather than through back-fill.
    if web_search {
        value["sources"] = Value::Array(
            response
                .sources
                .into_iter()
                .map(|s| json!({ "title": s.title, "uri": s.uri }))
                .collect(),
        );
    }

    Ok(serde_json::from_value(value)?)
}
