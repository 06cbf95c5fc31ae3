//! Opportunity Miner — role match, cultural fit and growth potential for one opening.

use tokio_util::sync::CancellationToken;

use crate::agents::fallbacks;
use crate::agents::prompts::{render, OPPORTUNITY_ANALYSIS_PROMPT};
use crate::gateway::{Operation, StructuredRequest, StructuredResponse, StructuredResponseGateway};
use crate::models::opportunity::OpportunityAnalysis;

/// Max characters of candidate context sent with each opportunity.
const CANDIDATE_CONTEXT_CHARS: usize = 500;

pub async fn analyze_opportunity(
    gateway: &StructuredResponseGateway,
    job_description: &str,
    candidate_summary: &str,
    cancel: &CancellationToken,
) -> StructuredResponse<OpportunityAnalysis> {
    let candidate_summary = truncate_context(candidate_summary);
    let prompt = render(
        OPPORTUNITY_ANALYSIS_PROMPT,
        &[
            ("candidate_summary", candidate_summary.as_str()),
            ("job_description", job_description),
        ],
    );
    let request = StructuredRequest::new(
        Operation::OpportunityAnalysis,
        prompt,
        OpportunityAnalysis::shape(),
    );
    gateway
        .execute(request, fallbacks::opportunity_analysis(), cancel)
        .await
}

fn truncate_context(summary: &str) -> String {
    if summary.chars().count() <= CANDIDATE_CONTEXT_CHARS {
        return summary.to_string();
    }
    let head: String = summary.chars().take(CANDIDATE_CONTEXT_CHARS).collect();
    format!("{head}...")
}
