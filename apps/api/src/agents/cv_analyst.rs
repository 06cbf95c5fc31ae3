//! CV Analyst — general profile analysis and targeted skill-gap analysis.

use tokio_util::sync::CancellationToken;

use crate::agents::fallbacks;
use crate::agents::prompts::{render, CV_ANALYSIS_PROMPT, SKILL_GAP_PROMPT};
use crate::gateway::{Operation, StructuredRequest, StructuredResponse, StructuredResponseGateway};
use crate::models::cv::{CvAnalysis, SkillGapAnalysis};

pub async fn analyze_cv(
    gateway: &StructuredResponseGateway,
    cv_text: &str,
    cancel: &CancellationToken,
) -> StructuredResponse<CvAnalysis> {
    let prompt = render(CV_ANALYSIS_PROMPT, &[("cv_text", cv_text)]);
    let request = StructuredRequest::new(Operation::CvAnalysis, prompt, CvAnalysis::shape());
    gateway.execute(request, fallbacks::cv_analysis(), cancel).await
}

pub async fn analyze_skill_gap(
    gateway: &StructuredResponseGateway,
    cv_text: &str,
    job_description: &str,
    cancel: &CancellationToken,
) -> StructuredResponse<SkillGapAnalysis> {
    let prompt = render(
        SKILL_GAP_PROMPT,
        &[("cv_text", cv_text), ("job_description", job_description)],
    );
    let request = StructuredRequest::new(Operation::SkillGap, prompt, SkillGapAnalysis::shape());
    gateway.execute(request, fallbacks::skill_gap(), cancel).await
}
